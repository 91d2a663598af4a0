use libshapecheck::{
    actual_of, assert_shape, shape, ActualValue, MatchConfig, Shape, StructuralMatcher,
};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Customer {
    name: String,
    addresses: Vec<Address>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
    state: String,
    zipcode: String,
}

fn customer() -> Value {
    let customer = Customer {
        name: "name".to_owned(),
        addresses: (1..=2)
            .map(|i| Address {
                state: format!("state_{i}"),
                zipcode: format!("zip_{i}"),
            })
            .collect(),
    };
    actual_of(&customer).unwrap()
}

/// Each entry is `name: expected, actual => failure`, where `failure` is
/// `None` for a passing match or `Some((path, expected, actual))` with the
/// rendered offending leaf.
macro_rules! gen_scenario_tests {
    ( $($test_name: ident: $expected: expr, $actual: expr => $failure: expr,)* ) => {
        $(
            paste::item! {
                #[test]
                fn [<scenario_ $test_name>]() {
                    let _ = tracing_subscriber::fmt::try_init();

                    run_scenario($expected, $actual, $failure);
                }
            }
        )*
    };
}

gen_scenario_tests! {
    identical_member:
        shape!({ "A": "a" }), json!({ "A": "a" }) => None,
    differing_member:
        shape!({ "A": "a" }), json!({ "A": "b" }) => Some(("A", "\"a\"", "\"b\"")),
    superset_actual:
        shape!({ "A": "a" }), json!({ "A": "a", "B": 1 }) => None,
    missing_member:
        shape!({ "A": "a", "B": 1 }), json!({ "A": "a" }) => Some(("B", "1", "member was missing")),
    customer_addresses:
        shape!({
            "Name": "name",
            "Addresses": [{ "State": "state_1" }, { "Zipcode": "zip_2" }],
        }),
        customer() => None,
    customer_missing_address_member:
        shape!({
            "Name": "name",
            "Addresses": [{ "State": "state_1" }, { "NotThere": 0 }],
        }),
        customer() => Some(("Addresses[1].NotThere", "0", "member was missing")),
    customer_missing_address:
        shape!({ "Addresses": [{}, {}, {}] }),
        customer() => Some(("Addresses[2]", "{}", "element was missing")),
    customer_wrong_zipcode:
        shape!({ "Addresses": [{ "Zipcode": "zip_1" }, { "Zipcode": "zip_3" }] }),
        customer() => Some(("Addresses[1].Zipcode", "\"zip_3\"", "\"zip_2\"")),
    nested_sequences:
        shape!({ "Grid": [[1, 2], [3]] }),
        json!({ "Grid": [[1, 2, 9], [4, 5]] }) => Some(("Grid[1][0]", "3", "4")),
    first_failure_wins:
        shape!({ "A": { "X": 1 }, "B": { "Y": 2 } }),
        json!({ "A": { "X": 0 }, "B": {} }) => Some(("A.X", "1", "0")),
    scalar_where_object_expected:
        shape!({ "A": { "B": true } }),
        json!({ "A": [true] }) => Some(("A", r#"{"B":true}"#, "[true]")),
}

fn run_scenario(expected: Shape, actual: Value, failure: Option<(&str, &str, &str)>) {
    let mut matcher = StructuralMatcher::new(expected);
    let success = matcher.matches(&actual);

    match failure {
        None => {
            assert!(success, "expected a match, outcomes: {:?}", matcher.outcomes());
        }
        Some((path, expected, actual)) => {
            assert!(!success, "expected a mismatch");
            let rendered = matcher
                .format_failure_message()
                .unwrap()
                .render(&libshapecheck::DefaultRenderer);

            assert_eq!(
                (rendered.path.as_str(), rendered.expected.as_str(), rendered.actual.as_str()),
                (path, expected, actual)
            );
        }
    }
}

#[test]
fn missing_member_is_always_reported_at_its_own_path() {
    let members = ["Alpha", "Beta", "Gamma"];
    let full = json!({ "Alpha": 1, "Beta": 2, "Gamma": 3 });

    for removed in members {
        let mut actual = full.clone();
        actual.as_object_mut().unwrap().remove(removed);

        let mut matcher = StructuralMatcher::new(Shape::from(full.clone()));
        assert!(!matcher.matches(&actual));

        let report = matcher.format_failure_message().unwrap();
        assert_eq!(report.path.to_string(), removed);
        assert_eq!(report.actual, ActualValue::MemberMissing);
    }
}

#[test]
fn short_sequences_report_first_missing_index() {
    let expected = Shape::from(json!({ "Items": [0, 1, 2, 3, 4] }));

    for len in 0..5 {
        let items: Vec<i32> = (0..len).collect();
        let mut matcher = StructuralMatcher::new(expected.clone());
        assert!(!matcher.matches(&json!({ "Items": items })));

        let report = matcher.format_failure_message().unwrap();
        assert_eq!(report.path.to_string(), format!("Items[{len}]"));
        assert_eq!(report.actual, ActualValue::ElementMissing);
    }
}

#[test]
fn matchers_can_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut matcher = StructuralMatcher::new(shape!({ "Id": i }));
                matcher.matches(&json!({ "Id": i, "Other": true }))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn assert_shape_with_exact_sequences() {
    assert_shape!(
        json!({ "Tags": ["a", "b"] }),
        shape!({ "Tags": ["a", "b"] }),
        MatchConfig::default().exact_sequences(),
    );
}

#[test]
#[should_panic(expected = "Expected: nothing")]
fn assert_shape_exact_sequences_rejects_extra_elements() {
    assert_shape!(
        json!({ "Tags": ["a", "b", "c"] }),
        shape!({ "Tags": ["a", "b"] }),
        MatchConfig::default().exact_sequences(),
    );
}
