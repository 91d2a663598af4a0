use insta::assert_snapshot;
use libshapecheck::cli::{ERROR_EXIT_CODE, MISMATCH_EXIT_CODE};

use crate::shapecheck_test::io_util::{run_shapecheck, Fixture};

const CUSTOMER: &str = r#"{
    // two addresses, extra members everywhere
    Name: "name",
    Age: 42,
    Addresses: [
        { State: "state_1", Zipcode: "zip_1" },
        { State: "state_2", Zipcode: "zip_2" },
    ],
}"#;

#[test]
fn matching_documents_exit_zero() {
    let fixture = Fixture::new();
    fixture.write("actual.json5", CUSTOMER);
    fixture.write(
        "expected.json5",
        r#"{ Name: "name", Addresses: [{ State: "state_1" }, { Zipcode: "zip_2" }] }"#,
    );

    let result = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_snapshot!(result.stdout, @"actual.json5 matches");
}

#[test]
fn mismatch_prints_offending_leaf() {
    let fixture = Fixture::new();
    fixture.write("actual.json5", CUSTOMER);
    fixture.write(
        "expected.json5",
        r#"{ Name: "name", Addresses: [{ State: "state_1" }, { NotThere: 0 }] }"#,
    );

    let result = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);

    assert_eq!(result.code, Some(MISMATCH_EXIT_CODE), "stderr: {}", result.stderr);
    assert_snapshot!(result.stdout, @"
    actual.json5 does not match expected.json5
    Path: Addresses[1].NotThere
    Expected: 0
    But was:  member was missing
    ");
}

#[test]
fn exact_sequences_flag_reports_extra_element() {
    let fixture = Fixture::new();
    fixture.write("actual.json5", CUSTOMER);
    fixture.write("expected.json5", r#"{ Addresses: [{ State: "state_1" }] }"#);

    let prefix = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);
    assert_eq!(prefix.code, Some(0), "stderr: {}", prefix.stderr);

    let exact = run_shapecheck(
        fixture.path(),
        &["check", "expected.json5", "actual.json5", "--exact-sequences"],
    );
    assert_eq!(exact.code, Some(MISMATCH_EXIT_CODE), "stderr: {}", exact.stderr);
    assert_snapshot!(exact.stdout, @r#"
    actual.json5 does not match expected.json5
    Path: Addresses[1]
    Expected: nothing
    But was:  {"State":"state_2","Zipcode":"zip_2"}
    "#);
}

#[test]
fn numbers_compare_exactly_without_config() {
    let fixture = Fixture::new();
    fixture.write("actual.json5", "{ Price: 100009.0, Count: 3.0 }");
    fixture.write("expected.json5", "{ Count: 3, Price: 100000 }");

    let result = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);

    assert_eq!(result.code, Some(MISMATCH_EXIT_CODE), "stderr: {}", result.stderr);
    assert_snapshot!(result.stdout, @"
    actual.json5 does not match expected.json5
    Path: Price
    Expected: 100000
    But was:  100009.0
    ");
}

#[test]
fn config_file_sets_float_epsilon() {
    let fixture = Fixture::new();
    fixture.write("actual.json5", "{ Ratio: 0.52 }");
    fixture.write("expected.json5", "{ Ratio: 0.5 }");
    fixture.write("shapecheck.toml", "float-epsilon = 0.05\n");

    let strict = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);
    assert_eq!(strict.code, Some(MISMATCH_EXIT_CODE), "stderr: {}", strict.stderr);

    let loose = run_shapecheck(
        fixture.path(),
        &[
            "check",
            "expected.json5",
            "actual.json5",
            "--config",
            "shapecheck.toml",
        ],
    );
    assert_eq!(loose.code, Some(0), "stderr: {}", loose.stderr);
}

#[test]
fn unreadable_input_is_an_error() {
    let fixture = Fixture::new();
    fixture.write("expected.json5", "{ A: 1 }");

    let result = run_shapecheck(fixture.path(), &["check", "expected.json5", "missing.json5"]);

    assert_eq!(result.code, Some(ERROR_EXIT_CODE));
    assert!(
        result.stderr.contains("could not read the actual value"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn malformed_shape_is_an_error() {
    let fixture = Fixture::new();
    fixture.write("expected.json5", "{ A: ");
    fixture.write("actual.json5", "{ A: 1 }");

    let result = run_shapecheck(fixture.path(), &["check", "expected.json5", "actual.json5"]);

    assert_eq!(result.code, Some(ERROR_EXIT_CODE));
    assert!(
        result.stderr.contains("JSON5 parse error"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn guid_prints_repeated_digit() {
    let fixture = Fixture::new();
    let result = run_shapecheck(fixture.path(), &["guid", "c"]);

    assert_eq!(result.code, Some(0));
    assert_snapshot!(result.stdout, @"cccccccc-cccc-cccc-cccc-cccccccccccc");
}

#[test]
fn guid_rejects_non_hex_digit() {
    let fixture = Fixture::new();
    let result = run_shapecheck(fixture.path(), &["guid", "x"]);

    assert_eq!(result.code, Some(ERROR_EXIT_CODE));
    assert!(
        result.stderr.contains("'x' is not a hexadecimal digit"),
        "stderr: {}",
        result.stderr
    );
}
