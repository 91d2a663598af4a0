use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use termcolor::{BufferWriter, Color, ColorSpec, WriteColor};

use crate::config::{MatchConfig, SequenceMode};
use crate::constraint::ShapeConstraint;
use crate::json;
use crate::shape::Shape;

use super::{resolve_path, GlobalOptions};

/// Check that a JSON5 document matches the shape described by another.
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Path to the JSON5 file describing the expected shape.
    pub expected: PathBuf,

    /// Path to the JSON5 file holding the actual value.
    pub actual: PathBuf,

    /// Report elements beyond the end of an expected sequence.
    #[clap(long)]
    pub exact_sequences: bool,

    /// Tolerance used when comparing floats. Numbers compare exactly by
    /// default.
    #[clap(long)]
    pub float_epsilon: Option<f64>,

    /// TOML file with matcher settings. Flags override its values.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(self, global: GlobalOptions) -> anyhow::Result<bool> {
        let config = self.match_config()?;

        let expected_path = resolve_path(&self.expected);
        let actual_path = resolve_path(&self.actual);

        let expected = Shape::from(
            json::read_value(&expected_path).context("could not read the expected shape")?,
        );
        let actual = json::read_value(&actual_path).context("could not read the actual value")?;

        log::debug!(
            "Checking {} against {}",
            actual_path.display(),
            expected_path.display()
        );

        let result = ShapeConstraint::with_config(expected, config).apply_to(&actual);

        let writer = BufferWriter::stdout(global.color.into());
        let mut buffer = writer.buffer();

        match result.failure_message() {
            None => {
                buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(&mut buffer, "{} matches", self.actual.display())?;
            }
            Some(message) => {
                buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(
                    &mut buffer,
                    "{} does not match {}",
                    self.actual.display(),
                    self.expected.display()
                )?;
                buffer.reset()?;
                writeln!(&mut buffer, "{message}")?;
            }
        }
        buffer.reset()?;
        writer.print(&buffer)?;

        Ok(result.is_success())
    }

    fn match_config(&self) -> anyhow::Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(&resolve_path(path))
                .with_context(|| format!("could not load config {}", path.display()))?,
            None => MatchConfig::default(),
        };

        if self.exact_sequences {
            config.sequence_mode = SequenceMode::Exact;
        }
        if let Some(epsilon) = self.float_epsilon {
            config.float_epsilon = epsilon;
        }
        config.validate()?;

        Ok(config)
    }
}
