//! Defines the shapecheck CLI through clap types.

mod check;
mod completions;
mod guid;

use std::{
    borrow::Cow,
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use thiserror::Error;

pub use self::check::CheckCommand;
pub use self::completions::CompletionsCommand;
pub use self::guid::GuidCommand;

/// Process exit code when `check` finds a mismatch.
pub const MISMATCH_EXIT_CODE: i32 = 1;

/// Process exit code when a command fails with an error.
pub const ERROR_EXIT_CODE: i32 = 2;

/// Process exit code after a panic. Kept apart from the mismatch code so a
/// crash is never read as a failed match.
pub const PANIC_EXIT_CODE: i32 = 101;

/// Command line options that shapecheck accepts, defined using the clap crate.
#[derive(Debug, Parser)]
#[clap(name = "shapecheck", version, about)]
pub struct Options {
    #[clap(flatten)]
    pub global: GlobalOptions,

    /// Subcommand to run in this invocation.
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Options {
    /// Runs the subcommand. Returns whether it succeeded; `check` reports a
    /// shape mismatch as `Ok(false)` rather than as an error.
    pub fn run(self) -> anyhow::Result<bool> {
        match self.subcommand {
            Subcommand::Check(subcommand) => subcommand.run(self.global),
            Subcommand::Guid(subcommand) => subcommand.run().map(|()| true),
            Subcommand::Completions(subcommand) => subcommand.run().map(|()| true),
        }
    }
}

#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[clap(long("verbose"), short, global(true), action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Set color behavior. Valid values are auto, always, and never.
    #[clap(long("color"), global(true), default_value("auto"))]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ColorChoiceParseError {
                attempted: source.to_owned(),
            }),
        }
    }
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid color choice '{attempted}'. Valid values are: auto, always, never")]
pub struct ColorChoiceParseError {
    attempted: String,
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Check(CheckCommand),
    Guid(GuidCommand),
    Completions(CompletionsCommand),
}

impl Subcommand {
    pub fn command_name(&self) -> &'static str {
        match self {
            Subcommand::Check(_) => "check",
            Subcommand::Guid(_) => "guid",
            Subcommand::Completions(_) => "completions",
        }
    }
}

pub fn resolve_path(path: &Path) -> Cow<'_, Path> {
    if path.is_absolute() {
        Cow::Borrowed(path)
    } else {
        let base = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Cow::Owned(base.join(path))
    }
}
