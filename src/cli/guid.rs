use clap::Parser;

use crate::guid::try_guid_of;

/// Print the GUID made of a single repeated hex digit.
#[derive(Debug, Parser)]
pub struct GuidCommand {
    /// Hex digit to repeat, for example `a` or `7`.
    pub digit: char,
}

impl GuidCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let guid = try_guid_of(self.digit)?;
        println!("{guid}");
        Ok(())
    }
}
