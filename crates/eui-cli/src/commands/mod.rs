pub mod decode;
pub mod format;
pub mod hex;
pub mod normalize;

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use eui::Eui48;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// One converted address, as printed in JSON output
#[derive(Debug, Serialize)]
pub struct Record {
    /// Address exactly as given on the command line
    pub input: String,

    /// Normalized identifier (canonical text form)
    pub eui48: Eui48,

    /// Requested encoding
    pub encoded: String,
}

/// Parse and normalize a textual address given on the command line
pub fn parse_address(input: &str) -> Result<Eui48> {
    let eui = Eui48::parse(input).with_context(|| format!("failed to parse address {:?}", input))?;
    debug!("Parsed {} as {}", input, eui);
    Ok(eui)
}

/// Write records in the selected output format
pub fn print_records(out: &mut impl Write, records: &[Record], output: OutputFormat) -> Result<()> {
    for record in records {
        match output {
            OutputFormat::Text => writeln!(out, "{}", record.encoded)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
