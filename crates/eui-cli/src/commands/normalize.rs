use super::{parse_address, print_records, Record};
use crate::config::OutputFormat;
use anyhow::Result;
use std::io::Write;

pub fn handle(out: &mut impl Write, addresses: &[String], output: OutputFormat) -> Result<()> {
    let records = addresses
        .iter()
        .map(|input| -> Result<Record> {
            let eui = parse_address(input)?;
            Ok(Record {
                input: input.clone(),
                eui48: eui,
                encoded: eui.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_records(out, &records, output)
}
