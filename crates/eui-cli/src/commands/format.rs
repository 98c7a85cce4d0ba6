use super::{parse_address, print_records, Record};
use crate::config::{delimiter_byte, OutputFormat};
use anyhow::Result;
use std::io::Write;

pub fn handle(
    out: &mut impl Write,
    addresses: &[String],
    group_size: usize,
    delimiter: char,
    output: OutputFormat,
) -> Result<()> {
    let delimiter = delimiter_byte(delimiter)?;

    let records = addresses
        .iter()
        .map(|input| -> Result<Record> {
            let eui = parse_address(input)?;
            Ok(Record {
                input: input.clone(),
                eui48: eui,
                encoded: eui.encode(group_size, delimiter)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_records(out, &records, output)
}
