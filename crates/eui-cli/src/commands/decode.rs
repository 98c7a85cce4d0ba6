use super::{print_records, Record};
use crate::config::OutputFormat;
use anyhow::{anyhow, bail, Context, Result};
use eui::hex::decode_octet;
use eui::{Eui48, HardwareAddr};
use std::io::Write;
use tracing::debug;

/// Read contiguous hex digits (optionally prefixed with `0x`) as raw bytes
fn parse_raw_bytes(input: &str) -> Result<HardwareAddr> {
    let digits = input.strip_prefix("0x").unwrap_or(input).as_bytes();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits in {:?}", input);
    }

    let bytes = digits
        .chunks_exact(2)
        .map(|pair| decode_octet(pair[0], pair[1]).ok_or_else(|| anyhow!("invalid hex digits in {:?}", input)))
        .collect::<Result<Vec<_>>>()?;

    Ok(HardwareAddr::new(bytes))
}

pub fn handle(out: &mut impl Write, inputs: &[String], output: OutputFormat) -> Result<()> {
    let records = inputs
        .iter()
        .map(|input| -> Result<Record> {
            let addr = parse_raw_bytes(input)?;
            debug!("Decoding {}-bit hardware address {}", addr.len() * 8, addr);
            let eui = Eui48::from_hw_addr(&addr)
                .with_context(|| format!("failed to normalize hardware address {}", addr))?;
            Ok(Record {
                input: input.clone(),
                eui48: eui,
                encoded: eui.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_records(out, &records, output)
}
