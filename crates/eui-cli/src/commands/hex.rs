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
                encoded: eui.hex(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_records(out, &records, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{addresses, output_string};

    #[test]
    fn test_hex() {
        let mut out = Vec::new();
        handle(&mut out, &addresses(&["12:34:51:52:67:89", "AA-BB-CC-DD-EE-FF"]), OutputFormat::Text).unwrap();
        assert_eq!(output_string(out), "123451526789\naabbccddeeff\n");
    }

    #[test]
    fn test_hex_invalid() {
        let mut out = Vec::new();
        assert!(handle(&mut out, &addresses(&["123451526789"]), OutputFormat::Text).is_err());
    }
}
