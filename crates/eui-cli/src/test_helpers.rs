#[cfg(test)]
use crate::config::{Config, OutputFormat};

/// Build owned command line arguments
#[cfg(test)]
pub fn addresses(inputs: &[&str]) -> Vec<String> {
    inputs.iter().map(|s| s.to_string()).collect()
}

/// Collect what a command wrote to its output buffer
#[cfg(test)]
pub fn output_string(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
pub fn create_test_config() -> Config {
    Config {
        delimiter: '-',
        group_size: 2,
        output: OutputFormat::Text,
    }
}
