mod commands;
mod config;

#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "/etc/euictl/config.yaml";
const LOCAL_CONFIG_PATH: &str = "euictl.yaml";

/// euictl - convert and normalize EUI-48 hardware addresses
#[derive(Parser, Debug)]
#[command(name = "euictl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print addresses grouped with a custom delimiter
    Format {
        /// Addresses (e.g., 12:34:51:52:67:89 or 1234.5152.6789)
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Octets per group (default from configuration)
        #[arg(short, long)]
        group_size: Option<usize>,
        /// Delimiter between groups (default from configuration)
        #[arg(short, long)]
        delimiter: Option<char>,
    },
    /// Print addresses as plain hex without delimiters
    Hex {
        /// Addresses
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print addresses in canonical form, contracting MAC-derived EUI-64s
    Normalize {
        /// Addresses
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Normalize raw 48 or 64 bit addresses written as contiguous hex
    Decode {
        /// Raw addresses (e.g., 02152bfffee49b60)
        #[arg(required = true)]
        bytes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "euictl=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli.config);

    let stdout = std::io::stdout();
    run(cli, &config, &mut stdout.lock())
}

/// Load configuration - try specified path, then current directory, then defaults
fn load_config(path: &str) -> Config {
    let config_path = if Path::new(path).exists() {
        path
    } else if path == DEFAULT_CONFIG_PATH && Path::new(LOCAL_CONFIG_PATH).exists() {
        info!("Config not found at {}, using {}", path, LOCAL_CONFIG_PATH);
        LOCAL_CONFIG_PATH
    } else if path == DEFAULT_CONFIG_PATH {
        debug!("No configuration at {}, using defaults", path);
        return Config::default();
    } else {
        warn!("Configuration file {} not found, using defaults", path);
        return Config::default();
    };

    match Config::from_file(config_path) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            warn!("Failed to load configuration from {}: {}", config_path, e);
            info!("Using default configuration");
            Config::default()
        }
    }
}

fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    let output = cli.output.unwrap_or(config.output);

    match cli.command {
        Commands::Format {
            addresses,
            group_size,
            delimiter,
        } => commands::format::handle(
            out,
            &addresses,
            group_size.unwrap_or(config.group_size),
            delimiter.unwrap_or(config.delimiter),
            output,
        ),
        Commands::Hex { addresses } => commands::hex::handle(out, &addresses, output),
        Commands::Normalize { addresses } => commands::normalize::handle(out, &addresses, output),
        Commands::Decode { bytes } => commands::decode::handle(out, &bytes, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_config, output_string};
    use clap::CommandFactory;

    fn run_args(args: &[&str], config: &Config) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, config, &mut out)?;
        Ok(output_string(out))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_uses_config_defaults() {
        let out = run_args(&["euictl", "format", "12:34:51:52:67:89"], &create_test_config()).unwrap();
        assert_eq!(out, "1234-5152-6789\n");
    }

    #[test]
    fn test_format_flags_override_config() {
        let args = ["euictl", "format", "-g", "1", "-d", ".", "12:34:51:52:67:89"];
        let out = run_args(&args, &create_test_config()).unwrap();
        assert_eq!(out, "12.34.51.52.67.89\n");
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let args = ["euictl", "normalize", "--output", "json", "12:34:51:52:67:89"];
        let out = run_args(&args, &create_test_config()).unwrap();
        assert!(out.starts_with('{'));
        assert!(out.contains("\"eui48\":\"12:34:51:52:67:89\""));
    }

    #[test]
    fn test_hex_and_decode() {
        let config = Config::default();
        assert_eq!(run_args(&["euictl", "hex", "12:34:51:52:67:89"], &config).unwrap(), "123451526789\n");
        assert_eq!(run_args(&["euictl", "decode", "02152bfffee49b60"], &config).unwrap(), "00:15:2b:e4:9b:60\n");
    }

    #[test]
    fn test_missing_addresses() {
        assert!(Cli::try_parse_from(["euictl", "normalize"]).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert_eq!(load_config("/nonexistent/euictl.yaml"), Config::default());
    }

    #[test]
    fn test_load_config_invalid_file() {
        let path = std::env::temp_dir().join(format!("euictl-invalid-{}.yaml", std::process::id()));
        std::fs::write(&path, "group_size: [not, a, number]\n").unwrap();
        let config = load_config(&path.to_string_lossy());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, Config::default());
    }
}
