use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Configuration structure loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delimiter placed between groups
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Octets per group for the format command
    #[serde(default = "default_group_size")]
    pub group_size: usize,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_delimiter() -> char {
    char::from(eui::DEFAULT_DELIMITER)
}

fn default_group_size() -> usize {
    1
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One encoded address per line
    #[default]
    Text,
    /// One JSON record per line
    Json,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            group_size: default_group_size(),
            output: OutputFormat::default(),
        }
    }
}

/// Convert a delimiter character to the single byte written between groups
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter {:?} is not an ASCII character", delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delimiter, ':');
        assert_eq!(config.group_size, 1);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_yaml() {
        let config: Config = serde_yaml::from_str("delimiter: \".\"\ngroup_size: 2\noutput: json\n").unwrap();
        assert_eq!(config.delimiter, '.');
        assert_eq!(config.group_size, 2);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_yaml_defaults() {
        let config: Config = serde_yaml::from_str("group_size: 3\n").unwrap();
        assert_eq!(config.delimiter, ':');
        assert_eq!(config.group_size, 3);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_yaml_invalid_output() {
        assert!(serde_yaml::from_str::<Config>("output: xml\n").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("euictl-config-{}.yaml", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let config = Config {
            delimiter: '-',
            group_size: 2,
            output: OutputFormat::Json,
        };
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(Config::from_file("/nonexistent/euictl.yaml").is_err());
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(':').unwrap(), b':');
        assert_eq!(delimiter_byte('.').unwrap(), b'.');
        assert!(delimiter_byte('é').is_err());
        assert!(delimiter_byte('→').is_err());
    }
}
