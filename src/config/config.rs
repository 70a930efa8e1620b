// src/config/config.rs
use crate::miner::difficulty::{DEFAULT_DIFFICULTY_BITS, Difficulty};
use crate::types::OutputFormat;
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for a mining run
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of worker threads to use for mining
    /// (default: number of CPU cores)
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,

    /// Required leading zero bits of each block digest
    /// (default: 24)
    #[serde(default = "default_difficulty_bits")]
    pub difficulty_bits: u32,

    /// Largest nonce tried per transaction before giving up
    /// (default: the full 64-bit space)
    #[serde(default = "default_max_nonce")]
    pub max_nonce: u64,

    /// Whether the first line of the input file is a header
    /// (default: true)
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Exclude the first transaction from the pending credit report
    /// (default: false)
    #[serde(default)]
    pub skip_leading_row: bool,

    /// Report output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Seconds between progress log lines, 0 disables them
    /// (default: 10)
    #[serde(default = "default_report_interval")]
    pub report_interval_secs: u64,
}

fn default_worker_threads() -> usize {
    num_cpus::get()
}

fn default_difficulty_bits() -> u32 {
    DEFAULT_DIFFICULTY_BITS
}

fn default_max_nonce() -> u64 {
    u64::MAX
}

fn default_has_header() -> bool {
    true
}

fn default_report_interval() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_threads: default_worker_threads(),
            difficulty_bits: default_difficulty_bits(),
            max_nonce: default_max_nonce(),
            has_header: default_has_header(),
            skip_leading_row: false,
            format: OutputFormat::default(),
            report_interval_secs: default_report_interval(),
        }
    }
}

impl Config {
    /// Loads configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// The result is not validated: command-line overrides may still fix
    /// values such as `worker_threads = 0`, so callers run
    /// [`Config::validate`] once those are applied.
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(MinerError)` - If file couldn't be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, MinerError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            MinerError::ConfigError(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&config_str)?)
    }

    /// Parses and validates a TOML configuration string
    pub fn parse(config_str: &str) -> Result<Self, MinerError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot
    pub fn validate(&self) -> Result<(), MinerError> {
        if self.worker_threads == 0 {
            return Err(MinerError::ConfigError(
                "worker_threads must be at least 1".into(),
            ));
        }
        self.difficulty()?;
        Ok(())
    }

    /// The configured difficulty target
    pub fn difficulty(&self) -> Result<Difficulty, MinerError> {
        Difficulty::new(self.difficulty_bits)
    }

    /// Generates a configuration template string
    ///
    /// # Returns
    /// String containing a commented TOML configuration template
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# Ledger Miner Configuration\n\n");
        template.push_str("# Number of worker threads (defaults to the CPU count)\n");
        template.push_str(&format!("worker_threads = {}\n", default_worker_threads()));
        template.push_str("# Leading zero bits required of every block digest\n");
        template.push_str(&format!("difficulty_bits = {}\n", DEFAULT_DIFFICULTY_BITS));
        template.push_str("# Largest nonce tried per transaction (omit for the full 64-bit range)\n");
        template.push_str("# max_nonce = 100000000\n\n");
        template.push_str("# Input handling\n");
        template.push_str("has_header = true\n");
        template.push_str("# Treat the first transaction as a sentinel row for pending credit\n");
        template.push_str("skip_leading_row = false\n\n");
        template.push_str("# Output: csv or json\n");
        template.push_str("format = \"csv\"\n");
        template.push_str("# Seconds between progress log lines (0 = off)\n");
        template.push_str(&format!(
            "report_interval_secs = {}\n",
            default_report_interval()
        ));
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.difficulty_bits, 24);
        assert_eq!(config.max_nonce, u64::MAX);
        assert!(config.has_header);
        assert!(!config.skip_leading_row);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn parses_overrides() {
        let config = Config::parse(
            "worker_threads = 3\ndifficulty_bits = 8\nformat = \"json\"\nskip_leading_row = true\n",
        )
        .unwrap();

        assert_eq!(config.worker_threads, 3);
        assert_eq!(config.difficulty().unwrap().bits(), 8);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.skip_leading_row);
    }

    #[test]
    fn template_round_trips() {
        let config = Config::parse(&Config::generate_template()).unwrap();
        assert_eq!(config.difficulty_bits, DEFAULT_DIFFICULTY_BITS);
        assert_eq!(config.report_interval_secs, 10);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Config::parse("worker_threads = 0"),
            Err(MinerError::ConfigError(_))
        ));
        assert!(matches!(
            Config::parse("difficulty_bits = 300"),
            Err(MinerError::ConfigError(_))
        ));
        assert!(matches!(
            Config::parse("format = \"xml\""),
            Err(MinerError::ConfigError(_))
        ));
    }

    #[test]
    fn load_defers_validation_to_overrides() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "worker_threads = 0\ndifficulty_bits = 8").unwrap();

        let mut config = Config::load(file.path()).unwrap();
        assert_eq!(config.worker_threads, 0);
        assert!(config.validate().is_err());

        config.worker_threads = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_still_rejects_malformed_toml() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "worker_threads = \"many\"").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(MinerError::ConfigError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            Config::load("/nonexistent/ledger-miner.toml"),
            Err(MinerError::ConfigError(_))
        ));
    }
}
