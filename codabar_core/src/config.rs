//! Configuration file support for the codabar tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/codabar/config.toml`.

use crate::seed::without_trailing_digits;
use crate::{Algorithm, CodabarOptions, Error, Prefix, Result, Suffix};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub symbols: SymbolsConfig,

    #[serde(default)]
    pub check_digit: CheckDigitConfig,
}

/// Default start/stop symbols
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymbolsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: default_suffix(),
        }
    }
}

/// Default check-digit behaviour
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CheckDigitConfig {
    /// Unset means no check digit
    #[serde(default)]
    pub algorithm: Option<Algorithm>,

    #[serde(default)]
    pub exclude_trailing_digits: usize,
}

fn default_prefix() -> String {
    "A".into()
}

fn default_suffix() -> String {
    "B".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::info!("No config file found at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("codabar").join("config.toml"))
    }

    pub fn prefix(&self) -> Result<Prefix> {
        Prefix::new(&self.symbols.prefix)
            .map_err(|_| Error::Config(format!("invalid prefix {:?}", self.symbols.prefix)))
    }

    pub fn suffix(&self) -> Result<Suffix> {
        Suffix::new(&self.symbols.suffix)
            .map_err(|_| Error::Config(format!("invalid suffix {:?}", self.symbols.suffix)))
    }

    /// Composer options described by the `[check_digit]` section
    pub fn options(&self) -> CodabarOptions {
        let mut options = CodabarOptions::new();
        if let Some(algorithm) = self.check_digit.algorithm {
            options = options.with_check_digit(algorithm);
        }
        if self.check_digit.exclude_trailing_digits > 0 {
            options = options.with_seed(without_trailing_digits(
                self.check_digit.exclude_trailing_digits,
            ));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, Codabar};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.prefix().unwrap().as_char(), 'A');
        assert_eq!(config.suffix().unwrap().as_char(), 'B');
        assert!(config.check_digit.algorithm.is_none());
        assert!(!config.options().has_check_digit());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.check_digit.algorithm = Some(Algorithm::Mod10W21Bulk);
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.check_digit.algorithm, Some(Algorithm::Mod10W21Bulk));
        assert_eq!(parsed.symbols.prefix, config.symbols.prefix);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[check_digit]
algorithm = "7dsr"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.check_digit.algorithm, Some(Algorithm::SevenCheck));
        assert_eq!(config.check_digit.exclude_trailing_digits, 0);
        assert_eq!(config.symbols.suffix, "B"); // default
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let toml_str = r#"
[check_digit]
algorithm = "luhn"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_invalid_symbol_is_config_error() {
        let toml_str = r#"
[symbols]
prefix = "Z"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(matches!(config.prefix(), Err(Error::Config(_))));
    }

    #[test]
    fn test_options_from_config() {
        let toml_str = r#"
[symbols]
prefix = "C"
suffix = "D"

[check_digit]
algorithm = "mod11-w2-7"
exclude_trailing_digits = 1
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let body = Body::new("1234569").unwrap();
        let codabar = Codabar::new(
            &config.prefix().unwrap(),
            &body,
            &config.suffix().unwrap(),
            &config.options(),
        )
        .unwrap();
        assert_eq!(codabar, "C12345690D");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[symbols]\nprefix = \"D\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.symbols.prefix, "D");
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
