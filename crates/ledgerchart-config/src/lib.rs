//! Configuration management for ledgerchart
//!
//! This module handles loading and validation of the ledgerchart
//! configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigErrorCode, ConfigResult};

// ==================== Configuration Types ====================

/// Account category prefixes
///
/// Prefixes must be the canonical (dealiased) account names, e.g.
/// "Expenses" rather than an alias such as "e".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Prefix grouping asset accounts
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,
    /// Prefix grouping expense accounts
    #[serde(default = "default_expense_prefix")]
    pub expense_prefix: String,
    /// Prefix grouping income accounts
    #[serde(default = "default_income_prefix")]
    pub income_prefix: String,
    /// Prefix grouping liability accounts
    #[serde(default = "default_liability_prefix")]
    pub liability_prefix: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            asset_prefix: default_asset_prefix(),
            expense_prefix: default_expense_prefix(),
            income_prefix: default_income_prefix(),
            liability_prefix: default_liability_prefix(),
        }
    }
}

fn default_asset_prefix() -> String {
    "Assets".to_string()
}

fn default_expense_prefix() -> String {
    "Expenses".to_string()
}

fn default_income_prefix() -> String {
    "Income".to_string()
}

fn default_liability_prefix() -> String {
    "Liabilities".to_string()
}

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to amounts at display time
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Bucket interval for chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// One point per calendar day
    #[default]
    Day,
    /// One point every seven days
    Week,
    /// One point per calendar month
    Month,
}

impl std::str::FromStr for Interval {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "daily" => Ok(Interval::Day),
            "week" | "weekly" => Ok(Interval::Week),
            "month" | "monthly" => Ok(Interval::Month),
            _ => Err(format!("Invalid interval: {}", s)),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Day => write!(f, "day"),
            Interval::Week => write!(f, "week"),
            Interval::Month => write!(f, "month"),
        }
    }
}

/// Chart defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartConfig {
    /// Default bucket interval
    #[serde(default)]
    pub interval: Interval,
    /// Accounts charted when none are requested explicitly
    #[serde(default)]
    pub accounts: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Account category prefixes
    #[serde(default)]
    pub accounts: AccountsConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Chart settings
    #[serde(default)]
    pub chart: ChartConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let prefixes = [
            ("accounts.asset_prefix", &self.accounts.asset_prefix),
            ("accounts.expense_prefix", &self.accounts.expense_prefix),
            ("accounts.income_prefix", &self.accounts.income_prefix),
            ("accounts.liability_prefix", &self.accounts.liability_prefix),
        ];
        for (field, prefix) in prefixes {
            if prefix.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "Account prefix must not be empty".to_string(),
                });
            }
            if prefix.starts_with(':') || prefix.ends_with(':') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "Account prefix must not start or end with ':'".to_string(),
                });
            }
        }
        for (i, (field, prefix)) in prefixes.iter().enumerate() {
            if let Some((other, _)) = prefixes[..i].iter().find(|(_, p)| p == prefix) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("Account prefix '{}' is already used by {}", prefix, other),
                });
            }
        }

        if self.currency.symbol.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "currency.symbol".to_string(),
                reason: "Currency symbol must not be empty".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.accounts.asset_prefix, "Assets");
        assert_eq!(config.accounts.liability_prefix, "Liabilities");
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.chart.interval, Interval::Day);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_default_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "accounts:\n  liability_prefix: Credit\nchart:\n  interval: month\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.accounts.liability_prefix, "Credit");
        assert_eq!(config.accounts.expense_prefix, "Expenses");
        assert_eq!(config.chart.interval, Interval::Month);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml("accounts: [unclosed");
        assert!(matches!(result, Err(ConfigError::InvalidYaml { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let mut config = Config::default();
        config.accounts.expense_prefix = "  ".to_string();
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "accounts.expense_prefix");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_dangling_separator() {
        let mut config = Config::default();
        config.accounts.asset_prefix = "Assets:".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_prefixes() {
        let mut config = Config::default();
        config.accounts.liability_prefix = "Assets".to_string();
        match config.validate() {
            Err(ConfigError::InvalidValue { field, reason }) => {
                assert_eq!(field, "accounts.liability_prefix");
                assert!(reason.contains("accounts.asset_prefix"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let yaml = "accounts:\n  income_prefix: Expenses\n";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_interval_default_is_day() {
        assert_eq!(Interval::default(), Interval::Day);
        let chart: ChartConfig = serde_yaml::from_str("accounts: []").unwrap();
        assert_eq!(chart.interval, Interval::Day);
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(PathBuf::from("/nonexistent/ledgerchart.yaml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_interval_from_str() {
        assert_eq!("day".parse::<Interval>().unwrap(), Interval::Day);
        assert_eq!("Weekly".parse::<Interval>().unwrap(), Interval::Week);
        assert_eq!("MONTH".parse::<Interval>().unwrap(), Interval::Month);
        assert!("fortnight".parse::<Interval>().is_err());
        assert_eq!(Interval::Week.to_string(), "week");
    }
}
