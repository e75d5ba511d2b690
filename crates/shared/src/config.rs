//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Environment prefix, e.g. `FINREPORT__REPORT__BALANCE_TOLERANCE`.
const ENV_PREFIX: &str = "FINREPORT";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report engine settings.
    #[serde(default)]
    pub report: ReportSettings,
    /// Ratio definitions to evaluate. Empty means the built-in default set.
    #[serde(default)]
    pub ratios: Vec<RatioConfig>,
}

/// Report engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSettings {
    /// Largest absolute difference at which `assets == liabilities + equity` still holds.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
    /// Minimum number of ratio definitions before evaluation runs in parallel.
    #[serde(default = "default_parallel_ratio_threshold")]
    pub parallel_ratio_threshold: usize,
}

fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 9) // 0.000000001
}

fn default_parallel_ratio_threshold() -> usize {
    16
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            balance_tolerance: default_balance_tolerance(),
            parallel_ratio_threshold: default_parallel_ratio_threshold(),
        }
    }
}

/// A ratio definition as written in configuration.
///
/// Kept string-typed here; the core crate validates it into a ratio definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatioConfig {
    /// Optional stable UUID. A fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Arithmetic formula over named totals.
    pub formula: String,
    /// Threshold the current value is compared against.
    #[serde(default)]
    pub threshold: Option<Decimal>,
    /// `lower_is_better` or `higher_is_better`. Inferred from the name when absent.
    #[serde(default)]
    pub direction: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from a TOML document, without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match the schema.
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.report, ReportSettings::default());
        assert_eq!(config.report.balance_tolerance, dec!(0.000000001));
        assert_eq!(config.report.parallel_ratio_threshold, 16);
        assert!(config.ratios.is_empty());
    }

    #[test]
    fn test_ratios_from_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [report]
            balance_tolerance = "0.01"
            parallel_ratio_threshold = 4

            [[ratios]]
            name = "Current Ratio"
            formula = "currentAssets / currentLiabilities"
            threshold = "1.5"
            direction = "higher_is_better"

            [[ratios]]
            name = "Debt-to-Equity"
            formula = "totalLiabilities / totalEquity"
            "#,
        )
        .unwrap();

        assert_eq!(config.report.balance_tolerance, dec!(0.01));
        assert_eq!(config.report.parallel_ratio_threshold, 4);
        assert_eq!(config.ratios.len(), 2);
        assert_eq!(config.ratios[0].threshold, Some(dec!(1.5)));
        assert_eq!(config.ratios[0].direction.as_deref(), Some("higher_is_better"));
        assert_eq!(config.ratios[1].threshold, None);
        assert_eq!(config.ratios[1].direction, None);
        assert_eq!(config.ratios[1].id, None);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = AppConfig::from_toml_str("[report\nbalance_tolerance =").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_ratio_missing_formula_is_rejected() {
        let err = AppConfig::from_toml_str("[[ratios]]\nname = \"Broken\"").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_environment_override() {
        temp_env::with_vars(
            [
                ("FINREPORT__REPORT__BALANCE_TOLERANCE", Some("0.5")),
                ("RUN_MODE", Some("finreport-test")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report.balance_tolerance, dec!(0.5));
                assert_eq!(config.report.parallel_ratio_threshold, 16);
            },
        );
    }
}
