//! Built-in ratios and configuration mapping.

use finreport_shared::{AppError, AppResult, RatioConfig, types::RatioId};
use rust_decimal::Decimal;

use super::types::{RatioDefinition, RatioDirection};

/// The default ratio set: liquidity, leverage and two margins.
#[must_use]
pub fn default_ratios() -> Vec<RatioDefinition> {
    vec![
        RatioDefinition::new(
            "Current Ratio",
            "currentAssets / currentLiabilities",
            Some(Decimal::new(15, 1)),
            RatioDirection::HigherIsBetter,
        ),
        RatioDefinition::new(
            "Debt-to-Equity",
            "totalLiabilities / totalEquity",
            Some(Decimal::TWO),
            RatioDirection::LowerIsBetter,
        ),
        RatioDefinition::new(
            "Gross Profit Margin",
            "grossProfit / revenue * 100",
            Some(Decimal::new(30, 0)),
            RatioDirection::HigherIsBetter,
        ),
        RatioDefinition::new(
            "Net Profit Margin",
            "netProfit / revenue * 100",
            Some(Decimal::TEN),
            RatioDirection::HigherIsBetter,
        ),
    ]
}

/// Builds ratio definitions from configuration.
///
/// An empty list yields [`default_ratios`]. Formulas are not checked here;
/// a bad formula surfaces as an evaluation failure on its own result.
///
/// # Errors
///
/// Returns a validation error for a malformed ID or an unknown direction.
pub fn definitions_from_config(configs: &[RatioConfig]) -> AppResult<Vec<RatioDefinition>> {
    if configs.is_empty() {
        return Ok(default_ratios());
    }

    configs.iter().map(definition_from_config).collect()
}

fn definition_from_config(config: &RatioConfig) -> AppResult<RatioDefinition> {
    let id = match &config.id {
        Some(raw) => raw.parse::<RatioId>().map_err(|e| {
            AppError::Validation(format!("Ratio '{}' has invalid id '{raw}': {e}", config.name))
        })?,
        None => RatioId::new(),
    };

    let direction = match &config.direction {
        Some(raw) => raw
            .parse::<RatioDirection>()
            .map_err(|e| AppError::Validation(format!("Ratio '{}': {e}", config.name)))?,
        None => RatioDirection::infer_from_name(&config.name),
    };

    Ok(RatioDefinition {
        id,
        name: config.name.clone(),
        formula: config.formula.clone(),
        threshold: config.threshold,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config(name: &str, direction: Option<&str>) -> RatioConfig {
        RatioConfig {
            id: None,
            name: name.to_string(),
            formula: "revenue".to_string(),
            threshold: Some(dec!(1)),
            direction: direction.map(str::to_string),
        }
    }

    #[test]
    fn test_default_ratios() {
        let ratios = default_ratios();
        let names: Vec<_> = ratios.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Current Ratio", "Debt-to-Equity", "Gross Profit Margin", "Net Profit Margin"]
        );
        assert_eq!(ratios[0].threshold, Some(dec!(1.5)));
        assert_eq!(ratios[1].direction, RatioDirection::LowerIsBetter);
        assert_eq!(ratios[2].threshold, Some(dec!(30)));
        assert_eq!(ratios[3].threshold, Some(dec!(10)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let ratios = definitions_from_config(&[]).unwrap();
        assert_eq!(ratios.len(), 4);
    }

    #[test]
    fn test_direction_is_inferred_when_absent() {
        let ratios = definitions_from_config(&[
            config("Debt Ratio", None),
            config("Quick Ratio", None),
            config("Debt Ratio (inverted)", Some("higher_is_better")),
        ])
        .unwrap();

        assert_eq!(ratios[0].direction, RatioDirection::LowerIsBetter);
        assert_eq!(ratios[1].direction, RatioDirection::HigherIsBetter);
        assert_eq!(ratios[2].direction, RatioDirection::HigherIsBetter);
    }

    #[test]
    fn test_configured_id_is_kept() {
        let mut cfg = config("Quick Ratio", None);
        cfg.id = Some("0191b3c4-7e2a-7c3d-9e4f-1a2b3c4d5e6f".to_string());

        let ratios = definitions_from_config(&[cfg]).unwrap();
        assert_eq!(ratios[0].id.to_string(), "0191b3c4-7e2a-7c3d-9e4f-1a2b3c4d5e6f");
    }

    #[test]
    fn test_invalid_direction_is_rejected() {
        let err = definitions_from_config(&[config("Quick Ratio", Some("sideways"))]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let mut cfg = config("Quick Ratio", None);
        cfg.id = Some("not-a-uuid".to_string());

        let err = definitions_from_config(&[cfg]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
