//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_DIVIDE_BY, FlatRates, RangePolicy, RateBasis, RateMode};

fn default_divide_by() -> Decimal {
    DEFAULT_DIVIDE_BY
}

/// Payroll calculation settings loaded from `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Human-readable name of this configuration.
    pub name: String,
    /// How overtime hours are priced when a request does not say.
    pub rate_mode: RateMode,
    /// Divisor from monthly basic to an hourly rate.
    #[serde(default = "default_divide_by")]
    pub divide_by: Decimal,
    /// Per-hour amounts used in flat mode.
    #[serde(default)]
    pub flat_rates: FlatRates,
    /// How range-valued payment line amounts are treated in salary totals.
    #[serde(default)]
    pub range_policy: RangePolicy,
}

impl PayrollConfig {
    /// Builds the rate basis for an employee.
    ///
    /// Request-level values take precedence over the configured ones.
    pub fn rate_basis(
        &self,
        basic: Decimal,
        mode: Option<RateMode>,
        divide_by: Option<Decimal>,
    ) -> RateBasis {
        RateBasis {
            mode: mode.unwrap_or(self.rate_mode),
            basic,
            divide_by: Some(divide_by.unwrap_or(self.divide_by)),
            flat_rates: self.flat_rates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = "name: Minimal\nrate_mode: flat\n";
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.divide_by, dec("240"));
        assert_eq!(config.flat_rates, FlatRates::default());
        assert_eq!(config.range_policy, RangePolicy::Reject);
    }

    #[test]
    fn test_rate_basis_prefers_request_values() {
        let yaml = "name: Test\nrate_mode: flat\ndivide_by: 200\n";
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();

        let basis = config.rate_basis(
            dec("16000"),
            Some(RateMode::ProportionalToBasic),
            Some(dec("240")),
        );
        assert_eq!(basis.mode, RateMode::ProportionalToBasic);
        assert_eq!(basis.divide_by, Some(dec("240")));

        let basis = config.rate_basis(dec("16000"), None, None);
        assert_eq!(basis.mode, RateMode::Flat);
        assert_eq!(basis.divide_by, Some(dec("200")));
    }
}
