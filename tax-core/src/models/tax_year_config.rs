use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FilingStatus;

/// Errors raised when a [`TaxYearConfig`] holds values outside their valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxYearConfigError {
    /// A rate must be between 0 and 1.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    /// A threshold or amount must be non-negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },

    /// Phase-out steps must be strictly positive.
    #[error("phase-out step must be positive, got {0}")]
    InvalidPhaseoutStep(Decimal),
}

/// Non-bracket constants for one tax year: credit amounts, surtax rates
/// and the thresholds they switch on at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,

    // Child Tax Credit
    pub ctc_per_child: Decimal,
    pub ctc_refundable_cap_per_child: Decimal,
    pub ctc_earned_income_floor: Decimal,
    pub ctc_earned_income_rate: Decimal,
    pub ctc_phaseout_step: Decimal,
    pub ctc_reduction_per_step: Decimal,
    pub ctc_phaseout_single: Decimal,
    pub ctc_phaseout_married: Decimal,
    /// Carried for completeness; the phase-out lookup uses
    /// `ctc_phaseout_single` for head of household filers.
    pub ctc_phaseout_head_of_household: Decimal,

    // Net Investment Income Tax
    pub niit_rate: Decimal,
    pub niit_threshold_single: Decimal,
    pub niit_threshold_married: Decimal,

    // Long-term capital gains rates above the 0% band
    pub ltcg_middle_rate: Decimal,
    pub ltcg_top_rate: Decimal,

    // Standard deductions
    pub standard_deduction_single: Decimal,
    pub standard_deduction_married: Decimal,
    pub standard_deduction_head_of_household: Decimal,
}

impl TaxYearConfig {
    /// Constants for the 2025 tax year.
    pub fn tax_year_2025() -> Self {
        Self {
            tax_year: 2025,
            ctc_per_child: dec!(2200),
            ctc_refundable_cap_per_child: dec!(1700),
            ctc_earned_income_floor: dec!(2500),
            ctc_earned_income_rate: dec!(0.15),
            ctc_phaseout_step: dec!(1000),
            ctc_reduction_per_step: dec!(50),
            ctc_phaseout_single: dec!(200000),
            ctc_phaseout_married: dec!(400000),
            ctc_phaseout_head_of_household: dec!(200000),
            niit_rate: dec!(0.038),
            niit_threshold_single: dec!(200000),
            niit_threshold_married: dec!(250000),
            ltcg_middle_rate: dec!(0.15),
            ltcg_top_rate: dec!(0.20),
            standard_deduction_single: dec!(15750),
            standard_deduction_married: dec!(31500),
            standard_deduction_head_of_household: dec!(23625),
        }
    }

    /// Standard deduction for a filer eligible to claim it.
    pub fn standard_deduction(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.standard_deduction_single,
            FilingStatus::MarriedFilingJointly => self.standard_deduction_married,
            FilingStatus::HeadOfHousehold => self.standard_deduction_head_of_household,
        }
    }

    /// MAGI above which the Child Tax Credit starts phasing out.
    pub fn ctc_phaseout_threshold(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::MarriedFilingJointly => self.ctc_phaseout_married,
            FilingStatus::Single | FilingStatus::HeadOfHousehold => self.ctc_phaseout_single,
        }
    }

    /// MAGI above which the Net Investment Income Tax applies.
    pub fn niit_threshold(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::MarriedFilingJointly => self.niit_threshold_married,
            FilingStatus::Single | FilingStatus::HeadOfHousehold => self.niit_threshold_single,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TaxYearConfigError`] if a rate is outside [0, 1], an amount
    /// or threshold is negative, or the phase-out step is not positive.
    pub fn validate(&self) -> Result<(), TaxYearConfigError> {
        let rates = [
            ("ctc_earned_income_rate", self.ctc_earned_income_rate),
            ("niit_rate", self.niit_rate),
            ("ltcg_middle_rate", self.ltcg_middle_rate),
            ("ltcg_top_rate", self.ltcg_top_rate),
        ];
        for (name, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(TaxYearConfigError::InvalidRate { name, value });
            }
        }

        let amounts = [
            ("ctc_per_child", self.ctc_per_child),
            ("ctc_refundable_cap_per_child", self.ctc_refundable_cap_per_child),
            ("ctc_earned_income_floor", self.ctc_earned_income_floor),
            ("ctc_reduction_per_step", self.ctc_reduction_per_step),
            ("ctc_phaseout_single", self.ctc_phaseout_single),
            ("ctc_phaseout_married", self.ctc_phaseout_married),
            ("ctc_phaseout_head_of_household", self.ctc_phaseout_head_of_household),
            ("niit_threshold_single", self.niit_threshold_single),
            ("niit_threshold_married", self.niit_threshold_married),
            ("standard_deduction_single", self.standard_deduction_single),
            ("standard_deduction_married", self.standard_deduction_married),
            (
                "standard_deduction_head_of_household",
                self.standard_deduction_head_of_household,
            ),
        ];
        for (name, value) in amounts {
            if value < Decimal::ZERO {
                return Err(TaxYearConfigError::NegativeAmount { name, value });
            }
        }

        if self.ctc_phaseout_step <= Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidPhaseoutStep(
                self.ctc_phaseout_step,
            ));
        }
        Ok(())
    }
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self::tax_year_2025()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tax_year_2025_is_valid() {
        assert_eq!(TaxYearConfig::tax_year_2025().validate(), Ok(()));
    }

    #[test]
    fn standard_deduction_per_status() {
        let config = TaxYearConfig::tax_year_2025();

        assert_eq!(config.standard_deduction(FilingStatus::Single), dec!(15750));
        assert_eq!(
            config.standard_deduction(FilingStatus::MarriedFilingJointly),
            dec!(31500)
        );
        assert_eq!(
            config.standard_deduction(FilingStatus::HeadOfHousehold),
            dec!(23625)
        );
    }

    #[test]
    fn head_of_household_shares_single_ctc_threshold() {
        let config = TaxYearConfig {
            ctc_phaseout_head_of_household: dec!(300000),
            ..TaxYearConfig::tax_year_2025()
        };

        assert_eq!(
            config.ctc_phaseout_threshold(FilingStatus::HeadOfHousehold),
            dec!(200000)
        );
        assert_eq!(
            config.ctc_phaseout_threshold(FilingStatus::MarriedFilingJointly),
            dec!(400000)
        );
    }

    #[test]
    fn niit_threshold_per_status() {
        let config = TaxYearConfig::tax_year_2025();

        assert_eq!(config.niit_threshold(FilingStatus::Single), dec!(200000));
        assert_eq!(config.niit_threshold(FilingStatus::HeadOfHousehold), dec!(200000));
        assert_eq!(
            config.niit_threshold(FilingStatus::MarriedFilingJointly),
            dec!(250000)
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let config = TaxYearConfig {
            niit_rate: dec!(3.8),
            ..TaxYearConfig::tax_year_2025()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::InvalidRate {
                name: "niit_rate",
                value: dec!(3.8),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let config = TaxYearConfig {
            ctc_phaseout_married: dec!(-1),
            ..TaxYearConfig::tax_year_2025()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::NegativeAmount {
                name: "ctc_phaseout_married",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_zero_phaseout_step() {
        let config = TaxYearConfig {
            ctc_phaseout_step: Decimal::ZERO,
            ..TaxYearConfig::tax_year_2025()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::InvalidPhaseoutStep(Decimal::ZERO))
        );
    }
}
