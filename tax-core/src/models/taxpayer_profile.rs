use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FilingStatus;

/// Errors for taxpayer input that falls outside what the engine accepts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The filing status is not one of Single, Married Filing Jointly or
    /// Head of Household.
    #[error("invalid filing status '{0}'; expected S, M or H")]
    InvalidFilingStatus(String),

    /// A currency amount that must be non-negative was negative.
    #[error("{field} cannot be negative, got {value}")]
    InvalidAmount { field: &'static str, value: Decimal },

    /// A currency amount could not be parsed as a number.
    #[error("{field} must be a number, got '{input}'")]
    NonNumericAmount { field: &'static str, input: String },

    /// An amount is too large in magnitude for the engine to add up safely.
    #[error("{field} is out of range")]
    AmountOutOfRange { field: &'static str },

    /// The number of qualifying children was negative or not an integer.
    #[error("number of qualifying children must be a non-negative integer, got '{0}'")]
    InvalidChildCount(String),
}

/// Everything the engine needs to know about one taxpayer.
///
/// Gains are signed so that net losses can be represented; every other
/// amount must be non-negative, which [`TaxpayerProfile::validate`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub filing_status: FilingStatus,

    /// Wage income (W-2 box 1).
    pub salary: Decimal,

    /// Net short-term capital gain, taxed as ordinary income.
    pub short_term_gain: Decimal,

    /// Net long-term capital gain, taxed at the stacked LTCG rates.
    pub long_term_gain: Decimal,

    /// Standard deduction claimed; zero for filers not eligible for it.
    pub standard_deduction: Decimal,

    pub qualifying_children: u32,

    /// Federal income tax already withheld.
    pub withholding: Decimal,
}

impl TaxpayerProfile {
    /// Largest magnitude accepted for any single amount. Sums and
    /// differences of a handful of such amounts stay far inside
    /// [`Decimal::MAX`].
    pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

    /// Checks the amounts that may not be negative, then that every amount
    /// is within [`Self::MAX_AMOUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidAmount`] naming the first negative
    /// field among salary, standard deduction and withholding, or
    /// [`ProfileError::AmountOutOfRange`] naming the first amount whose
    /// magnitude exceeds [`Self::MAX_AMOUNT`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        let non_negative = [
            ("salary", self.salary),
            ("standard deduction", self.standard_deduction),
            ("withholding", self.withholding),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(ProfileError::InvalidAmount { field, value });
            }
        }

        let amounts = [
            ("salary", self.salary),
            ("short-term gain", self.short_term_gain),
            ("long-term gain", self.long_term_gain),
            ("standard deduction", self.standard_deduction),
            ("withholding", self.withholding),
        ];
        for (field, value) in amounts {
            check_range(field, value)?;
        }
        Ok(())
    }

    /// Modified adjusted gross income: salary plus both gains.
    pub fn magi(&self) -> Decimal {
        self.salary + self.short_term_gain + self.long_term_gain
    }

    /// Net investment income: the sum of both gains, possibly negative.
    pub fn investment_income(&self) -> Decimal {
        self.short_term_gain + self.long_term_gain
    }

    /// Ordinary income less the deduction, floored at zero.
    pub fn taxable_ordinary_income(&self) -> Decimal {
        (self.salary + self.short_term_gain - self.standard_deduction).max(Decimal::ZERO)
    }

    /// All income less the deduction, floored at zero.
    pub fn total_taxable_income(&self) -> Decimal {
        (self.magi() - self.standard_deduction).max(Decimal::ZERO)
    }
}

/// Rejects an amount whose magnitude exceeds [`TaxpayerProfile::MAX_AMOUNT`].
pub fn check_range(
    field: &'static str,
    value: Decimal,
) -> Result<(), ProfileError> {
    if value.abs() > TaxpayerProfile::MAX_AMOUNT {
        return Err(ProfileError::AmountOutOfRange { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_profile() -> TaxpayerProfile {
        TaxpayerProfile {
            filing_status: FilingStatus::Single,
            salary: dec!(100000),
            short_term_gain: dec!(5000),
            long_term_gain: dec!(20000),
            standard_deduction: dec!(15750),
            qualifying_children: 0,
            withholding: dec!(12000),
        }
    }

    #[test]
    fn validate_accepts_valid_profile() {
        assert_eq!(test_profile().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_negative_gains() {
        let profile = TaxpayerProfile {
            short_term_gain: dec!(-3000),
            long_term_gain: dec!(-10000),
            ..test_profile()
        };

        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_salary() {
        let profile = TaxpayerProfile {
            salary: dec!(-1),
            ..test_profile()
        };

        assert_eq!(
            profile.validate(),
            Err(ProfileError::InvalidAmount {
                field: "salary",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_withholding() {
        let profile = TaxpayerProfile {
            withholding: dec!(-250.50),
            ..test_profile()
        };

        assert_eq!(
            profile.validate(),
            Err(ProfileError::InvalidAmount {
                field: "withholding",
                value: dec!(-250.50),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_deduction() {
        let profile = TaxpayerProfile {
            standard_deduction: dec!(-15750),
            ..test_profile()
        };

        assert!(matches!(
            profile.validate(),
            Err(ProfileError::InvalidAmount {
                field: "standard deduction",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_amount_beyond_limit() {
        let profile = TaxpayerProfile {
            salary: Decimal::MAX,
            ..test_profile()
        };

        assert_eq!(
            profile.validate(),
            Err(ProfileError::AmountOutOfRange { field: "salary" })
        );
    }

    #[test]
    fn validate_rejects_huge_loss() {
        let profile = TaxpayerProfile {
            long_term_gain: Decimal::MIN,
            ..test_profile()
        };

        assert_eq!(
            profile.validate(),
            Err(ProfileError::AmountOutOfRange {
                field: "long-term gain"
            })
        );
    }

    #[test]
    fn validate_accepts_amount_at_limit() {
        let profile = TaxpayerProfile {
            salary: TaxpayerProfile::MAX_AMOUNT,
            short_term_gain: -TaxpayerProfile::MAX_AMOUNT,
            withholding: TaxpayerProfile::MAX_AMOUNT,
            ..test_profile()
        };

        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn income_partitions() {
        let profile = test_profile();

        assert_eq!(profile.magi(), dec!(125000));
        assert_eq!(profile.investment_income(), dec!(25000));
        assert_eq!(profile.taxable_ordinary_income(), dec!(89250));
        assert_eq!(profile.total_taxable_income(), dec!(109250));
    }

    #[test]
    fn taxable_incomes_floor_at_zero() {
        let profile = TaxpayerProfile {
            salary: dec!(10000),
            short_term_gain: Decimal::ZERO,
            long_term_gain: Decimal::ZERO,
            ..test_profile()
        };

        assert_eq!(profile.taxable_ordinary_income(), Decimal::ZERO);
        assert_eq!(profile.total_taxable_income(), Decimal::ZERO);
    }
}
