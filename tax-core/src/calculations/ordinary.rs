//! Progressive tax on ordinary income.
//!
//! Income is walked up the bracket schedule: every bracket the income
//! passes is taxed in full at its rate, and the bracket the income ends in
//! is taxed on the remainder.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::FilingStatus;
//! use tax_core::calculations::{BracketTable, OrdinaryTaxCalculator};
//!
//! let calculator = OrdinaryTaxCalculator::new(BracketTable::schedule(FilingStatus::Single));
//!
//! // 1192.50 + 4386.00 + 7870.50
//! assert_eq!(calculator.compute_tax(dec!(84250)), dec!(13449.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::BracketSchedule;

/// Applies a marginal bracket schedule to taxable ordinary income.
#[derive(Debug, Clone, Copy)]
pub struct OrdinaryTaxCalculator<'a> {
    schedule: &'a BracketSchedule,
}

impl<'a> OrdinaryTaxCalculator<'a> {
    /// Brackets must be sorted by ascending upper bound with the last one
    /// unbounded.
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self { schedule }
    }

    /// Tax owed on `taxable_income`. Zero or negative income owes nothing.
    pub fn compute_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut previous_bound = Decimal::ZERO;

        for bracket in self.schedule {
            match bracket.upper_bound {
                Some(upper) if taxable_income > upper => {
                    tax += (upper - previous_bound) * bracket.rate;
                    previous_bound = upper;
                }
                _ => {
                    tax += (taxable_income - previous_bound) * bracket.rate;
                    break;
                }
            }
        }

        debug!(taxable_income = %taxable_income, tax = %tax, "ordinary tax computed");
        tax
    }
}
