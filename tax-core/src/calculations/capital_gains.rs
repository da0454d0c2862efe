//! Long-term capital gains tax with ordinary income stacked underneath.
//!
//! Ordinary income and long-term gains share one income ladder. Ordinary
//! income fills the bottom rungs first, so it decides where the gains
//! start; the gains are then split across three bands:
//!
//! | Band | Stacked income up to          | Rate |
//! |------|-------------------------------|------|
//! | 1    | `zero_rate_ceiling`           | 0%   |
//! | 2    | `fifteen_rate_ceiling`        | 15%  |
//! | 3    | unbounded                     | 20%  |
//!
//! Ordinary income itself is never taxed here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LtcgThresholds;

/// How the taxable gain was split across the three rate bands.
///
/// `at_zero + at_fifteen + at_twenty` always equals the gain passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LtcgBreakdown {
    pub at_zero: Decimal,
    pub at_fifteen: Decimal,
    pub at_twenty: Decimal,
    pub tax: Decimal,
}

impl LtcgBreakdown {
    /// Sum of the three band amounts.
    pub fn total_gain(&self) -> Decimal {
        self.at_zero + self.at_fifteen + self.at_twenty
    }
}

/// Taxes long-term gains on the combined ladder.
#[derive(Debug, Clone, Copy)]
pub struct CapitalGainsStacker {
    thresholds: LtcgThresholds,
    middle_rate: Decimal,
    top_rate: Decimal,
}

impl CapitalGainsStacker {
    pub fn new(
        thresholds: LtcgThresholds,
        middle_rate: Decimal,
        top_rate: Decimal,
    ) -> Self {
        Self {
            thresholds,
            middle_rate,
            top_rate,
        }
    }

    /// Tax on `taxable_ltcg` once `taxable_ordinary_income` sits below it.
    pub fn compute_tax(
        &self,
        taxable_ordinary_income: Decimal,
        taxable_ltcg: Decimal,
    ) -> Decimal {
        self.breakdown(taxable_ordinary_income, taxable_ltcg).tax
    }

    /// Splits `taxable_ltcg` across the bands and taxes each part.
    ///
    /// A non-positive gain yields an empty breakdown.
    pub fn breakdown(
        &self,
        taxable_ordinary_income: Decimal,
        taxable_ltcg: Decimal,
    ) -> LtcgBreakdown {
        let mut result = LtcgBreakdown::default();
        if taxable_ltcg <= Decimal::ZERO {
            return result;
        }

        let mut stack_height = taxable_ordinary_income;
        let mut remaining = taxable_ltcg;

        if stack_height < self.thresholds.zero_rate_ceiling {
            let room = self.thresholds.zero_rate_ceiling - stack_height;
            result.at_zero = remaining.min(room);
            stack_height += result.at_zero;
            remaining -= result.at_zero;
        }

        if remaining > Decimal::ZERO && stack_height < self.thresholds.fifteen_rate_ceiling {
            let room = self.thresholds.fifteen_rate_ceiling - stack_height;
            result.at_fifteen = remaining.min(room);
            stack_height += result.at_fifteen;
            remaining -= result.at_fifteen;
        }

        if remaining > Decimal::ZERO {
            result.at_twenty = remaining;
            stack_height += remaining;
        }

        result.tax = result.at_fifteen * self.middle_rate + result.at_twenty * self.top_rate;

        debug!(
            stack_start = %taxable_ordinary_income,
            stack_end = %stack_height,
            at_zero = %result.at_zero,
            at_fifteen = %result.at_fifteen,
            at_twenty = %result.at_twenty,
            tax = %result.tax,
            "long-term gains stacked"
        );
        result
    }
}
