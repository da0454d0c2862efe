//! Child Tax Credit with income phase-out and the refundable Additional
//! Child Tax Credit.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Maximum credit: children × $2,200 |
//! | 2    | Excess MAGI over the phase-out threshold ($400,000 MFJ, else $200,000) |
//! | 3    | Reduction: $50 for every started $1,000 of excess |
//! | 4    | Available credit: step 1 − step 3, minimum 0 |
//! | 5    | Nonrefundable part: smaller of gross tax or step 4 |
//! | 6    | Unused credit: step 4 − gross tax, minimum 0 |
//! | 7    | Refundable part: smallest of step 6, children × $1,700, and 15% of salary above $2,500 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{FilingStatus, TaxYearConfig};
//! use tax_core::calculations::ChildCreditEngine;
//!
//! let config = TaxYearConfig::tax_year_2025();
//! let engine = ChildCreditEngine::new(&config);
//!
//! let result = engine.compute(dec!(20000), 3, FilingStatus::Single, dec!(425), dec!(20000));
//!
//! assert_eq!(result.available_credit, dec!(6600));
//! assert_eq!(result.nonrefundable_applied, dec!(425));
//! assert_eq!(result.refundable_applied, dec!(2625.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{ceil_div, max, min3};
use crate::{FilingStatus, TaxYearConfig};

/// Credit amounts produced by [`ChildCreditEngine::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildCreditResult {
    /// Credit remaining after the phase-out (step 4).
    pub available_credit: Decimal,

    /// Credit used to reduce gross tax (step 5).
    pub nonrefundable_applied: Decimal,

    /// Gross tax left after the nonrefundable credit.
    pub tax_after_nonrefundable: Decimal,

    /// Credit not absorbed by gross tax (step 6).
    pub unused_credit: Decimal,

    /// Additional Child Tax Credit paid beyond gross tax (step 7).
    pub refundable_applied: Decimal,
}

/// Calculator for the Child Tax Credit and its refundable portion.
#[derive(Debug, Clone, Copy)]
pub struct ChildCreditEngine<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> ChildCreditEngine<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Computes both credit portions for one taxpayer.
    pub fn compute(
        &self,
        magi: Decimal,
        qualifying_children: u32,
        filing_status: FilingStatus,
        gross_tax: Decimal,
        salary: Decimal,
    ) -> ChildCreditResult {
        let available_credit = self.available_credit(magi, qualifying_children, filing_status);

        let nonrefundable_applied = gross_tax.min(available_credit);
        let tax_after_nonrefundable = max(gross_tax - available_credit, Decimal::ZERO);
        let unused_credit = max(available_credit - gross_tax, Decimal::ZERO);

        let refundable_applied = if unused_credit > Decimal::ZERO {
            self.refundable_credit(unused_credit, qualifying_children, salary)
        } else {
            Decimal::ZERO
        };

        let result = ChildCreditResult {
            available_credit,
            nonrefundable_applied,
            tax_after_nonrefundable,
            unused_credit,
            refundable_applied,
        };
        debug!(?result, "child tax credit computed");
        result
    }

    /// Credit left after the phase-out (steps 1 through 4).
    pub fn available_credit(
        &self,
        magi: Decimal,
        qualifying_children: u32,
        filing_status: FilingStatus,
    ) -> Decimal {
        let max_credit = self.max_credit(qualifying_children);
        if max_credit.is_zero() {
            return Decimal::ZERO;
        }

        let reduction = self.phaseout_reduction(magi, filing_status);
        max(max_credit - reduction, Decimal::ZERO)
    }

    /// Step 1.
    fn max_credit(
        &self,
        qualifying_children: u32,
    ) -> Decimal {
        Decimal::from(qualifying_children) * self.config.ctc_per_child
    }

    /// Steps 2 and 3: a full reduction for every started step of excess.
    fn phaseout_reduction(
        &self,
        magi: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let threshold = self.config.ctc_phaseout_threshold(filing_status);
        let excess = max(magi - threshold, Decimal::ZERO);
        let steps = ceil_div(excess, self.config.ctc_phaseout_step);
        steps * self.config.ctc_reduction_per_step
    }

    /// Step 7.
    fn refundable_credit(
        &self,
        unused_credit: Decimal,
        qualifying_children: u32,
        salary: Decimal,
    ) -> Decimal {
        let earned_income_limit = max(
            (salary - self.config.ctc_earned_income_floor) * self.config.ctc_earned_income_rate,
            Decimal::ZERO,
        );
        let per_child_cap =
            Decimal::from(qualifying_children) * self.config.ctc_refundable_cap_per_child;

        min3(unused_credit, per_child_cap, earned_income_limit)
    }
}
