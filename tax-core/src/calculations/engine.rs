//! Full liability and balance calculation for one taxpayer.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total taxable income; if zero, nothing is owed and withholding is refunded |
//! | 2    | Split taxable income into ordinary income and long-term gains |
//! | 3    | Ordinary tax from the bracket schedule |
//! | 4    | LTCG tax, stacked on top of step 2's ordinary income |
//! | 5    | NIIT on gross MAGI |
//! | 6    | Gross tax: steps 3 + 4 + 5 |
//! | 7    | Child Tax Credit: nonrefundable against step 6, refundable beyond it |
//! | 8    | Total liability: (step 6 − credit, minimum 0) − refundable credit |
//! | 9    | Final balance: step 8 − withholding |
//!
//! Step 1 short-circuits the credits as well: a filer with no taxable
//! income receives no refundable credit, even with qualifying children.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{FilingStatus, TaxpayerProfile};
//! use tax_core::calculations::TaxEngine;
//!
//! let profile = TaxpayerProfile {
//!     filing_status: FilingStatus::Single,
//!     salary: dec!(100000),
//!     short_term_gain: dec!(0),
//!     long_term_gain: dec!(0),
//!     standard_deduction: dec!(15750),
//!     qualifying_children: 0,
//!     withholding: dec!(0),
//! };
//!
//! let result = TaxEngine::new().calculate(&profile).unwrap();
//!
//! assert_eq!(result.ordinary_tax, dec!(13449.00));
//! assert_eq!(result.final_balance, dec!(13449.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::calculations::{
    BracketTable, CapitalGainsStacker, ChildCreditEngine, NiitCalculator, OrdinaryTaxCalculator,
};
use crate::{ProfileError, TaxResult, TaxYearConfig, TaxYearConfigError, TaxpayerProfile};

/// Errors that stop a calculation before any tax is computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxEngineError {
    #[error("invalid taxpayer profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    #[error("invalid tax year configuration: {0}")]
    InvalidConfig(#[from] TaxYearConfigError),
}

/// Orchestrates the individual calculators.
///
/// Holds only read-only configuration, so one engine can serve any number
/// of calculations.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    config: TaxYearConfig,
}

impl TaxEngine {
    /// Engine using the 2025 constants.
    pub fn new() -> Self {
        Self::with_config(TaxYearConfig::tax_year_2025())
    }

    pub fn with_config(config: TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Computes liability and balance for `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxEngineError::InvalidProfile`] if the profile has a
    /// negative salary, deduction or withholding, or an amount beyond
    /// [`TaxpayerProfile::MAX_AMOUNT`], and
    /// [`TaxEngineError::InvalidConfig`] if the configuration is out of range.
    pub fn calculate(
        &self,
        profile: &TaxpayerProfile,
    ) -> Result<TaxResult, TaxEngineError> {
        self.config.validate()?;
        profile.validate()?;

        let magi = profile.magi();

        // Step 1
        let total_taxable_income = profile.total_taxable_income();
        if total_taxable_income <= Decimal::ZERO {
            if profile.qualifying_children > 0 {
                warn!(
                    qualifying_children = profile.qualifying_children,
                    "No taxable income; child tax credit is not evaluated"
                );
            }
            debug!(withholding = %profile.withholding, "no taxable income; refunding withholding");
            return Ok(TaxResult::no_taxable_income(magi, profile.withholding));
        }

        // Step 2
        let taxable_ordinary_income = profile.taxable_ordinary_income();
        let taxable_ltcg = self.taxable_ltcg(total_taxable_income, taxable_ordinary_income);

        // Steps 3-5
        let ordinary_tax = OrdinaryTaxCalculator::new(BracketTable::schedule(profile.filing_status))
            .compute_tax(taxable_ordinary_income);
        let ltcg_tax = CapitalGainsStacker::new(
            BracketTable::ltcg_thresholds(profile.filing_status),
            self.config.ltcg_middle_rate,
            self.config.ltcg_top_rate,
        )
        .compute_tax(taxable_ordinary_income, taxable_ltcg);
        let niit_tax = NiitCalculator::new(&self.config).compute(
            magi,
            profile.filing_status,
            profile.investment_income(),
        );

        // Step 6
        let gross_tax = ordinary_tax + ltcg_tax + niit_tax;

        // Step 7
        let credit = ChildCreditEngine::new(&self.config).compute(
            magi,
            profile.qualifying_children,
            profile.filing_status,
            gross_tax,
            profile.salary,
        );

        // Steps 8-9
        let total_liability = credit.tax_after_nonrefundable - credit.refundable_applied;
        let final_balance = total_liability - profile.withholding;

        debug!(
            gross_tax = %gross_tax,
            total_liability = %total_liability,
            final_balance = %final_balance,
            "tax calculation complete"
        );

        Ok(TaxResult {
            taxable_ordinary_income,
            taxable_ltcg,
            magi,
            ordinary_tax,
            ltcg_tax,
            niit_tax,
            gross_tax,
            available_child_credit: credit.available_credit,
            nonrefundable_credit_applied: credit.nonrefundable_applied,
            refundable_credit_applied: credit.refundable_applied,
            total_liability,
            final_balance,
            no_taxable_income: false,
        })
    }

    /// Long-term gain left after ordinary income takes its share of taxable
    /// income. A long-term loss never pulls this below zero.
    fn taxable_ltcg(
        &self,
        total_taxable_income: Decimal,
        taxable_ordinary_income: Decimal,
    ) -> Decimal {
        let taxable_ltcg = total_taxable_income - taxable_ordinary_income;
        if taxable_ltcg < Decimal::ZERO {
            warn!(
                total_taxable_income = %total_taxable_income,
                taxable_ordinary_income = %taxable_ordinary_income,
                "Long-term loss exceeds taxable gains; taxable LTCG floored at zero"
            );
        }
        max(taxable_ltcg, Decimal::ZERO)
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self::new()
    }
}
