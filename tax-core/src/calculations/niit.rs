//! Net Investment Income Tax (Form 8960, simplified).
//!
//! A flat surtax on the lesser of net investment income or MAGI above the
//! filing-status threshold. Unlike the LTCG calculation it works on gross
//! MAGI, not taxable income.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::{FilingStatus, TaxYearConfig};

/// Computes the NIIT surtax.
#[derive(Debug, Clone, Copy)]
pub struct NiitCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> NiitCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Surtax owed for the given MAGI and investment income.
    ///
    /// Net investment losses are floored at zero so the surtax never turns
    /// into a credit.
    pub fn compute(
        &self,
        magi: Decimal,
        filing_status: FilingStatus,
        investment_income: Decimal,
    ) -> Decimal {
        let threshold = self.config.niit_threshold(filing_status);
        if magi <= threshold {
            return Decimal::ZERO;
        }

        if investment_income < Decimal::ZERO {
            warn!(
                investment_income = %investment_income,
                "Net investment income is negative; treating as zero for NIIT"
            );
        }
        let investment_income = max(investment_income, Decimal::ZERO);

        let amount_over_threshold = magi - threshold;
        let tax = amount_over_threshold.min(investment_income) * self.config.niit_rate;

        debug!(
            magi = %magi,
            threshold = %threshold,
            investment_income = %investment_income,
            tax = %tax,
            "NIIT computed"
        );
        tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn compute(
        magi: Decimal,
        status: FilingStatus,
        investment_income: Decimal,
    ) -> Decimal {
        let config = TaxYearConfig::tax_year_2025();
        NiitCalculator::new(&config).compute(magi, status, investment_income)
    }

    #[test]
    fn below_threshold_owes_nothing() {
        assert_eq!(
            compute(dec!(199999), FilingStatus::Single, dec!(50000)),
            Decimal::ZERO
        );
    }

    #[test]
    fn exactly_at_threshold_owes_nothing() {
        assert_eq!(
            compute(dec!(250000), FilingStatus::MarriedFilingJointly, dec!(50000)),
            Decimal::ZERO
        );
    }

    #[test]
    fn investment_income_smaller_than_excess() {
        // min(100000, 50000) * 0.038
        assert_eq!(
            compute(dec!(350000), FilingStatus::MarriedFilingJointly, dec!(50000)),
            dec!(1900.00)
        );
    }

    #[test]
    fn excess_smaller_than_investment_income() {
        // min(10000, 80000) * 0.038
        assert_eq!(
            compute(dec!(210000), FilingStatus::Single, dec!(80000)),
            dec!(380.00)
        );
    }

    #[test]
    fn head_of_household_uses_single_threshold() {
        assert_eq!(
            compute(dec!(210000), FilingStatus::HeadOfHousehold, dec!(80000)),
            dec!(380.00)
        );
    }

    #[test]
    fn net_investment_loss_owes_nothing() {
        assert_eq!(
            compute(dec!(290000), FilingStatus::Single, dec!(-10000)),
            Decimal::ZERO
        );
    }
}
