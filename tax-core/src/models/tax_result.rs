use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liability and balance computed for one [`TaxpayerProfile`](super::TaxpayerProfile).
///
/// Amounts are exact; rounding to cents is left to whoever displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Salary plus short-term gain, less the deduction, floored at zero.
    pub taxable_ordinary_income: Decimal,

    /// Long-term gain remaining after ordinary income takes its share of
    /// taxable income.
    pub taxable_ltcg: Decimal,

    /// Salary plus both gains.
    pub magi: Decimal,

    /// Tax on taxable ordinary income from the marginal schedule.
    pub ordinary_tax: Decimal,

    /// Tax on taxable long-term gains at the stacked 0/15/20% rates.
    pub ltcg_tax: Decimal,

    /// Net Investment Income Tax.
    pub niit_tax: Decimal,

    /// `ordinary_tax + ltcg_tax + niit_tax`.
    pub gross_tax: Decimal,

    /// Child Tax Credit remaining after phase-out.
    pub available_child_credit: Decimal,

    /// Portion of the Child Tax Credit absorbed by gross tax.
    pub nonrefundable_credit_applied: Decimal,

    /// Additional Child Tax Credit paid out beyond gross tax.
    pub refundable_credit_applied: Decimal,

    /// Tax after credits; negative when refundable credit exceeds it.
    pub total_liability: Decimal,

    /// `total_liability - withholding`. Positive is owed, negative is refunded.
    pub final_balance: Decimal,

    /// Set when total taxable income was zero and every calculation was
    /// skipped, credits included.
    pub no_taxable_income: bool,
}

impl TaxResult {
    /// Result for a profile with no taxable income: nothing is owed and the
    /// whole withholding comes back.
    pub(crate) fn no_taxable_income(
        magi: Decimal,
        withholding: Decimal,
    ) -> Self {
        Self {
            taxable_ordinary_income: Decimal::ZERO,
            taxable_ltcg: Decimal::ZERO,
            magi,
            ordinary_tax: Decimal::ZERO,
            ltcg_tax: Decimal::ZERO,
            niit_tax: Decimal::ZERO,
            gross_tax: Decimal::ZERO,
            available_child_credit: Decimal::ZERO,
            nonrefundable_credit_applied: Decimal::ZERO,
            refundable_credit_applied: Decimal::ZERO,
            total_liability: Decimal::ZERO,
            final_balance: -withholding,
            no_taxable_income: true,
        }
    }

    pub fn is_refund(&self) -> bool {
        self.final_balance < Decimal::ZERO
    }

    pub fn is_amount_owed(&self) -> bool {
        self.final_balance > Decimal::ZERO
    }
}
