use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rung of a marginal ordinary-income schedule.
///
/// `upper_bound` is `None` for the top bracket, which is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Brackets in ascending bound order; the last entry is unbounded.
pub type BracketSchedule = [TaxBracket];

/// Long-term capital gains rate thresholds for one filing status.
///
/// Taxable income stacked below `zero_rate_ceiling` is taxed at 0%, up to
/// `fifteen_rate_ceiling` at 15%, and above that at 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtcgThresholds {
    pub zero_rate_ceiling: Decimal,
    pub fifteen_rate_ceiling: Decimal,
}
