//! 2025 ordinary-income rate schedules and long-term capital gains thresholds.

use rust_decimal_macros::dec;

use crate::{BracketSchedule, FilingStatus, LtcgThresholds, TaxBracket};

static SINGLE: [TaxBracket; 7] = [
    TaxBracket { upper_bound: Some(dec!(11925)), rate: dec!(0.10) },
    TaxBracket { upper_bound: Some(dec!(48475)), rate: dec!(0.12) },
    TaxBracket { upper_bound: Some(dec!(103350)), rate: dec!(0.22) },
    TaxBracket { upper_bound: Some(dec!(197300)), rate: dec!(0.24) },
    TaxBracket { upper_bound: Some(dec!(250525)), rate: dec!(0.32) },
    TaxBracket { upper_bound: Some(dec!(626350)), rate: dec!(0.35) },
    TaxBracket { upper_bound: None, rate: dec!(0.37) },
];

static MARRIED_FILING_JOINTLY: [TaxBracket; 7] = [
    TaxBracket { upper_bound: Some(dec!(23850)), rate: dec!(0.10) },
    TaxBracket { upper_bound: Some(dec!(96950)), rate: dec!(0.12) },
    TaxBracket { upper_bound: Some(dec!(206700)), rate: dec!(0.22) },
    TaxBracket { upper_bound: Some(dec!(394600)), rate: dec!(0.24) },
    TaxBracket { upper_bound: Some(dec!(501050)), rate: dec!(0.32) },
    TaxBracket { upper_bound: Some(dec!(751600)), rate: dec!(0.35) },
    TaxBracket { upper_bound: None, rate: dec!(0.37) },
];

static HEAD_OF_HOUSEHOLD: [TaxBracket; 7] = [
    TaxBracket { upper_bound: Some(dec!(17000)), rate: dec!(0.10) },
    TaxBracket { upper_bound: Some(dec!(64850)), rate: dec!(0.12) },
    TaxBracket { upper_bound: Some(dec!(103350)), rate: dec!(0.22) },
    TaxBracket { upper_bound: Some(dec!(197300)), rate: dec!(0.24) },
    TaxBracket { upper_bound: Some(dec!(250500)), rate: dec!(0.32) },
    TaxBracket { upper_bound: Some(dec!(626350)), rate: dec!(0.35) },
    TaxBracket { upper_bound: None, rate: dec!(0.37) },
];

/// Static lookup from filing status to its rate tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketTable;

impl BracketTable {
    /// Marginal ordinary-income brackets, ascending, top bracket unbounded.
    pub fn schedule(status: FilingStatus) -> &'static BracketSchedule {
        match status {
            FilingStatus::Single => &SINGLE,
            FilingStatus::MarriedFilingJointly => &MARRIED_FILING_JOINTLY,
            FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
        }
    }

    pub fn ltcg_thresholds(status: FilingStatus) -> LtcgThresholds {
        match status {
            FilingStatus::Single => LtcgThresholds {
                zero_rate_ceiling: dec!(48350),
                fifteen_rate_ceiling: dec!(533400),
            },
            FilingStatus::MarriedFilingJointly => LtcgThresholds {
                zero_rate_ceiling: dec!(96700),
                fifteen_rate_ceiling: dec!(600050),
            },
            FilingStatus::HeadOfHousehold => LtcgThresholds {
                zero_rate_ceiling: dec!(64750),
                fifteen_rate_ceiling: dec!(566700),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn every_schedule_ends_with_one_unbounded_bracket() {
        for status in FilingStatus::ALL {
            let schedule = BracketTable::schedule(status);
            let (last, rest) = schedule.split_last().unwrap();

            assert_eq!(last.upper_bound, None, "{status}");
            assert!(rest.iter().all(|b| b.upper_bound.is_some()), "{status}");
        }
    }

    #[test]
    fn bounds_strictly_increase_and_rates_never_decrease() {
        for status in FilingStatus::ALL {
            let schedule = BracketTable::schedule(status);

            for pair in schedule.windows(2) {
                let lower = pair[0].upper_bound.unwrap();
                if let Some(upper) = pair[1].upper_bound {
                    assert!(upper > lower, "{status}: {upper} <= {lower}");
                }
                assert!(pair[1].rate >= pair[0].rate, "{status}");
            }
            assert!(schedule[0].upper_bound.unwrap() > Decimal::ZERO);
        }
    }

    #[test]
    fn top_rate_is_37_percent_for_every_status() {
        for status in FilingStatus::ALL {
            let top = BracketTable::schedule(status).last().unwrap();
            assert_eq!(top.rate, dec!(0.37));
        }
    }

    #[test]
    fn ltcg_zero_ceiling_below_fifteen_ceiling() {
        for status in FilingStatus::ALL {
            let thresholds = BracketTable::ltcg_thresholds(status);
            assert!(thresholds.zero_rate_ceiling < thresholds.fifteen_rate_ceiling);
        }
    }

    #[test]
    fn head_of_household_schedule_values() {
        let schedule = BracketTable::schedule(FilingStatus::HeadOfHousehold);

        assert_eq!(schedule[0].upper_bound, Some(dec!(17000)));
        assert_eq!(schedule[4].upper_bound, Some(dec!(250500)));
        assert_eq!(
            BracketTable::ltcg_thresholds(FilingStatus::HeadOfHousehold),
            LtcgThresholds {
                zero_rate_ceiling: dec!(64750),
                fifteen_rate_ceiling: dec!(566700),
            }
        );
    }
}
