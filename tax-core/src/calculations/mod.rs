//! Federal income tax calculations for a single tax year.
//!
//! Each calculator handles one rule; [`TaxEngine`] runs them in order and
//! reconciles the result against withholding.

pub mod brackets;
pub mod capital_gains;
pub mod child_credit;
pub mod common;
pub mod engine;
pub mod niit;
pub mod ordinary;

pub use brackets::BracketTable;
pub use capital_gains::{CapitalGainsStacker, LtcgBreakdown};
pub use child_credit::{ChildCreditEngine, ChildCreditResult};
pub use engine::{TaxEngine, TaxEngineError};
pub use niit::NiitCalculator;
pub use ordinary::OrdinaryTaxCalculator;
