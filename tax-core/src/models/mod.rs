mod filing_status;
mod tax_bracket;
mod tax_result;
mod tax_year_config;
mod taxpayer_profile;

pub use filing_status::FilingStatus;
pub use tax_bracket::{BracketSchedule, LtcgThresholds, TaxBracket};
pub use tax_result::TaxResult;
pub use tax_year_config::{TaxYearConfig, TaxYearConfigError};
pub use taxpayer_profile::{ProfileError, TaxpayerProfile, check_range};
