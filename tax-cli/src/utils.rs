use rust_decimal::Decimal;
use tax_core::{ProfileError, check_range};

/// Normalizes input for decimal parsing: trims whitespace and removes
/// `$` signs and commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace([',', '$'], "")
}

/// Parses a currency amount, allowing a sign.
///
/// Handles comma as thousands separator and a leading `$`
/// (e.g. `"$1,234.56"`). Empty or whitespace-only input is treated as 0.
/// Amounts beyond [`TaxpayerProfile::MAX_AMOUNT`](tax_core::TaxpayerProfile::MAX_AMOUNT)
/// are rejected.
pub fn parse_amount(
    field: &'static str,
    s: &str,
) -> Result<Decimal, ProfileError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, field, "invalid amount: {}", e);
        ProfileError::NonNumericAmount {
            field,
            input: s.trim().to_string(),
        }
    })?;
    check_range(field, value)?;
    Ok(value)
}

/// Parses a currency amount that may not be negative.
pub fn parse_non_negative_amount(
    field: &'static str,
    s: &str,
) -> Result<Decimal, ProfileError> {
    let value = parse_amount(field, s)?;
    if value < Decimal::ZERO {
        return Err(ProfileError::InvalidAmount { field, value });
    }
    Ok(value)
}

/// Parses a count of qualifying children. Empty input means none.
pub fn parse_child_count(s: &str) -> Result<u32, ProfileError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| ProfileError::InvalidChildCount(trimmed.to_string()))
}

/// Interprets a yes/no answer. Returns `None` for anything else.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
