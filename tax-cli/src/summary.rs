//! Currency formatting and the printed tax summary.

use std::fmt::Write;

use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use tax_core::{TaxResult, TaxpayerProfile};

const WIDTH: usize = 40;
const LABEL_WIDTH: usize = 26;

/// Formats an amount as US currency, rounded half-up to cents.
///
/// Negative amounts are shown in parentheses.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_cli::summary::to_currency;
///
/// assert_eq!(to_currency(dec!(1234.5)), "$1,234.50");
/// assert_eq!(to_currency(dec!(-1234.56)), "$(1,234.56)");
/// assert_eq!(to_currency(dec!(0)), "$0.00");
/// ```
pub fn to_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = digits.split_once('.').unwrap_or((&digits, "00"));

    let with_separators = group_thousands(integer_part);

    if rounded < Decimal::ZERO {
        format!("$({with_separators}.{decimal_part})")
    } else {
        format!("${with_separators}.{decimal_part}")
    }
}

fn group_thousands(integer_part: &str) -> String {
    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders the line-item summary for `name`.
///
/// Lines: the three tax components, gross tax, credits as negative
/// lines, total liability, withholding as a negative line, then the
/// refund, amount owed, or zero-balance message.
pub fn render_summary(
    name: &str,
    profile: &TaxpayerProfile,
    result: &TaxResult,
) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\n{heavy}");
    let _ = writeln!(out, "TAX SUMMARY FOR {}", name.to_uppercase());
    let _ = writeln!(out, "{heavy}");

    line(&mut out, "Ordinary Income Tax:", result.ordinary_tax);
    line(&mut out, "Long Term Cap Gains Tax:", result.ltcg_tax);
    line(&mut out, "Net Inv. Income Tax:", result.niit_tax);
    let _ = writeln!(out, "{light}");
    line(&mut out, "TOTAL TAX (Before Credits):", result.gross_tax);
    let _ = writeln!(out, "{light}");

    line(
        &mut out,
        "Child Tax Credit Applied:",
        -result.nonrefundable_credit_applied,
    );
    if result.refundable_credit_applied > Decimal::ZERO {
        line(
            &mut out,
            "Refundable Child Credit:",
            -result.refundable_credit_applied,
        );
    }
    let _ = writeln!(out, "{light}");

    line(&mut out, "Total Tax Liability:", result.total_liability);
    line(&mut out, "Less Tax Withheld:", -profile.withholding);
    let _ = writeln!(out, "{heavy}");

    let balance = result.final_balance;
    if result.is_refund() {
        line(&mut out, "REFUND DUE TO YOU:", balance.abs());
    } else if result.is_amount_owed() {
        line(&mut out, "AMOUNT YOU OWE:", balance);
    } else {
        let _ = writeln!(out, "Your tax balance is $0.00.");
    }
    out
}

fn line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$} {}", to_currency(amount));
}
