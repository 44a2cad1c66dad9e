//! Turkish-locale currency parsing and formatting for the CLI surface.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a TL amount. `.` is a thousands separator, `,` the decimal
/// comma; plain digits pass through unchanged. Amounts must be positive.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Err("amount is empty".to_string());
    }
    let amount: Decimal = cleaned
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid TL amount"))?;
    if amount <= Decimal::ZERO {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(amount)
}

/// Formats an amount the way the tariff publishes it: thousands
/// separated by `.`, two decimals after a `,` ("0,00" for zero).
pub(crate) fn format_tl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part}")
}
