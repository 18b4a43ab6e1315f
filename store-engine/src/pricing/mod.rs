//! Discount-aware pricing
//!
//! Prices are whole currency units (COP). Percentage math goes through
//! `rust_decimal` and rounds half away from zero, matching what the
//! storefront has always displayed.

use rust_decimal::prelude::*;

/// Convert a whole-unit amount to Decimal for calculation
#[inline]
fn to_decimal(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Convert back to whole units, rounding half away from zero
#[inline]
fn to_i64(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Price after the discount percent: `round(price * (1 - discount/100))`
///
/// Total over any `i64` discount; out-of-range percentages are applied
/// as-is, the admin editor does not clamp them.
pub fn discounted_price(price: i64, discount: i64) -> i64 {
    let multiplier = Decimal::ONE - to_decimal(discount) / Decimal::ONE_HUNDRED;
    to_i64(to_decimal(price) * multiplier)
}

/// Unit price used for cart totals: discounted when a discount is present
pub fn effective_unit_price(price: i64, discount: i64) -> i64 {
    if discount > 0 {
        discounted_price(price, discount)
    } else {
        price
    }
}

/// Render an amount with thousands separators ("3,200,000")
pub fn format_cop(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let len = digits.len();

    let mut out = String::with_capacity(len + len / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
