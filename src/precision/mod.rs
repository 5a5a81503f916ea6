//! Decimal-precision policy for numeric payload values.
//!
//! Numbers are only ever rounded down to fewer fractional digits, never padded
//! past what their own text form shows. Every number this stage rewrites comes
//! out as a JSON string so it can be handed straight to the encoder.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};

use crate::core::{Payload, Precision, Record, ValueKind};

/// Applies `precision` to every numeric value in `payload`.
///
/// The shape is preserved: same records, same keys, same nesting. With
/// [`Precision::Unlimited`] the payload is returned as-is.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(payload), fields(records = payload.len())))]
#[must_use]
pub fn apply_precision(mut payload: Payload, precision: Precision) -> Payload {
    let Some(limit) = precision.limit() else {
        return payload;
    };
    match &mut payload {
        Payload::Sequence(records) => {
            for record in records {
                round_record(record, limit);
            }
        }
        Payload::Single(record) => round_record(record, limit),
    }
    payload
}

/// Rounds one number to at most `limit` fractional digits.
///
/// The result keeps `min(native, limit)` digits, where `native` is the digit
/// count of the number's default text form (exponent included, so `1.5e-30`
/// has 31). Ties round away from zero. Integers come back unchanged. Returns
/// `None` only when the rounded value does not fit a decimal (e.g. `1e300`).
#[must_use]
pub fn round_number(number: &Number, limit: u32) -> Option<String> {
    if !number.is_f64() {
        return Some(number.to_string());
    }
    let text = number.to_string();
    let (mantissa, exp) = match text.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i64>().ok()?),
        None => (text.as_str(), 0),
    };
    let mantissa_digits = mantissa.split_once('.').map_or(0, |(_, frac)| frac.len());
    let native = (i64::try_from(mantissa_digits).ok()? - exp).max(0);
    let digits = native.min(i64::from(limit));

    // value * 10^digits, rounded to an integer. Below 0.1 that is always zero.
    let shift = digits + exp;
    let scaled = if shift <= -2 {
        Decimal::ZERO
    } else {
        Decimal::from_scientific(&format!("{mantissa}e{shift}"))
            .ok()?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };
    Some(place_point(scaled, usize::try_from(digits).ok()?))
}

// Renders `units` scaled down by 10^digits with exactly `digits` fractional
// digits. Works past the 28-digit scale limit of `Decimal`.
fn place_point(units: Decimal, digits: usize) -> String {
    let negative = units.is_sign_negative() && !units.is_zero();
    let mut text = units.abs().trunc().to_string();
    if digits > 0 {
        if text.len() <= digits {
            text = format!("{text:0>width$}", width = digits + 1);
        }
        text.insert(text.len() - digits, '.');
    }
    if negative {
        text.insert(0, '-');
    }
    text
}

fn round_record(record: &mut Record, limit: u32) {
    for value in record.values_mut() {
        round_value(value, limit);
    }
}

fn round_value(value: &mut Value, limit: u32) {
    match ValueKind::of(value) {
        ValueKind::Integer | ValueKind::Float => {
            if let Value::Number(number) = value
                && let Some(text) = round_number(number, limit)
            {
                *value = Value::String(text);
            }
        }
        ValueKind::Composite => match value {
            Value::Array(items) => {
                for item in items {
                    round_value(item, limit);
                }
            }
            Value::Object(nested) => round_record(nested, limit),
            _ => {}
        },
        ValueKind::Null | ValueKind::Boolean | ValueKind::Text => {}
    }
}
