//! Numeric jitter and digit-string generators.

use super::band_factor;
use rand::Rng;
use serde_json::{Number, Value};

/// Perturb a JSON number by a factor drawn from `[1 - band, 1 + band]`.
///
/// Integral inputs are rounded to the nearest integer and clamped at 0.
/// Fractional inputs are rounded to 2 decimal places. A result that cannot be
/// represented as a JSON number leaves the input unchanged.
pub fn jitter_number<R: Rng>(rng: &mut R, number: &Number, band: f64) -> Number {
    let Some(n) = number.as_f64() else {
        return number.clone();
    };
    if !n.is_finite() {
        return number.clone();
    }

    let scaled = n * band_factor(rng, band);

    if is_integral(number) {
        let rounded = scaled.round().max(0.0);
        if rounded < i64::MAX as f64 {
            Number::from(rounded as i64)
        } else {
            Number::from(rounded as u64)
        }
    } else {
        Number::from_f64((scaled * 100.0).round() / 100.0).unwrap_or_else(|| number.clone())
    }
}

/// Jitter a JSON value if it is a number; anything else is returned as is.
pub fn jitter_value<R: Rng>(rng: &mut R, value: &Value, band: f64) -> Value {
    match value {
        Value::Number(n) => Value::Number(jitter_number(rng, n, band)),
        other => other.clone(),
    }
}

/// Whether a JSON number holds an integral value (`5` and `5.0` both count).
pub fn is_integral(number: &Number) -> bool {
    number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Generate a random number with exactly `digits` digits.
pub fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(char::from(b'0' + rng.gen_range(1..10u8)));

    for _ in 1..digits {
        result.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    result
}
