//! Array length resampling.

use super::band_factor;
use super::numeric::jitter_number;
use super::timestamp::shift_date;
use super::uuid::generate_id;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde_json::Value;

/// How appended duplicates are altered so they are not exact copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateRefresh {
    /// Jitter band for top-level numeric fields of a duplicate.
    pub jitter_band: f64,
    /// Day band for top-level string fields whose key contains `date`.
    pub date_shift_days: i64,
}

impl Default for DuplicateRefresh {
    fn default() -> Self {
        Self {
            jitter_band: 0.3,
            date_shift_days: 14,
        }
    }
}

/// Target length for a resampled sequence: `max(1, round(len * (1 + u)))`
/// with `u` uniform in `[-band, band]`.
pub fn resampled_len<R: Rng>(rng: &mut R, len: usize, band: f64) -> usize {
    let scaled = (len as f64 * band_factor(rng, band)).round();
    (scaled as usize).max(1)
}

/// Resample a sequence to a randomized length.
///
/// Shrinking keeps distinct random elements in the order they were drawn.
/// Growing keeps every original element and appends random duplicates, each
/// refreshed according to `refresh`. An empty input stays empty.
pub fn resample<R: Rng>(
    rng: &mut R,
    items: &[Value],
    band: f64,
    refresh: &DuplicateRefresh,
) -> Vec<Value> {
    if items.is_empty() {
        return Vec::new();
    }

    let len = items.len();
    let target = resampled_len(rng, len, band);

    if target <= len {
        return index::sample(rng, len, target)
            .into_iter()
            .map(|i| items[i].clone())
            .collect();
    }

    let mut result = items.to_vec();
    result.reserve(target - len);
    while result.len() < target {
        let Some(pick) = items.choose(rng) else {
            break;
        };
        let mut duplicate = pick.clone();
        refresh_duplicate(rng, &mut duplicate, refresh);
        result.push(duplicate);
    }
    result
}

fn refresh_duplicate<R: Rng>(rng: &mut R, value: &mut Value, refresh: &DuplicateRefresh) {
    let Value::Object(map) = value else {
        return;
    };

    if map.contains_key("id") {
        map.insert("id".to_string(), Value::String(generate_id(rng)));
    }

    for (key, field) in map.iter_mut() {
        match field {
            Value::Number(n) => *n = jitter_number(rng, n, refresh.jitter_band),
            Value::String(s) if key.to_lowercase().contains("date") => {
                *field = shift_date(rng, s, refresh.date_shift_days)
                    .map(Value::String)
                    .unwrap_or(Value::Null);
            }
            _ => {}
        }
    }
}
