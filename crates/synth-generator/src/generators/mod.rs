//! Individual value synthesizers.
//!
//! Every function here takes the RNG explicitly so callers decide whether
//! output is reproducible (seeded) or not (entropy).

pub mod array;
pub mod fake;
pub mod numeric;
pub mod pattern;
pub mod timestamp;
pub mod uuid;
pub mod words;

use rand::Rng;

/// Draw a multiplicative factor uniformly from `[1 - band, 1 + band]`.
///
/// A non-positive or non-finite band yields exactly `1.0`.
pub fn band_factor<R: Rng>(rng: &mut R, band: f64) -> f64 {
    if !band.is_finite() || band <= 0.0 {
        return 1.0;
    }
    1.0 + rng.gen_range(-band..=band)
}
