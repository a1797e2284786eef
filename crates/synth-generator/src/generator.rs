//! RNG-owning facade over the individual synthesizers.

use crate::generators::array::{self, DuplicateRefresh};
use crate::generators::{fake, numeric, timestamp, uuid};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

/// Source of synthetic values for one run.
///
/// With a seed the output is reproducible; without one the RNG is seeded from
/// OS entropy and every run differs.
pub struct SyntheticGenerator {
    /// Seed the RNG was created from, if any
    seed: Option<u64>,
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Get the seed, if the generator is reproducible.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fresh opaque identifier.
    pub fn id(&mut self) -> String {
        uuid::generate_id(&mut self.rng)
    }

    /// Jitter numbers; any other value is returned unchanged.
    pub fn jitter_value(&mut self, value: &Value, band: f64) -> Value {
        numeric::jitter_value(&mut self.rng, value, band)
    }

    /// Shift a date value; see [`timestamp::shift_date_value`].
    pub fn shift_date_value(&mut self, value: &Value, max_shift_days: i64) -> Value {
        timestamp::shift_date_value(&mut self.rng, value, max_shift_days)
    }

    pub fn company_name(&mut self) -> String {
        fake::company_name(&mut self.rng)
    }

    pub fn catch_phrase(&mut self) -> String {
        fake::catch_phrase(&mut self.rng)
    }

    pub fn account_name(&mut self) -> String {
        fake::account_name(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        fake::email(&mut self.rng)
    }

    pub fn filler_text(&mut self) -> String {
        fake::filler_text(&mut self.rng)
    }

    pub fn reference_number(&mut self, len: usize) -> String {
        fake::reference_number(&mut self.rng, len)
    }

    /// Resample a sequence; see [`array::resample`].
    pub fn resample(&mut self, items: &[Value], band: f64, refresh: &DuplicateRefresh) -> Vec<Value> {
        array::resample(&mut self.rng, items, band, refresh)
    }

    /// Uniformly random element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        self.rng.gen_bool(p)
    }
}

impl std::fmt::Debug for SyntheticGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticGenerator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = SyntheticGenerator::new(42);
        let mut gen2 = SyntheticGenerator::new(42);

        assert_eq!(gen1.id(), gen2.id());
        assert_eq!(gen1.company_name(), gen2.company_name());
        assert_eq!(
            gen1.shift_date_value(&json!("2023-01-01"), 14),
            gen2.shift_date_value(&json!("2023-01-01"), 14)
        );
    }

    #[test]
    fn test_entropy_generators_differ() {
        let mut gen1 = SyntheticGenerator::from_entropy();
        let mut gen2 = SyntheticGenerator::from_entropy();

        assert_eq!(gen1.seed(), None);
        assert_ne!(gen1.id(), gen2.id());
    }

    #[test]
    fn test_from_optional_seed() {
        assert_eq!(SyntheticGenerator::from_optional_seed(Some(9)).seed(), Some(9));
        assert_eq!(SyntheticGenerator::from_optional_seed(None).seed(), None);
    }

    #[test]
    fn test_pick() {
        let mut generator = SyntheticGenerator::new(42);
        let empty: [&str; 0] = [];

        assert_eq!(generator.pick(&empty), None);
        assert!(["a", "b"].contains(generator.pick(&["a", "b"]).unwrap()));
    }

    #[test]
    fn test_chance_extremes() {
        let mut generator = SyntheticGenerator::new(42);

        assert!(!generator.chance(0.0));
        assert!(generator.chance(1.0));
        assert!(generator.chance(7.0));
        assert!(!generator.chance(f64::NAN));
    }

    #[test]
    fn test_resample_through_facade() {
        let mut generator = SyntheticGenerator::new(42);
        let items = vec![json!(1), json!(2), json!(3)];

        let out = generator.resample(&items, 0.0, &DuplicateRefresh::default());
        assert_eq!(out.len(), 3);
    }
}
