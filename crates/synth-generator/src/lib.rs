//! Value synthesizers for the synthetic-data generator.
//!
//! This crate provides the stateless building blocks the document synthesizer
//! is made of, plus [`SyntheticGenerator`], which owns the run's RNG and
//! exposes every primitive as a method.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  SyntheticGenerator  │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - seed (optional)   │
//! └──────────┬───────────┘
//!            │
//!            ├── uuid       opaque identifiers
//!            ├── numeric    multiplicative jitter, digit strings
//!            ├── timestamp  calendar date shifting
//!            ├── pattern    placeholder expansion over word lists
//!            ├── fake       names, emails, filler text
//!            └── array      length resampling of JSON sequences
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_generator::SyntheticGenerator;
//!
//! let mut generator = SyntheticGenerator::new(42);
//! let id = generator.id();
//! assert_eq!(id.len(), 36);
//!
//! let shifted = generator.shift_date_value(&serde_json::json!("2023-01-01"), 14);
//! assert!(shifted.is_string());
//! ```

pub mod generator;
pub mod generators;

pub use generator::SyntheticGenerator;
pub use generators::array::DuplicateRefresh;
