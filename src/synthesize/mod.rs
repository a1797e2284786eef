//! Recursive, rule-driven rewriting of arbitrary JSON values.
//!
//! Arrays are resampled and their elements rewritten; mappings are rewritten
//! key by key in their original order; scalars go through the first matching
//! rule of [`rules::select`]. Scalars that match no rule (booleans, nulls
//! without a date key) come out unchanged.

pub mod context;
pub mod rules;

pub use context::SynthesisContext;
pub use rules::FieldRule;

use crate::config::SynthesisConfig;
use crate::remap::{id_key, IdRemapTable};
use rules::Field;
use serde_json::{Map, Value};
use synth_generator::{DuplicateRefresh, SyntheticGenerator};
use type_sets::TypeSetRegistry;

/// State for one synthesis run.
///
/// Owns the RNG, the categorical registry and the identifier remap table, so
/// separate runs never share anything.
#[derive(Debug)]
pub struct Synthesizer {
    generator: SyntheticGenerator,
    type_sets: TypeSetRegistry,
    remap: IdRemapTable,
    config: SynthesisConfig,
    refresh: DuplicateRefresh,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig, type_sets: TypeSetRegistry) -> Self {
        Self {
            generator: SyntheticGenerator::from_optional_seed(config.seed),
            refresh: config.duplicate_refresh(),
            type_sets,
            remap: IdRemapTable::new(),
            config,
        }
    }

    /// Rewrite `value` reached at `ctx`.
    pub fn synthesize(&mut self, value: &Value, ctx: SynthesisContext<'_>) -> Value {
        match value {
            Value::Array(items) => {
                let resampled = self.resample(items, self.config.array_band);
                // Scalar elements are treated as values of the enclosing key
                resampled
                    .iter()
                    .map(|item| self.synthesize(item, ctx))
                    .collect()
            }
            Value::Object(map) => Value::Object(self.synthesize_object(map, ctx)),
            scalar => self.synthesize_scalar(ctx.key, scalar, ctx),
        }
    }

    /// Rewrite every entry of `map`, keeping key order.
    pub fn synthesize_object(
        &mut self,
        map: &Map<String, Value>,
        ctx: SynthesisContext<'_>,
    ) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());
        for (key, value) in map {
            let child = ctx.child(key);
            let synthesized = match value {
                Value::Array(_) | Value::Object(_) => self.synthesize(value, child),
                scalar => self.synthesize_scalar(Some(key.as_str()), scalar, child),
            };
            out.insert(key.clone(), synthesized);
        }
        out
    }

    /// Apply the first matching field rule to one scalar.
    pub fn synthesize_scalar(
        &mut self,
        key: Option<&str>,
        value: &Value,
        ctx: SynthesisContext<'_>,
    ) -> Value {
        let rule = rules::select(&Field {
            key,
            value,
            ctx,
            registry: &self.type_sets,
        });
        match rule {
            Some(rule) => self.apply_rule(rule, key, value),
            None => value.clone(),
        }
    }

    fn apply_rule(&mut self, rule: FieldRule, key: Option<&str>, value: &Value) -> Value {
        match rule {
            FieldRule::Categorical => {
                let values = key.and_then(|key| self.type_sets.resolve(key));
                match values.and_then(|values| self.generator.pick(values)) {
                    Some(choice) => Value::String(choice.clone()),
                    None => value.clone(),
                }
            }
            FieldRule::Symbol | FieldRule::CodeToken => value.clone(),
            FieldRule::Id => Value::String(self.generator.id()),
            FieldRule::AccountId => Value::String(self.resolve_account_id(Some(value))),
            FieldRule::Numeric => self.generator.jitter_value(value, self.config.jitter_band),
            FieldRule::Date => self
                .generator
                .shift_date_value(value, self.config.date_shift_days),
            FieldRule::SubscriptionName => Value::String(self.generator.catch_phrase()),
            FieldRule::LiabilityName => Value::String(self.generator.account_name()),
            FieldRule::AccountName => Value::String(self.generator.company_name()),
            FieldRule::Email => Value::String(self.generator.email()),
            FieldRule::ReferenceNumber => {
                let len = value.as_str().map_or(0, |s| s.chars().count());
                let len = len.min(self.config.reference_number_max_len);
                Value::String(self.generator.reference_number(len))
            }
            FieldRule::FreeText => Value::String(self.generator.filler_text()),
        }
    }

    /// Synthetic identifier for a reference to an account.
    ///
    /// The mapped identifier when `original` was recorded, otherwise any
    /// recorded identifier, otherwise a fresh one.
    pub fn resolve_account_id(&mut self, original: Option<&Value>) -> String {
        if let Some(mapped) = original.and_then(|v| self.remap.get(&id_key(v))) {
            return mapped.to_string();
        }
        self.any_account_id()
    }

    /// A random recorded account identifier, or a fresh one if none exist.
    pub fn any_account_id(&mut self) -> String {
        match self.generator.pick(self.remap.values()) {
            Some(id) => id.clone(),
            None => self.generator.id(),
        }
    }

    /// Resample `items` with this run's duplicate refresh settings.
    pub fn resample(&mut self, items: &[Value], band: f64) -> Vec<Value> {
        self.generator.resample(items, band, &self.refresh)
    }

    pub fn generator(&mut self) -> &mut SyntheticGenerator {
        &mut self.generator
    }

    pub fn remap(&self) -> &IdRemapTable {
        &self.remap
    }

    pub fn remap_mut(&mut self) -> &mut IdRemapTable {
        &mut self.remap
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }
}
