//! Top-level passes over a whole document.
//!
//! `accounts` goes first so the identifier remap table is complete before
//! anything that references an account is rewritten. The known collections
//! then run through the generic synthesizer with a few forced overrides,
//! chart series get a lighter touch, every other key is synthesized
//! generically, and a last pass fills in missing account links.

use crate::remap::id_key;
use crate::synthesize::{SynthesisContext, Synthesizer};
use serde_json::{Map, Value};
use std::collections::HashSet;
use synth_generator::generators::timestamp;
use tracing::{debug, info, warn};

pub const ACCOUNTS: &str = "accounts";

/// Suffix marking some synthesized accounts as managed.
pub const MANAGED_MARKER: &str = " (Managed)";

const ACCOUNTS_BAND: f64 = 0.25;

/// Chart series collections, resampled and jittered lightly.
pub const CHART_COLLECTIONS: &[&str] = &["ownersChartData", "accountsChartData", "balanceChartData"];

/// Collections whose records always carry an account link.
const ACCOUNT_TRANSACTIONS: &str = "accountTransactions";

/// Collections whose records keep an account link only if they had one.
const LINKED_COLLECTIONS: &[&str] = &[
    "assetsTransactions",
    "liabilitiesTransactions",
    "marketPurchases",
    "marketSales",
];

/// A forced change applied to a record after generic synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Set the key to a fresh identifier.
    Fresh(&'static str),
    /// Shift the record's original date again, if the key is present.
    Reshift(&'static str),
    /// Put the original symbol back, if present.
    RestoreSymbol,
    /// Set `name` to a catch phrase.
    CatchPhraseName,
    /// Set `name` to an account-style name.
    AccountStyleName,
    /// Set `account_id` from the original record through the remap table.
    RemapAccountId,
}

/// Resample band and overrides for one known collection.
#[derive(Debug, Clone, Copy)]
pub struct CollectionPass {
    pub name: &'static str,
    pub band: f64,
    pub overrides: &'static [Override],
}

pub const COLLECTION_PASSES: &[CollectionPass] = &[
    CollectionPass {
        name: "marketPurchases",
        band: 0.25,
        overrides: &[
            Override::Fresh("id"),
            Override::Reshift("date"),
            Override::RestoreSymbol,
        ],
    },
    CollectionPass {
        name: "marketSales",
        band: 0.25,
        overrides: &[Override::Fresh("id"), Override::Reshift("date")],
    },
    CollectionPass {
        name: "subscriptions",
        band: 0.25,
        overrides: &[
            Override::Fresh("id"),
            Override::CatchPhraseName,
            Override::Reshift("renewal"),
        ],
    },
    CollectionPass {
        name: "topSymbols",
        band: 0.3,
        overrides: &[Override::Fresh("id")],
    },
    CollectionPass {
        name: "topGains",
        band: 0.3,
        overrides: &[Override::Fresh("id")],
    },
    CollectionPass {
        name: "topLosses",
        band: 0.3,
        overrides: &[Override::Fresh("id")],
    },
    CollectionPass {
        name: ACCOUNT_TRANSACTIONS,
        band: 0.2,
        overrides: &[
            Override::Fresh("id"),
            Override::RemapAccountId,
            Override::Reshift("update_date"),
        ],
    },
    CollectionPass {
        name: "assets",
        band: 0.25,
        overrides: &[Override::Fresh("id"), Override::Reshift("date")],
    },
    CollectionPass {
        name: "assetsTransactions",
        band: 0.2,
        overrides: &[Override::Fresh("id"), Override::Reshift("update_date")],
    },
    CollectionPass {
        name: "liabilities",
        band: 0.25,
        overrides: &[
            Override::Fresh("id"),
            Override::AccountStyleName,
            Override::Reshift("last_update"),
        ],
    },
    CollectionPass {
        name: "liabilitiesTransactions",
        band: 0.2,
        overrides: &[
            Override::Fresh("id"),
            Override::Fresh("liabilitie_id"),
            Override::Reshift("update_date"),
        ],
    },
];

/// Produce the synthetic counterpart of `document`.
///
/// Top-level keys come out in their input order.
pub fn synthesize_document(synth: &mut Synthesizer, document: &Value) -> Value {
    let Value::Object(input) = document else {
        warn!("Top-level document is not an object; synthesizing it generically");
        return synth.synthesize(document, SynthesisContext::root());
    };

    let mut output = Map::with_capacity(input.len());
    for key in input.keys() {
        output.insert(key.clone(), Value::Null);
    }
    let mut handled: HashSet<&str> = HashSet::new();

    if let Some(Value::Array(accounts)) = input.get(ACCOUNTS) {
        output.insert(ACCOUNTS.to_string(), synthesize_accounts(synth, accounts));
        handled.insert(ACCOUNTS);
    }
    info!("Remapped {} account identifier(s)", synth.remap().len());

    for pass in COLLECTION_PASSES {
        if let Some(Value::Array(records)) = input.get(pass.name) {
            output.insert(pass.name.to_string(), run_collection_pass(synth, pass, records));
            handled.insert(pass.name);
        }
    }

    for name in CHART_COLLECTIONS {
        if let Some(Value::Array(entries)) = input.get(*name) {
            output.insert(name.to_string(), synthesize_chart_series(synth, name, entries));
            handled.insert(*name);
        }
    }

    for (key, value) in input {
        if handled.contains(key.as_str()) {
            continue;
        }
        let synthesized = synth.synthesize(value, SynthesisContext::root().child(key));
        output.insert(key.clone(), synthesized);
    }

    ensure_account_links(synth, &mut output);

    Value::Object(output)
}

fn synthesize_accounts(synth: &mut Synthesizer, accounts: &[Value]) -> Value {
    let resampled = synth.resample(accounts, ACCOUNTS_BAND);
    debug!(
        "Resampled {ACCOUNTS}: {} -> {} records",
        accounts.len(),
        resampled.len()
    );

    let mut out = Vec::with_capacity(resampled.len());
    for (idx, account) in resampled.iter().enumerate() {
        let Value::Object(fields) = account else {
            out.push(synth.synthesize(account, SynthesisContext::root().child(ACCOUNTS)));
            continue;
        };
        out.push(Value::Object(synthesize_account(synth, idx, fields)));
    }
    Value::Array(out)
}

fn synthesize_account(
    synth: &mut Synthesizer,
    idx: usize,
    fields: &Map<String, Value>,
) -> Map<String, Value> {
    let original_key = match fields.get("id") {
        Some(id) if !id.is_null() => id_key(id),
        _ => format!("orig-{idx}"),
    };
    let new_id = synth.generator().id();
    synth.remap_mut().record(original_key, new_id.clone());

    let config = synth.config().clone();
    let generator = synth.generator();

    let mut name = generator.company_name();
    if generator.chance(config.managed_marker_probability) {
        name.push_str(MANAGED_MARKER);
    }

    let last_update = [fields.get("last_update"), fields.get("lastUpdate")]
        .into_iter()
        .flatten()
        .find(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| Value::String(timestamp::today()));
    let last_update = generator.shift_date_value(&last_update, config.date_shift_days);

    let mut account = fields.clone();
    account.insert("id".to_string(), Value::String(new_id));
    account.insert("name".to_string(), Value::String(name));
    account.insert("last_update".to_string(), last_update);
    if let Some(current) = fields.get("current_value").filter(|v| v.is_number()) {
        let jittered = generator.jitter_value(current, config.account_value_band);
        account.insert("current_value".to_string(), jittered);
    }
    account
}

fn run_collection_pass(synth: &mut Synthesizer, pass: &CollectionPass, records: &[Value]) -> Value {
    let resampled = synth.resample(records, pass.band);
    debug!(
        "Resampled {}: {} -> {} records",
        pass.name,
        records.len(),
        resampled.len()
    );

    let mut out = Vec::with_capacity(resampled.len());
    for record in &resampled {
        let mut synthesized = synth.synthesize(record, SynthesisContext::root().child(pass.name));
        if let (Value::Object(fields), Value::Object(original)) = (&mut synthesized, record) {
            for rule in pass.overrides {
                apply_override(synth, *rule, original, fields);
            }
        }
        out.push(synthesized);
    }
    Value::Array(out)
}

fn apply_override(
    synth: &mut Synthesizer,
    rule: Override,
    original: &Map<String, Value>,
    fields: &mut Map<String, Value>,
) {
    match rule {
        Override::Fresh(key) => {
            fields.insert(key.to_string(), Value::String(synth.generator().id()));
        }
        Override::Reshift(key) => {
            if !fields.contains_key(key) {
                return;
            }
            if let Some(value) = original.get(key) {
                let days = synth.config().date_shift_days;
                let shifted = synth.generator().shift_date_value(value, days);
                fields.insert(key.to_string(), shifted);
            }
        }
        Override::RestoreSymbol => {
            if !fields.contains_key("symbol") {
                return;
            }
            if let Some(symbol) = original.get("symbol") {
                fields.insert("symbol".to_string(), symbol.clone());
            }
        }
        Override::CatchPhraseName => {
            fields.insert("name".to_string(), Value::String(synth.generator().catch_phrase()));
        }
        Override::AccountStyleName => {
            fields.insert("name".to_string(), Value::String(synth.generator().account_name()));
        }
        Override::RemapAccountId => {
            let account_id = synth.resolve_account_id(original.get("account_id"));
            fields.insert("account_id".to_string(), Value::String(account_id));
        }
    }
}

fn synthesize_chart_series(synth: &mut Synthesizer, name: &str, entries: &[Value]) -> Value {
    let config = synth.config().clone();
    let resampled = synth.resample(entries, config.chart_jitter_band);
    debug!(
        "Resampled {name}: {} -> {} entries",
        entries.len(),
        resampled.len()
    );

    let generator = synth.generator();
    let out = resampled
        .into_iter()
        .map(|mut entry| {
            if let Value::Object(fields) = &mut entry {
                for (key, value) in fields.iter_mut() {
                    if key == "update_date" && is_truthy(value) {
                        *value = generator.shift_date_value(value, config.chart_date_shift_days);
                    } else if value.is_number() {
                        *value = generator.jitter_value(value, config.chart_jitter_band);
                    }
                }
            }
            entry
        })
        .collect();
    Value::Array(out)
}

/// Give transaction-like records without a usable `account_id` one from
/// the remap table.
fn ensure_account_links(synth: &mut Synthesizer, output: &mut Map<String, Value>) {
    let mut assigned = 0usize;

    if let Some(Value::Array(records)) = output.get_mut(ACCOUNT_TRANSACTIONS) {
        for fields in records.iter_mut().filter_map(Value::as_object_mut) {
            if !fields.get("account_id").is_some_and(is_truthy) {
                fields.insert(
                    "account_id".to_string(),
                    Value::String(synth.any_account_id()),
                );
                assigned += 1;
            }
        }
    }

    for name in LINKED_COLLECTIONS {
        if let Some(Value::Array(records)) = output.get_mut(*name) {
            for fields in records.iter_mut().filter_map(Value::as_object_mut) {
                if fields.get("account_id").is_some_and(|v| !is_truthy(v)) {
                    fields.insert(
                        "account_id".to_string(),
                        Value::String(synth.any_account_id()),
                    );
                    assigned += 1;
                }
            }
        }
    }

    if assigned > 0 {
        debug!("Assigned {assigned} missing account link(s)");
    }
}

/// Whether a value counts as set: not null, `false`, zero or empty string.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
