//! Priority-ordered field rules.
//!
//! Each rule is a predicate over one scalar field; [`select`] walks the table
//! top to bottom and the first match wins.

use super::context::SynthesisContext;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use type_sets::TypeSetRegistry;

/// Keys whose values are shifted as calendar dates.
pub const DATE_KEYS: &[&str] = &[
    "last_update",
    "lastUpdate",
    "update_date",
    "updateDate",
    "date",
    "transaction_date",
    "created_at",
    "timestamp",
];

/// Keys holding prose, where even a code-like token is rewritten.
pub const FREE_TEXT_KEYS: &[&str] = &["description", "notes", "note", "memo", "comment", "comments"];

static CODE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9_-]{2,10}$").expect("valid code token pattern"));

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{7,}").expect("valid digit pattern"));

/// What to do with one scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Random member of the key's type-set.
    Categorical,
    /// Ticker symbol, kept.
    Symbol,
    /// Fresh identifier.
    Id,
    /// Identifier remapped through the accounts table.
    AccountId,
    /// Multiplicative jitter.
    Numeric,
    /// Calendar shift.
    Date,
    /// Catch phrase for a subscription name.
    SubscriptionName,
    /// Account-style name for a liability.
    LiabilityName,
    /// Organization-style name.
    AccountName,
    Email,
    /// Short upper-case code, kept.
    CodeToken,
    /// Digits of a similar length.
    ReferenceNumber,
    /// Filler phrase.
    FreeText,
}

/// One scalar field under inspection.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub key: Option<&'a str>,
    pub value: &'a Value,
    pub ctx: SynthesisContext<'a>,
    pub registry: &'a TypeSetRegistry,
}

impl Field<'_> {
    fn key_is(&self, name: &str) -> bool {
        self.key == Some(name)
    }

    fn key_is_ignore_case(&self, name: &str) -> bool {
        self.key.is_some_and(|key| key.eq_ignore_ascii_case(name))
    }

    fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

type Predicate = fn(&Field<'_>) -> bool;

const RULES: &[(FieldRule, Predicate)] = &[
    (FieldRule::Categorical, is_categorical),
    (FieldRule::Symbol, is_symbol),
    (FieldRule::Id, is_id),
    (FieldRule::AccountId, is_account_id),
    (FieldRule::Numeric, is_numeric),
    (FieldRule::Date, is_date),
    (FieldRule::SubscriptionName, is_subscription_name),
    (FieldRule::LiabilityName, is_liability_name),
    (FieldRule::AccountName, is_account_name),
    (FieldRule::Email, is_email),
    (FieldRule::CodeToken, is_code_token),
    (FieldRule::ReferenceNumber, is_reference_number),
    (FieldRule::FreeText, is_free_text),
];

/// First rule matching `field`, or `None` when the value passes through.
pub fn select(field: &Field<'_>) -> Option<FieldRule> {
    RULES
        .iter()
        .find(|(_, matches)| matches(field))
        .map(|(rule, _)| *rule)
}

fn is_categorical(field: &Field<'_>) -> bool {
    field
        .key
        .is_some_and(|key| field.registry.resolve(key).is_some())
}

fn is_symbol(field: &Field<'_>) -> bool {
    field.as_str().is_some()
        && field
            .key
            .is_some_and(|key| key.to_lowercase().contains("symbol"))
}

fn is_id(field: &Field<'_>) -> bool {
    field.key_is("id")
}

fn is_account_id(field: &Field<'_>) -> bool {
    field.key_is("account_id")
}

fn is_numeric(field: &Field<'_>) -> bool {
    field.value.is_number()
}

fn is_date(field: &Field<'_>) -> bool {
    field.key.is_some_and(|key| DATE_KEYS.contains(&key))
}

fn is_subscription_name(field: &Field<'_>) -> bool {
    field.key_is_ignore_case("name") && field.ctx.is_within("subscriptions")
}

fn is_liability_name(field: &Field<'_>) -> bool {
    field.key_is_ignore_case("name") && field.ctx.is_within("liabilities")
}

fn is_account_name(field: &Field<'_>) -> bool {
    field.key_is_ignore_case("account_name")
}

fn is_email(field: &Field<'_>) -> bool {
    field.as_str().is_some_and(|s| s.contains('@'))
}

fn is_code_token(field: &Field<'_>) -> bool {
    let free_text_key = field.key.is_some_and(|key| FREE_TEXT_KEYS.contains(&key));
    !free_text_key && field.as_str().is_some_and(|s| CODE_TOKEN.is_match(s))
}

fn is_reference_number(field: &Field<'_>) -> bool {
    field
        .as_str()
        .is_some_and(|s| s.chars().count() > 6 && DIGIT_RUN.is_match(s))
}

fn is_free_text(field: &Field<'_>) -> bool {
    field.value.is_string()
}
