//! Fictitious names, emails and filler text.

use super::numeric::generate_random_digits;
use super::pattern::{generate_from_patterns, generate_pattern};
use rand::Rng;

const COMPANY_PATTERNS: &[&str] = &[
    "{last} {company_suffix}",
    "{last}-{last}",
    "{last}, {last} and {last}",
];

const CATCH_PHRASE_PATTERN: &str = "{adjective} {descriptor} {phrase_noun}";

const ACCOUNT_NAME_PATTERN: &str = "{account_kind} Account";

const EMAIL_PATTERN: &str = "{first}.{last}{rand:2}@{domain}";

const FILLER_PATTERN: &str = "Text {noun} {rand:2}";

/// Organization-style name, e.g. `Whitaker Holdings`.
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    generate_from_patterns(COMPANY_PATTERNS, rng)
}

/// Product/service catch phrase, e.g. `Seamless real-time platform`.
pub fn catch_phrase<R: Rng>(rng: &mut R) -> String {
    generate_pattern(CATCH_PHRASE_PATTERN, rng)
}

/// Finance account name, e.g. `Home Loan Account`.
pub fn account_name<R: Rng>(rng: &mut R) -> String {
    generate_pattern(ACCOUNT_NAME_PATTERN, rng)
}

/// Lower-case email address on a reserved example domain.
pub fn email<R: Rng>(rng: &mut R) -> String {
    generate_pattern(EMAIL_PATTERN, rng).to_lowercase()
}

/// Filler phrase that replaces free text: a word plus a 2-digit suffix.
pub fn filler_text<R: Rng>(rng: &mut R) -> String {
    generate_pattern(FILLER_PATTERN, rng)
}

/// Digit string standing in for an account or reference number.
pub fn reference_number<R: Rng>(rng: &mut R, len: usize) -> String {
    generate_random_digits(rng, len)
}
