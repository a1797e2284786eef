//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{uuid}` - random identifier
//! - `{rand:N}` - random N-digit number
//! - `{<list>}` - random entry of a built-in word list (see [`words::list`])
//!
//! Unknown or malformed placeholders are copied through verbatim.

use super::numeric::generate_random_digits;
use super::uuid::generate_id;
use super::words;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };

        let token = &after[..end];
        match expand_placeholder(token, rng) {
            Some(text) => result.push_str(&text),
            None => {
                result.push('{');
                result.push_str(token);
                result.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Pick one pattern uniformly and expand it.
pub fn generate_from_patterns<R: Rng>(patterns: &[&str], rng: &mut R) -> String {
    match patterns.choose(rng) {
        Some(pattern) => generate_pattern(pattern, rng),
        None => String::new(),
    }
}

fn expand_placeholder<R: Rng>(token: &str, rng: &mut R) -> Option<String> {
    if token == "uuid" {
        return Some(generate_id(rng));
    }

    if let Some(digits) = token.strip_prefix("rand:") {
        let digits = digits.parse::<usize>().ok()?;
        return Some(generate_random_digits(rng, digits));
    }

    words::list(token)?
        .choose(rng)
        .map(|word| (*word).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_literal() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_pattern("no placeholders", &mut rng), "no placeholders");
    }

    #[test]
    fn test_generate_pattern_uuid() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("id-{uuid}", &mut rng);

        assert!(s.starts_with("id-"));
        assert_eq!(s.len(), 3 + 36); // "id-" + UUID
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("code-{rand:6}", &mut rng);

        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6); // "code-" + 6 digits
        let random_part = &s[5..];
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_pattern_word_lists() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("{first} {last}", &mut rng);

        let (first, last) = s.split_once(' ').unwrap();
        assert!(words::FIRST_NAMES.contains(&first));
        assert!(words::LAST_NAMES.contains(&last));
    }

    #[test]
    fn test_generate_pattern_unknown_placeholders_kept() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(generate_pattern("a {mystery} b", &mut rng), "a {mystery} b");
        assert_eq!(generate_pattern("{rand:x}", &mut rng), "{rand:x}");
        assert_eq!(generate_pattern("open {brace", &mut rng), "open {brace");
    }

    #[test]
    fn test_generate_from_patterns_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_from_patterns(&[], &mut rng), "");
    }
}
