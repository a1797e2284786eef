//! Identifier generator.

use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a random UUID v4 string using the provided RNG.
///
/// If the RNG cannot fill the buffer, a timestamp based identifier is
/// returned instead (see [`fallback_id`]).
pub fn generate_id<R: RngCore>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        tracing::debug!("Random source unavailable ({e}), using fallback identifier");
        return fallback_id();
    }

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes).to_string()
}

/// Lower-quality identifier: `id_` + base36 unix millis + base36 suffix.
///
/// The suffix mixes the clock's sub-millisecond nanos with a process-wide
/// counter so two calls in the same millisecond still differ.
pub fn fallback_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = (now.subsec_nanos() as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(counter);

    format!(
        "id_{}{}",
        to_base36(now.as_millis() as u64),
        to_base36(suffix)
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
