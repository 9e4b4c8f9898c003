//! Request identifiers for responses that arrive without one.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of generated ids.
pub const REQUEST_ID_PREFIX: &str = "brs";

/// Generate a request id from the clock and a per-call random salt.
///
/// Spin may serve every request from a fresh instance, so no in-memory
/// counter is involved.
pub fn generate_request_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format_request_id(nanos, random_salt())
}

/// Random value seeded from the host's entropy source.
fn random_salt() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u64(0x9e37_79b9_7f4a_7c15);
    hasher.finish()
}

fn format_request_id(nanos: u128, salt: u64) -> String {
    format!("{}-{:x}-{:016x}", REQUEST_ID_PREFIX, nanos, salt)
}

/// Incoming `x-request-id` if usable, otherwise a generated one.
pub fn request_id_or_generate(incoming: Option<&str>) -> String {
    match incoming.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_request_id(),
    }
}
