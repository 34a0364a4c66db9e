//! Log sanitization utilities
//!
//! Keeps passwords out of debug logs and stops large response bodies
//! from flooding the log file.

use crate::types::Payload;

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Field names whose values are never logged.
const SECRET_FIELDS: &[&str] = &["password", "confirm"];

/// Placeholder written instead of a secret value.
const MASK: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

fn is_secret(name: &str) -> bool {
    SECRET_FIELDS
        .iter()
        .any(|secret| name.eq_ignore_ascii_case(secret))
}

/// Render a payload as `{name=value, ...}` with secret values masked.
pub fn describe_payload(payload: &Payload) -> String {
    let fields: Vec<String> = payload
        .iter()
        .map(|(name, value)| {
            if is_secret(name) {
                format!("{name}={MASK}")
            } else {
                format!("{name}={}", truncate_for_log(value))
            }
        })
        .collect();
    format!("{{{}}}", fields.join(", "))
}
