//! Log truncation utilities
//!
//! Feed lists hold hundreds of ids and comment bodies can be long HTML
//! fragments; debug logs only keep a bounded prefix of either.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 200;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) and the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}… ({} bytes)",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}
