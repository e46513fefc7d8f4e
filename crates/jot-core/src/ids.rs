//! ID prefix constants and client-side ID generation.
//!
//! Identifiers are generated on the client (never by the store) so an item
//! has a stable identity before its first write lands. Format is
//! `{prefix}-{hex}` where the hex part comes from the OS random source.

use crate::errors::CoreError;

pub const PREFIX_ITEM: &str = "itm";
pub const PREFIX_SUBTASK: &str = "sub";
pub const PREFIX_SESSION: &str = "ses";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_ITEM, PREFIX_SUBTASK, PREFIX_SESSION];

const ITEM_ID_BYTES: usize = 8;
const SUBTASK_ID_BYTES: usize = 4;
const SESSION_ID_BYTES: usize = 16;

/// Generate `{prefix}-{2 * bytes hex chars}`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str, bytes: usize) -> Result<String, CoreError> {
    let mut buf = vec![0u8; bytes];
    getrandom::fill(&mut buf)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// New item ID, e.g. `itm-3fa1c09e7b2d4410`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn new_item_id() -> Result<String, CoreError> {
    generate_id(PREFIX_ITEM, ITEM_ID_BYTES)
}

/// New subtask ID, e.g. `sub-9c01ab3e`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn new_subtask_id() -> Result<String, CoreError> {
    generate_id(PREFIX_SUBTASK, SUBTASK_ID_BYTES)
}

/// New anonymous session ID (128 bits of randomness).
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn new_session_id() -> Result<String, CoreError> {
    generate_id(PREFIX_SESSION, SESSION_ID_BYTES)
}

/// Pick a uniformly-ish random index below `len`. Returns 0 for empty input.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn random_index(len: usize) -> Result<usize, CoreError> {
    if len == 0 {
        return Ok(0);
    }
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    let n = u64::from_le_bytes(buf);
    #[allow(clippy::cast_possible_truncation)]
    Ok((n % len as u64) as usize)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn item_id_has_prefix_and_hex_body() {
        let id = new_item_id().unwrap();
        assert!(id.starts_with("itm-"), "unexpected id: {id}");
        assert_eq!(id.len(), 4 + ITEM_ID_BYTES * 2);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_is_long() {
        let id = new_session_id().unwrap();
        assert!(id.starts_with("ses-"));
        assert_eq!(id.len(), 4 + 32);
    }

    #[test]
    fn all_prefixes_generate() {
        for prefix in ALL_PREFIXES {
            let id = generate_id(prefix, 4).unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..200 {
            assert!(seen.insert(new_item_id().unwrap()));
        }
    }

    #[test]
    fn random_index_stays_in_bounds() {
        assert_eq!(random_index(0).unwrap(), 0);
        for _ in 0..50 {
            assert!(random_index(7).unwrap() < 7);
        }
    }
}
