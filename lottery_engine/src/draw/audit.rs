//! Audit fingerprint of draw construction parameters.
//!
//! The fingerprint is the lowercase hex SHA-256 of a compact JSON document
//! with keys in sorted order:
//!
//! ```text
//! {"entries":[["REG-1",null],["REG-2","Alice"]],"seed":"s","winners_to_pick":1}
//! ```
//!
//! Entries are sorted by registration number, so the hash does not depend on
//! input order. It has no relation to the shuffle's randomness.

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::errors::{DrawError, DrawResult};
use super::models::Entry;

/// Field order is the sorted key order of the canonical document.
#[derive(Serialize)]
struct CanonicalInput<'a> {
    entries: Vec<(&'a str, Option<&'a str>)>,
    seed: Option<&'a str>,
    winners_to_pick: usize,
}

/// Compute the input hash for a set of construction parameters.
pub fn compute_input_hash(
    entries: &[Entry],
    winners_to_pick: usize,
    seed: Option<&str>,
) -> DrawResult<String> {
    let mut pairs: Vec<(&str, Option<&str>)> = entries
        .iter()
        .map(|entry| (entry.registration_no(), entry.label()))
        .collect();
    pairs.sort_unstable();

    let canonical = CanonicalInput {
        entries: pairs,
        seed,
        winners_to_pick,
    };
    let document = serde_json::to_vec(&canonical)
        .map_err(|e| DrawError::InvalidInput(format!("cannot serialize input: {e}")))?;

    Ok(hex::encode(Sha256::digest(&document)))
}
