// entropysort-entropy/src/entropy/mod.rs
use alloc::collections::BTreeMap;
use libm::log2;

use crate::EntropyScore;

/// Calculates the Shannon entropy of a string over its Unicode code points.
///
/// Every `char` is one symbol, so a multi-byte character counts once.
/// Returns the entropy in bits per symbol; empty input scores `0.0`.
pub fn shannon_entropy(text: &str) -> EntropyScore {
    let mut frequencies: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;

    for c in text.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
        total += 1;
    }

    // No symbols means no uncertainty; avoids 0/0.
    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    let mut entropy = 0.0;

    for &count in frequencies.values() {
        let p = count as f64 / len;
        entropy -= p * log2(p);
    }

    entropy
}
