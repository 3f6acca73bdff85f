// Human-readable stats derived from the current depth.

use crate::activity::leaf_count;

/// Simulated transactions carried by each leaf triad.
const TX_PER_TRIAD: u64 = 1000;

pub fn total_transactions(depth: u32) -> u64 {
    TX_PER_TRIAD * leaf_count(depth) as u64
}

/// Comma-grouped decimal rendering, e.g. 729000 -> "729,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub struct Stats {
    pub depth_text: String,
    pub transactions_text: String,
}

/// Pure function of the current depth; recomputed after every transition.
pub fn present(depth: u32) -> Stats {
    Stats {
        depth_text: depth.to_string(),
        transactions_text: group_thousands(total_transactions(depth)),
    }
}
