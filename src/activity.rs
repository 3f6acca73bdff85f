// Simulated per-depth mining intensity. Rows for every supported depth are
// generated once at construction and never refreshed, so revisiting a depth
// always reproduces the same colors.

use rand::Rng;

pub const MIN_DEPTH: u32 = 0;
pub const MAX_DEPTH: u32 = 6;

/// Number of leaf triads at a given subdivision depth.
pub fn leaf_count(depth: u32) -> usize {
    3usize.pow(depth)
}

pub struct ActivityDataset {
    by_depth: Vec<Vec<f64>>,
}

impl ActivityDataset {
    /// Precompute an intensity row for every depth in [MIN_DEPTH, MAX_DEPTH].
    /// Each row `d` holds 3^d independent uniform samples in [0, 1).
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let by_depth = (MIN_DEPTH..=MAX_DEPTH)
            .map(|d| (0..leaf_count(d)).map(|_| rng.r#gen::<f64>()).collect())
            .collect();
        ActivityDataset { by_depth }
    }

    /// Intensity of one leaf triad. An absent entry reads as 0.0 rather
    /// than faulting; given the construction invariant it never occurs.
    pub fn get(&self, depth: u32, leaf: usize) -> f64 {
        self.by_depth
            .get(depth as usize)
            .and_then(|row| row.get(leaf))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn row(&self, depth: u32) -> &[f64] {
        self.by_depth.get(depth as usize).map_or(&[], Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn from_rows(by_depth: Vec<Vec<f64>>) -> Self {
        ActivityDataset { by_depth }
    }
}
