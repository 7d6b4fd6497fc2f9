//! Interestingness scores for candidate windows.
//!
//! Both strategies are reduced to exact integer keys where a larger key means
//! a more interesting window and a uniform window scores exactly zero. Keys of
//! windows with identical contents are identical no matter how they were
//! accumulated, so sliding and brute-force scans agree on every tie.

use crate::core::data::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringStrategy {
    /// Sum of squared deviations from the window mean.
    Variance,
    /// Shannon entropy of the window's iteration-count distribution.
    #[default]
    Entropy,
}

impl ScoringStrategy {
    pub const ALL: &'static [Self] = &[Self::Entropy, Self::Variance];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Variance => "variance",
            Self::Entropy => "entropy",
        }
    }
}

/// `n·Σx² − (Σx)²`, which is `n` times the sum of squared deviations.
#[must_use]
pub fn variance_key(cell_count: usize, sum: u64, sum_of_squares: u128) -> u128 {
    cell_count as u128 * sum_of_squares - sum as u128 * sum as u128
}

#[must_use]
pub fn variance_score(key: u128, cell_count: usize) -> f64 {
    key as f64 / cell_count as f64
}

/// 2^40; `c·ln c` terms are stored as integers at this scale.
const ENTROPY_SCALE: f64 = 1_099_511_627_776.0;

/// Fixed-point `c·ln c` for every count a window of `cell_count` cells can hold.
///
/// For a window with bin counts `c_i`, `n·ln n − Σ c_i·ln c_i` equals `n` times
/// its entropy, so the entropy key is `table[n] − Σ table[c_i]`.
#[derive(Debug, Clone)]
pub struct EntropyTable {
    scaled: Vec<u128>,
}

impl EntropyTable {
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        let scaled = (0..=cell_count)
            .map(|count| {
                if count < 2 {
                    0
                } else {
                    let count = count as f64;
                    (count * count.ln() * ENTROPY_SCALE).round() as u128
                }
            })
            .collect();

        Self { scaled }
    }

    #[must_use]
    pub fn term(&self, count: u32) -> u128 {
        self.scaled[count as usize]
    }

    #[must_use]
    pub fn key(&self, cell_count: usize, sum_of_terms: u128) -> u128 {
        self.scaled[cell_count].saturating_sub(sum_of_terms)
    }
}

#[must_use]
pub fn entropy_score(key: u128, cell_count: usize) -> f64 {
    key as f64 / ENTROPY_SCALE / cell_count as f64
}

/// Replaces each value by its rank among the grid's distinct values, so
/// histograms can be indexed densely. Returns the ranked grid and the number
/// of distinct values.
#[must_use]
pub fn rank_values(grid: &Grid<u32>) -> (Grid<u32>, usize) {
    let mut distinct = grid.cells().to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let ranked = grid.map(|value| {
        distinct
            .binary_search(value)
            .map_or(0, |rank| rank as u32)
    });

    (ranked, distinct.len())
}
