use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::select_region::errors::SelectRegionError;
use crate::core::actions::select_region::scoring::{
    EntropyTable, ScoringStrategy, entropy_score, rank_values, variance_key, variance_score,
};
use crate::core::actions::select_region::window_size::{WindowSize, window_size};
use crate::core::data::escape_time::IterationGrid;
use crate::core::data::grid::Grid;
use crate::core::data::region::Region;

/// Winning window and its interestingness score.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionChoice {
    pub region: Region,
    pub score: f64,
}

/// Best `(key, col)` of one row of offsets; the first strict maximum wins.
type RowBest = Option<(u128, usize)>;

fn keep_first_max(best: &mut RowBest, key: u128, col: usize) {
    let current = best.map_or(0, |(best_key, _)| best_key);

    if key > current {
        *best = Some((key, col));
    }
}

/// Summed-area tables of values and squared values, one extra leading row and column of zeros.
struct SummedAreaTables {
    stride: usize,
    sums: Vec<u64>,
    squares: Vec<u128>,
}

impl SummedAreaTables {
    fn new(grid: &Grid<u32>) -> Self {
        let stride = grid.cols() + 1;
        let mut sums = vec![0u64; (grid.rows() + 1) * stride];
        let mut squares = vec![0u128; (grid.rows() + 1) * stride];

        for row in 0..grid.rows() {
            let mut row_sum = 0u64;
            let mut row_squares = 0u128;

            for (col, &value) in grid.row(row).iter().enumerate() {
                row_sum += u64::from(value);
                row_squares += u128::from(value) * u128::from(value);

                let index = (row + 1) * stride + col + 1;
                sums[index] = sums[index - stride] + row_sum;
                squares[index] = squares[index - stride] + row_squares;
            }
        }

        Self {
            stride,
            sums,
            squares,
        }
    }

    /// Sum and sum of squares over `height x width` cells starting at `(row, col)`.
    fn window(&self, row: usize, col: usize, height: usize, width: usize) -> (u64, u128) {
        let top_left = row * self.stride + col;
        let top_right = top_left + width;
        let bottom_left = (row + height) * self.stride + col;
        let bottom_right = bottom_left + width;

        let sum = (self.sums[bottom_right] + self.sums[top_left])
            - (self.sums[top_right] + self.sums[bottom_left]);
        let squares = (self.squares[bottom_right] + self.squares[top_left])
            - (self.squares[top_right] + self.squares[bottom_left]);

        (sum, squares)
    }
}

fn best_variance_rows(grid: &IterationGrid, window: WindowSize, offset_rows: usize, offset_cols: usize) -> Vec<RowBest> {
    let tables = SummedAreaTables::new(grid);
    let cell_count = window.cell_count();

    (0..offset_rows)
        .into_par_iter()
        .map(|row| {
            let mut best = None;

            for col in 0..offset_cols {
                let (sum, squares) = tables.window(row, col, window.rows + 1, window.cols + 1);
                keep_first_max(&mut best, variance_key(cell_count, sum, squares), col);
            }

            best
        })
        .collect()
}

/// Histogram of ranked values inside a window, with the running `Σ c·ln c`.
struct SlidingHistogram<'a> {
    table: &'a EntropyTable,
    counts: Vec<u32>,
    sum_of_terms: u128,
}

impl<'a> SlidingHistogram<'a> {
    fn new(table: &'a EntropyTable, distinct: usize) -> Self {
        Self {
            table,
            counts: vec![0; distinct],
            sum_of_terms: 0,
        }
    }

    fn add(&mut self, rank: u32) {
        let count = &mut self.counts[rank as usize];
        self.sum_of_terms -= self.table.term(*count);
        *count += 1;
        self.sum_of_terms += self.table.term(*count);
    }

    fn remove(&mut self, rank: u32) {
        let count = &mut self.counts[rank as usize];
        self.sum_of_terms -= self.table.term(*count);
        *count -= 1;
        self.sum_of_terms += self.table.term(*count);
    }

    fn add_column(&mut self, ranked: &Grid<u32>, rows: std::ops::RangeInclusive<usize>, col: usize) {
        for row in rows {
            self.add(ranked.row(row)[col]);
        }
    }

    fn remove_column(&mut self, ranked: &Grid<u32>, rows: std::ops::RangeInclusive<usize>, col: usize) {
        for row in rows {
            self.remove(ranked.row(row)[col]);
        }
    }
}

fn best_entropy_rows(grid: &IterationGrid, window: WindowSize, offset_rows: usize, offset_cols: usize) -> Vec<RowBest> {
    let (ranked, distinct) = rank_values(grid);
    let cell_count = window.cell_count();
    let table = EntropyTable::new(cell_count);

    (0..offset_rows)
        .into_par_iter()
        .map(|row| {
            let rows = row..=row + window.rows;
            let mut histogram = SlidingHistogram::new(&table, distinct);
            let mut best = None;

            for col in 0..=window.cols {
                histogram.add_column(&ranked, rows.clone(), col);
            }

            for col in 0..offset_cols {
                keep_first_max(&mut best, table.key(cell_count, histogram.sum_of_terms), col);

                if col + 1 < offset_cols {
                    histogram.remove_column(&ranked, rows.clone(), col);
                    histogram.add_column(&ranked, rows.clone(), col + window.cols + 1);
                }
            }

            best
        })
        .collect()
}

pub(crate) fn finish_choice(
    best_per_row: impl IntoIterator<Item = RowBest>,
    window: WindowSize,
    strategy: ScoringStrategy,
) -> Result<RegionChoice, SelectRegionError> {
    let mut best: Option<(u128, usize, usize)> = None;

    for (row, row_best) in best_per_row.into_iter().enumerate() {
        if let Some((key, col)) = row_best {
            if key > best.map_or(0, |(best_key, _, _)| best_key) {
                best = Some((key, row, col));
            }
        }
    }

    let (key, row, col) = best.ok_or(SelectRegionError::NoRegionFound)?;
    let cell_count = window.cell_count();
    let score = match strategy {
        ScoringStrategy::Variance => variance_score(key, cell_count),
        ScoringStrategy::Entropy => entropy_score(key, cell_count),
    };

    Ok(RegionChoice {
        region: Region::at(row, col, window.rows, window.cols),
        score,
    })
}

/// Finds the most interesting window of `grid` for a zoom by `zoom_factor`.
///
/// Candidate windows are closed ranges `[row, row + window.rows] x
/// [col, col + window.cols]` lying inside the grid. The scan keeps running
/// statistics as the window slides and splits rows of offsets across rayon's
/// pool; the result is the first strict maximum in row-major order.
pub fn select_region(
    grid: &IterationGrid,
    zoom_factor: f64,
    strategy: ScoringStrategy,
) -> Result<RegionChoice, SelectRegionError> {
    let window = window_size(grid.rows(), grid.cols(), zoom_factor)?;
    let offset_rows = grid.rows() - window.rows;
    let offset_cols = grid.cols() - window.cols;

    let best_per_row = match strategy {
        ScoringStrategy::Variance => best_variance_rows(grid, window, offset_rows, offset_cols),
        ScoringStrategy::Entropy => best_entropy_rows(grid, window, offset_rows, offset_cols),
    };

    let choice = finish_choice(best_per_row, window, strategy)?;

    debug!(
        strategy = strategy.display_name(),
        row_start = choice.region.row_start,
        col_start = choice.region.col_start,
        window_rows = window.rows,
        window_cols = window.cols,
        score = choice.score,
        "region selected"
    );

    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_escape_time::generate_escape_time::generate_escape_time;
    use crate::core::actions::select_region::select_region_brute_force::select_region_brute_force;
    use crate::core::data::bounds::Bounds;
    use crate::core::data::plane::Orientation;
    use crate::core::data::rule_params::RuleParams;
    use crate::core::fractals::mandelbrot::MandelbrotRule;
    use crate::core::util::sample_plane::sample_plane;

    fn hot_spot_grid() -> IterationGrid {
        let mut cells = vec![0u32; 36];
        cells[4 * 6 + 4] = 10;

        Grid::from_cells(6, 6, cells).unwrap()
    }

    fn split_grid() -> IterationGrid {
        let cells = (0..64).map(|i| if i % 8 < 4 { 0 } else { 50 }).collect();

        Grid::from_cells(8, 8, cells).unwrap()
    }

    /// Deterministic pseudo-random grid with few distinct values, so ties are common.
    fn noisy_grid(rows: usize, cols: usize, seed: u64, levels: u64) -> IterationGrid {
        let mut state = seed;
        let cells = (0..rows * cols)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) % levels) as u32
            })
            .collect();

        Grid::from_cells(rows, cols, cells).unwrap()
    }

    fn mandelbrot_grid(resolution: usize) -> IterationGrid {
        let plane = sample_plane(
            Bounds::new(-2.0, 1.0, -1.5, 1.5).unwrap(),
            resolution,
            Orientation::TopDown,
        )
        .unwrap();

        generate_escape_time(&plane, 40, &MandelbrotRule, &RuleParams::new())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_uniform_grid_has_no_region() {
        for &strategy in ScoringStrategy::ALL {
            for value in [0, 17, 255] {
                let grid = Grid::filled(12, 12, value);

                assert_eq!(
                    select_region(&grid, 2.0, strategy),
                    Err(SelectRegionError::NoRegionFound)
                );
            }
        }
    }

    #[test]
    fn test_ties_go_to_first_window_in_row_major_order() {
        for &strategy in ScoringStrategy::ALL {
            let choice = select_region(&hot_spot_grid(), 3.0, strategy).unwrap();

            assert_eq!(
                choice.region,
                Region {
                    row_start: 2,
                    row_end: 4,
                    col_start: 2,
                    col_end: 4
                }
            );
        }
    }

    #[test]
    fn test_scores_of_hot_spot_window() {
        let variance = select_region(&hot_spot_grid(), 3.0, ScoringStrategy::Variance).unwrap();
        let entropy = select_region(&hot_spot_grid(), 3.0, ScoringStrategy::Entropy).unwrap();
        let p: f64 = 8.0 / 9.0;
        let q: f64 = 1.0 / 9.0;

        // 100 - 100 / 9
        assert!((variance.score - 800.0 / 9.0).abs() < 1e-9);
        assert!((entropy.score + p * p.ln() + q * q.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_window_straddling_the_boundary_wins() {
        for &strategy in ScoringStrategy::ALL {
            let choice = select_region(&split_grid(), 2.0, strategy).unwrap();

            assert_eq!(choice.region.top_left(), (0, 1));
            assert_eq!(choice.region.bottom_right(), (4, 5));
        }
    }

    #[test]
    fn test_window_size_law() {
        let grid = noisy_grid(30, 20, 7, 5);

        for zoom_factor in [1.5, 2.0, 3.0, 4.5] {
            let choice = select_region(&grid, zoom_factor, ScoringStrategy::Entropy).unwrap();
            let expected = window_size(30, 20, zoom_factor).unwrap();

            assert_eq!(choice.region.row_end - choice.region.row_start, expected.rows);
            assert_eq!(choice.region.col_end - choice.region.col_start, expected.cols);
            assert!(choice.region.row_end < 30);
            assert!(choice.region.col_end < 20);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let grid = mandelbrot_grid(48);

        for &strategy in ScoringStrategy::ALL {
            let first = select_region(&grid, 1.5, strategy).unwrap();
            let second = select_region(&grid, 1.5, strategy).unwrap();

            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_matches_brute_force_on_noisy_grids() {
        for seed in 1..6 {
            let grid = noisy_grid(17, 23, seed, 4);

            for &strategy in ScoringStrategy::ALL {
                for zoom_factor in [1.5, 2.0, 3.7] {
                    assert_eq!(
                        select_region(&grid, zoom_factor, strategy),
                        select_region_brute_force(&grid, zoom_factor, strategy),
                    );
                }
            }
        }
    }

    #[test]
    fn test_matches_brute_force_on_escape_time_grid() {
        let grid = mandelbrot_grid(40);

        for &strategy in ScoringStrategy::ALL {
            for zoom_factor in [1.5, 2.5] {
                assert_eq!(
                    select_region(&grid, zoom_factor, strategy),
                    select_region_brute_force(&grid, zoom_factor, strategy),
                );
            }
        }
    }

    #[test]
    fn test_invalid_zoom_factor() {
        let result = select_region(&hot_spot_grid(), 1.0, ScoringStrategy::Variance);

        assert!(matches!(result, Err(SelectRegionError::InvalidZoomFactor { .. })));
    }

    #[test]
    fn test_grid_too_small() {
        let grid = Grid::filled(1, 5, 3u32);

        assert_eq!(
            select_region(&grid, 2.0, ScoringStrategy::Entropy),
            Err(SelectRegionError::InvalidResolution { rows: 1, cols: 5 })
        );
    }
}
