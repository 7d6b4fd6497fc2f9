use crate::core::actions::select_region::errors::SelectRegionError;
use crate::core::actions::select_region::scoring::{EntropyTable, ScoringStrategy, rank_values, variance_key};
use crate::core::actions::select_region::select_region::{RegionChoice, finish_choice};
use crate::core::actions::select_region::window_size::window_size;
use crate::core::data::escape_time::IterationGrid;

/// Scores every candidate window from scratch on the calling thread.
///
/// Same keys and tie-breaking as [`select_region`], kept as a reference for
/// checking the sliding scan.
///
/// [`select_region`]: crate::core::actions::select_region::select_region::select_region
pub fn select_region_brute_force(
    grid: &IterationGrid,
    zoom_factor: f64,
    strategy: ScoringStrategy,
) -> Result<RegionChoice, SelectRegionError> {
    let window = window_size(grid.rows(), grid.cols(), zoom_factor)?;
    let cell_count = window.cell_count();
    let (ranked, distinct) = rank_values(grid);
    let table = EntropyTable::new(cell_count);

    let best_per_row = (0..grid.rows() - window.rows).map(|row| {
        let mut best: Option<(u128, usize)> = None;

        for col in 0..grid.cols() - window.cols {
            let key = match strategy {
                ScoringStrategy::Variance => {
                    let mut sum = 0u64;
                    let mut squares = 0u128;

                    for r in row..=row + window.rows {
                        for &value in &grid.row(r)[col..=col + window.cols] {
                            sum += u64::from(value);
                            squares += u128::from(value) * u128::from(value);
                        }
                    }

                    variance_key(cell_count, sum, squares)
                }
                ScoringStrategy::Entropy => {
                    let mut counts = vec![0u32; distinct];

                    for r in row..=row + window.rows {
                        for &rank in &ranked.row(r)[col..=col + window.cols] {
                            counts[rank as usize] += 1;
                        }
                    }

                    let terms = counts.iter().map(|&count| table.term(count)).sum();

                    table.key(cell_count, terms)
                }
            };

            if key > best.map_or(0, |(best_key, _)| best_key) {
                best = Some((key, col));
            }
        }

        best
    });

    finish_choice(best_per_row, window, strategy)
}
