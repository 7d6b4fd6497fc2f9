use num_complex::Complex64;

use crate::core::data::grid::Grid;

pub type IterationGrid = Grid<u32>;
pub type ValueGrid = Grid<Complex64>;

/// Completed escape-time evaluation of one plane.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTime {
    max_iterations: u32,
    iterations: IterationGrid,
    values: ValueGrid,
}

impl EscapeTime {
    pub(crate) fn new(max_iterations: u32, iterations: IterationGrid, values: ValueGrid) -> Self {
        Self {
            max_iterations,
            iterations,
            values,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn iterations(&self) -> &IterationGrid {
        &self.iterations
    }

    #[must_use]
    pub fn values(&self) -> &ValueGrid {
        &self.values
    }

    /// Elementwise `|value|`.
    #[must_use]
    pub fn magnitudes(&self) -> Grid<f64> {
        self.values.map(|z| z.norm())
    }

    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.iterations
            .cells()
            .iter()
            .filter(|&&count| count < self.max_iterations)
            .count()
    }

    #[must_use]
    pub fn into_parts(self) -> (IterationGrid, ValueGrid) {
        (self.iterations, self.values)
    }
}
