use num_complex::Complex64;
use thiserror::Error;

use crate::core::data::bounds::Bounds;
use crate::core::data::grid::{Grid, GridError};
use crate::core::data::plane::{Orientation, Plane};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplePlaneError {
    #[error("plane resolution must be at least 2, got {0}")]
    InvalidResolution(usize),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// `count` evenly spaced samples over `[start, stop]`, the last one exactly `stop`.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = (stop - start) / (count - 1) as f64;

    (0..count)
        .map(|i| if i == count - 1 { stop } else { start + i as f64 * step })
        .collect()
}

/// Builds the `resolution x resolution` grid of sample coordinates for `bounds`.
pub fn sample_plane(
    bounds: Bounds,
    resolution: usize,
    orientation: Orientation,
) -> Result<Plane, SamplePlaneError> {
    if resolution < 2 {
        return Err(SamplePlaneError::InvalidResolution(resolution));
    }

    let reals = linspace(bounds.re_min(), bounds.re_max(), resolution);
    let imags = match orientation {
        Orientation::TopDown => linspace(bounds.im_max(), bounds.im_min(), resolution),
        Orientation::BottomUp => linspace(bounds.im_min(), bounds.im_max(), resolution),
    };

    let cells = imags
        .iter()
        .flat_map(|&imag| reals.iter().map(move |&real| Complex64::new(real, imag)))
        .collect();

    Ok(Grid::from_cells(resolution, resolution, cells)?)
}
