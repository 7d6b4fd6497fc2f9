use crate::core::actions::select_region::errors::SelectRegionError;

/// Extent of a candidate region: a window spans `rows + 1` by `cols + 1` cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: usize,
    pub cols: usize,
}

impl WindowSize {
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.rows + 1) * (self.cols + 1)
    }
}

/// `round(grid / zoom_factor)` per axis, halves rounding to even.
pub fn window_size(
    grid_rows: usize,
    grid_cols: usize,
    zoom_factor: f64,
) -> Result<WindowSize, SelectRegionError> {
    if grid_rows < 2 || grid_cols < 2 {
        return Err(SelectRegionError::InvalidResolution {
            rows: grid_rows,
            cols: grid_cols,
        });
    }

    let invalid = SelectRegionError::InvalidZoomFactor {
        zoom_factor,
        rows: grid_rows,
        cols: grid_cols,
    };

    if !(zoom_factor > 1.0) || !zoom_factor.is_finite() {
        return Err(invalid);
    }

    let rows = (grid_rows as f64 / zoom_factor).round_ties_even() as usize;
    let cols = (grid_cols as f64 / zoom_factor).round_ties_even() as usize;

    if rows == 0 || cols == 0 || rows >= grid_rows || cols >= grid_cols {
        return Err(invalid);
    }

    Ok(WindowSize { rows, cols })
}
