use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectRegionError {
    #[error("grid must be at least 2x2 to select a region, got {rows}x{cols}")]
    InvalidResolution { rows: usize, cols: usize },
    #[error("zoom factor {zoom_factor} does not give a window strictly inside a {rows}x{cols} grid")]
    InvalidZoomFactor {
        zoom_factor: f64,
        rows: usize,
        cols: usize,
    },
    #[error("every candidate window is uniform, no region scores above zero")]
    NoRegionFound,
}
