use crate::core::data::bounds::Bounds;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::grid::Grid;

/// Which grid of a frame a consumer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePlane {
    #[default]
    Iterations,
    Magnitudes,
}

impl FramePlane {
    pub const ALL: &'static [Self] = &[Self::Iterations, Self::Magnitudes];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Iterations => "iterations",
            Self::Magnitudes => "magnitudes",
        }
    }
}

/// One emitted frame of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: usize,
    bounds: Bounds,
    escape_time: EscapeTime,
}

impl Frame {
    #[must_use]
    pub fn new(index: usize, bounds: Bounds, escape_time: EscapeTime) -> Self {
        Self {
            index,
            bounds,
            escape_time,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn escape_time(&self) -> &EscapeTime {
        &self.escape_time
    }

    #[must_use]
    pub fn plane_values(&self, plane: FramePlane) -> Grid<f64> {
        match plane {
            FramePlane::Iterations => self.escape_time.iterations().map(|&count| f64::from(count)),
            FramePlane::Magnitudes => self.escape_time.magnitudes(),
        }
    }
}
