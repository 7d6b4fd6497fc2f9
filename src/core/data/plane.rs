use num_complex::Complex64;

use crate::core::data::grid::Grid;

/// Complex sample coordinates, one per cell.
pub type Plane = Grid<Complex64>;

/// Which imaginary bound row 0 of a plane sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Row 0 is `im_max`, matching image coordinates.
    #[default]
    TopDown,
    /// Row 0 is `im_min`.
    BottomUp,
}

impl Orientation {
    pub const ALL: &'static [Self] = &[Self::TopDown, Self::BottomUp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TopDown => "top-down",
            Self::BottomUp => "bottom-up",
        }
    }
}
