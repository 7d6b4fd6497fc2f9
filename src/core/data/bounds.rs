use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("bounds size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned window of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Bounds {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, BoundsError> {
        let width = re_max - re_min;
        let height = im_max - im_min;

        // negated so NaN extents are rejected as well
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(BoundsError::InvalidSize { width, height });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Smallest bounds spanning two opposite corners, in any order.
    pub fn from_corners(a: Complex64, b: Complex64) -> Result<Self, BoundsError> {
        Self::new(
            a.re.min(b.re),
            a.re.max(b.re),
            a.im.min(b.im),
            a.im.max(b.im),
        )
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }

    #[must_use]
    pub fn centre(&self) -> Complex64 {
        Complex64::new(
            self.re_min + self.width() / 2.0,
            self.im_min + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex64) -> bool {
        self.re_min <= point.re
            && self.im_min <= point.im
            && self.re_max >= point.re
            && self.im_max >= point.im
    }
}
