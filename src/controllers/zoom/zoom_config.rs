use crate::controllers::data::execution_mode::ExecutionMode;
use crate::controllers::zoom::errors::ZoomConfigError;
use crate::core::actions::select_region::scoring::ScoringStrategy;
use crate::core::actions::select_region::window_size::window_size;
use crate::core::data::bounds::Bounds;
use crate::core::data::plane::Orientation;

pub const DEFAULT_RESOLUTION: usize = 300;
pub const DEFAULT_MAX_ITERATIONS: u32 = 60;
pub const DEFAULT_FRAME_COUNT: usize = 10;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;

pub(crate) fn default_bounds() -> Bounds {
    Bounds::new(-2.0, 1.0, -1.5, 1.5).expect("default zoom bounds are valid")
}

/// What a zoom run does when every candidate window is uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoRegionPolicy {
    /// Abort with `SelectRegionError::NoRegionFound`.
    #[default]
    Fail,
    /// Keep the current bounds for the next frame.
    HoldBounds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub bounds: Bounds,
    pub resolution: usize,
    pub max_iterations: u32,
    pub frame_count: usize,
    pub zoom_factor: f64,
    pub strategy: ScoringStrategy,
    pub orientation: Orientation,
    pub execution_mode: ExecutionMode,
    pub no_region_policy: NoRegionPolicy,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            bounds: default_bounds(),
            resolution: DEFAULT_RESOLUTION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            frame_count: DEFAULT_FRAME_COUNT,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            strategy: ScoringStrategy::default(),
            orientation: Orientation::default(),
            execution_mode: ExecutionMode::default(),
            no_region_policy: NoRegionPolicy::default(),
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        validate_plane(self.resolution, self.max_iterations)?;

        if self.frame_count == 0 {
            return Err(ZoomConfigError::InvalidFrameCount);
        }

        if !(self.zoom_factor > 1.0) || !self.zoom_factor.is_finite() {
            return Err(ZoomConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        // a single frame never reaches region selection
        if self.frame_count > 1 {
            window_size(self.resolution, self.resolution, self.zoom_factor)
                .map_err(|_| ZoomConfigError::InvalidZoomFactor(self.zoom_factor))?;
        }

        Ok(())
    }
}

pub(crate) fn validate_plane(resolution: usize, max_iterations: u32) -> Result<(), ZoomConfigError> {
    if resolution < 2 {
        return Err(ZoomConfigError::InvalidResolution(resolution));
    }

    if max_iterations == 0 {
        return Err(ZoomConfigError::InvalidIterationBudget);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ZoomConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.bounds, Bounds::new(-2.0, 1.0, -1.5, 1.5).unwrap());
        assert_eq!(config.orientation, Orientation::TopDown);
        assert_eq!(config.no_region_policy, NoRegionPolicy::Fail);
    }

    #[test]
    fn test_validate_rejects_each_bad_field() {
        let base = ZoomConfig::default();

        assert_eq!(
            ZoomConfig { resolution: 1, ..base }.validate(),
            Err(ZoomConfigError::InvalidResolution(1))
        );
        assert_eq!(
            ZoomConfig { max_iterations: 0, ..base }.validate(),
            Err(ZoomConfigError::InvalidIterationBudget)
        );
        assert_eq!(
            ZoomConfig { frame_count: 0, ..base }.validate(),
            Err(ZoomConfigError::InvalidFrameCount)
        );
        assert_eq!(
            ZoomConfig { zoom_factor: 1.0, ..base }.validate(),
            Err(ZoomConfigError::InvalidZoomFactor(1.0))
        );
        assert!(ZoomConfig { zoom_factor: f64::NAN, ..base }.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_window_that_does_not_fit_resolution() {
        let base = ZoomConfig::default();

        // round(2 / 1.2) = 2, the full grid
        assert_eq!(
            ZoomConfig { resolution: 2, zoom_factor: 1.2, frame_count: 3, ..base }.validate(),
            Err(ZoomConfigError::InvalidZoomFactor(1.2))
        );
        // round(10 / 40) = 0
        assert_eq!(
            ZoomConfig { resolution: 10, zoom_factor: 40.0, frame_count: 2, ..base }.validate(),
            Err(ZoomConfigError::InvalidZoomFactor(40.0))
        );
        assert_eq!(
            ZoomConfig { resolution: 10, zoom_factor: 40.0, frame_count: 1, ..base }.validate(),
            Ok(())
        );
    }
}
