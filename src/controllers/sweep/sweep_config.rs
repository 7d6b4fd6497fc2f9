use std::collections::BTreeMap;

use crate::controllers::data::execution_mode::ExecutionMode;
use crate::controllers::zoom::errors::ZoomConfigError;
use crate::controllers::zoom::zoom_config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_RESOLUTION, default_bounds, validate_plane,
};
use crate::core::data::bounds::Bounds;
use crate::core::data::plane::Orientation;
use crate::core::data::rule_params::{ParamValue, RuleParams};

/// Settings shared by every sweep frame unless the frame overrides them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub bounds: Bounds,
    pub resolution: usize,
    pub max_iterations: u32,
    pub orientation: Orientation,
    pub execution_mode: ExecutionMode,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            bounds: default_bounds(),
            resolution: DEFAULT_RESOLUTION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            orientation: Orientation::default(),
            execution_mode: ExecutionMode::default(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        validate_plane(self.resolution, self.max_iterations)
    }
}

/// The view and rule arguments of a single sweep frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    pub bounds: Bounds,
    pub resolution: usize,
    pub max_iterations: u32,
}

/// Per-frame overrides. Unset view fields fall back to the [`SweepConfig`];
/// named parameters are laid over the base [`RuleParams`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepFrame {
    pub bounds: Option<Bounds>,
    pub resolution: Option<usize>,
    pub max_iterations: Option<u32>,
    pub params: BTreeMap<String, ParamValue>,
}

impl SweepFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = Some(resolution);
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Fields set on `other` win.
    #[must_use]
    pub fn merge(mut self, other: SweepFrame) -> Self {
        self.bounds = other.bounds.or(self.bounds);
        self.resolution = other.resolution.or(self.resolution);
        self.max_iterations = other.max_iterations.or(self.max_iterations);
        self.params.extend(other.params);
        self
    }

    /// Resolves the view against `config` and checks it.
    pub fn settings(&self, config: &SweepConfig) -> Result<FrameSettings, ZoomConfigError> {
        let settings = FrameSettings {
            bounds: self.bounds.unwrap_or(config.bounds),
            resolution: self.resolution.unwrap_or(config.resolution),
            max_iterations: self.max_iterations.unwrap_or(config.max_iterations),
        };

        validate_plane(settings.resolution, settings.max_iterations)?;

        Ok(settings)
    }

    /// A copy of `base` with this frame's parameters set.
    #[must_use]
    pub fn params(&self, base: &RuleParams) -> RuleParams {
        let mut params = base.clone();

        for (name, &value) in &self.params {
            params.set_named(name.as_str(), value);
        }

        params
    }
}

/// The ordered frames of a sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamSweep {
    frames: Vec<SweepFrame>,
}

impl ParamSweep {
    pub fn new(frames: impl IntoIterator<Item = SweepFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// One frame per value of the rule parameter `name`.
    pub fn named(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<ParamValue>>) -> Self {
        let name = name.into();

        Self::new(
            values
                .into_iter()
                .map(|value| SweepFrame::new().with_param(name.clone(), value)),
        )
    }

    /// `count` evenly spaced real values from `start` to `stop`, both included.
    pub fn linear(name: impl Into<String>, start: f64, stop: f64, count: usize) -> Self {
        let values: Vec<f64> = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (count - 1) as f64;

                (0..count)
                    .map(|i| if i + 1 == count { stop } else { start + i as f64 * step })
                    .collect()
            }
        };

        Self::named(name, values)
    }

    pub fn bounds(values: impl IntoIterator<Item = Bounds>) -> Self {
        Self::new(values.into_iter().map(|bounds| SweepFrame::new().with_bounds(bounds)))
    }

    pub fn resolutions(values: impl IntoIterator<Item = usize>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|resolution| SweepFrame::new().with_resolution(resolution)),
        )
    }

    pub fn max_iterations(values: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|max_iterations| SweepFrame::new().with_max_iterations(max_iterations)),
        )
    }

    /// Merges `other` into this sweep frame by frame, stopping at the shorter one.
    #[must_use]
    pub fn zip(self, other: ParamSweep) -> Self {
        Self::new(
            self.frames
                .into_iter()
                .zip(other.frames)
                .map(|(frame, overrides)| frame.merge(overrides)),
        )
    }

    #[must_use]
    pub fn frames(&self) -> &[SweepFrame] {
        &self.frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
