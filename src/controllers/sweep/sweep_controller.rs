use std::time::Instant;

use tracing::info;

use crate::controllers::data::frame::Frame;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::ports::progress_reporter::ProgressReporter;
use crate::controllers::sweep::sweep_config::{FrameSettings, ParamSweep, SweepConfig};
use crate::controllers::zoom::errors::{ZoomConfigError, ZoomError};
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::bounds::Bounds;
use crate::core::data::plane::Plane;
use crate::core::data::rule_params::RuleParams;
use crate::core::util::sample_plane::sample_plane;

/// Renders one frame per [`SweepFrame`], each with its own view and rule arguments.
pub struct SweepController<S: FrameSink, P: ProgressReporter> {
    sink: S,
    progress: P,
}

impl<S: FrameSink, P: ProgressReporter> SweepController<S, P> {
    pub fn new(sink: S, progress: P) -> Self {
        Self { sink, progress }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.progress)
    }

    /// Emits one frame per entry of `sweep`, returning how many were emitted.
    pub fn run<R: PointUpdateRule + ?Sized>(
        &mut self,
        config: &SweepConfig,
        rule: &R,
        base_params: &RuleParams,
        sweep: &ParamSweep,
    ) -> Result<usize, ZoomError> {
        self.run_cancelable(config, rule, base_params, sweep, &NeverCancel)
    }

    /// Every frame's settings are checked before the first one is rendered.
    pub fn run_cancelable<R: PointUpdateRule + ?Sized, C: CancelToken + ?Sized>(
        &mut self,
        config: &SweepConfig,
        rule: &R,
        base_params: &RuleParams,
        sweep: &ParamSweep,
        cancel: &C,
    ) -> Result<usize, ZoomError> {
        config.validate()?;

        if sweep.is_empty() {
            return Err(ZoomConfigError::InvalidFrameCount.into());
        }

        let settings = sweep
            .frames()
            .iter()
            .map(|frame| frame.settings(config))
            .collect::<Result<Vec<FrameSettings>, _>>()?;

        let total = settings.len();
        let start = Instant::now();
        let mut cached: Option<(Bounds, usize, Plane)> = None;

        info!(rule = rule.display_name(), frames = total, "starting sweep");

        for (index, (frame, view)) in sweep.frames().iter().zip(&settings).enumerate() {
            if cancel.is_cancelled() {
                info!(completed = index, "sweep cancelled");
                return Err(ZoomError::Cancelled { completed: index });
            }

            // consecutive frames over the same view share one sampled plane
            let (bounds, resolution, plane) = match cached.take() {
                Some((bounds, resolution, plane)) if bounds == view.bounds && resolution == view.resolution => {
                    (bounds, resolution, plane)
                }
                _ => (
                    view.bounds,
                    view.resolution,
                    sample_plane(view.bounds, view.resolution, config.orientation)?,
                ),
            };

            let params = frame.params(base_params);
            let escape_time = config
                .execution_mode
                .generate(&plane, view.max_iterations, rule, &params)?;
            cached = Some((bounds, resolution, plane));
            let frame = Frame::new(index, view.bounds, escape_time);

            self.sink
                .submit(&frame)
                .map_err(|source| ZoomError::FrameSink { index, source })?;

            info!(
                frame = index,
                resolution = view.resolution,
                max_iterations = view.max_iterations,
                escaped = frame.escape_time().escaped_count(),
                "frame emitted"
            );
            self.progress.report(index + 1, total);
        }

        info!(frames = total, duration = ?start.elapsed(), "sweep finished");

        Ok(total)
    }
}
