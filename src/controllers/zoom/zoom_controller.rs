use std::time::Instant;

use tracing::{info, warn};

use crate::controllers::data::frame::Frame;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::ports::progress_reporter::ProgressReporter;
use crate::controllers::zoom::errors::ZoomError;
use crate::controllers::zoom::zoom_config::{NoRegionPolicy, ZoomConfig};
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::actions::select_region::errors::SelectRegionError;
use crate::core::actions::select_region::select_region::select_region;
use crate::core::data::bounds::Bounds;
use crate::core::data::plane::Plane;
use crate::core::data::region::Region;
use crate::core::data::rule_params::RuleParams;
use crate::core::util::sample_plane::sample_plane;

/// Drives an auto-zoom: each frame is rendered, handed to the sink, and then
/// scanned for the window the next frame zooms into.
pub struct ZoomController<S: FrameSink, P: ProgressReporter> {
    sink: S,
    progress: P,
}

impl<S: FrameSink, P: ProgressReporter> ZoomController<S, P> {
    pub fn new(sink: S, progress: P) -> Self {
        Self { sink, progress }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.progress)
    }

    /// Runs `config.frame_count` frames and returns the bounds of each.
    pub fn run<R: PointUpdateRule + ?Sized>(
        &mut self,
        config: &ZoomConfig,
        rule: &R,
        params: &RuleParams,
    ) -> Result<Vec<Bounds>, ZoomError> {
        self.run_cancelable(config, rule, params, &NeverCancel)
    }

    pub fn run_cancelable<R: PointUpdateRule + ?Sized, C: CancelToken + ?Sized>(
        &mut self,
        config: &ZoomConfig,
        rule: &R,
        params: &RuleParams,
        cancel: &C,
    ) -> Result<Vec<Bounds>, ZoomError> {
        config.validate()?;

        let total = config.frame_count;
        let start = Instant::now();
        let mut bounds = config.bounds;
        let mut used = Vec::with_capacity(total);

        info!(
            rule = rule.display_name(),
            frames = total,
            resolution = config.resolution,
            max_iterations = config.max_iterations,
            zoom_factor = config.zoom_factor,
            strategy = config.strategy.display_name(),
            mode = config.execution_mode.display_name(),
            "starting zoom"
        );

        for index in 0..total {
            if cancel.is_cancelled() {
                info!(completed = index, "zoom cancelled");
                return Err(ZoomError::Cancelled { completed: index });
            }

            let plane = sample_plane(bounds, config.resolution, config.orientation)?;
            let escape_time =
                config
                    .execution_mode
                    .generate(&plane, config.max_iterations, rule, params)?;
            let frame = Frame::new(index, bounds, escape_time);

            self.sink
                .submit(&frame)
                .map_err(|source| ZoomError::FrameSink { index, source })?;
            used.push(bounds);

            info!(
                frame = index,
                re_min = bounds.re_min(),
                re_max = bounds.re_max(),
                im_min = bounds.im_min(),
                im_max = bounds.im_max(),
                escaped = frame.escape_time().escaped_count(),
                "frame emitted"
            );
            self.progress.report(index + 1, total);

            if index + 1 == total {
                break;
            }

            bounds = match select_region(frame.escape_time().iterations(), config.zoom_factor, config.strategy) {
                Ok(choice) => bounds_of_region(&plane, choice.region)?,
                Err(SelectRegionError::NoRegionFound) if config.no_region_policy == NoRegionPolicy::HoldBounds => {
                    warn!(frame = index, "no interesting region, holding bounds");
                    bounds
                }
                Err(error) => return Err(error.into()),
            };
        }

        info!(frames = used.len(), duration = ?start.elapsed(), "zoom finished");

        Ok(used)
    }
}

/// Bounds spanned by the plane coordinates at the region's two corners.
pub(crate) fn bounds_of_region(plane: &Plane, region: Region) -> Result<Bounds, ZoomError> {
    let (top, left) = region.top_left();
    let (bottom, right) = region.bottom_right();
    let first = *plane.get(top, left).expect("selected region lies inside the plane");
    let second = *plane.get(bottom, right).expect("selected region lies inside the plane");

    Bounds::from_corners(first, second).map_err(ZoomError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::controllers::data::execution_mode::ExecutionMode;
    use crate::controllers::zoom::errors::ZoomConfigError;
    use crate::controllers::ports::frame_sink::SinkError;
    use crate::controllers::ports::progress_reporter::NoProgress;
    use crate::core::actions::generate_escape_time::errors::{EscapeTimeError, UpdateRuleError};
    use crate::core::actions::generate_escape_time::generate_escape_time::generate_escape_time;
    use crate::core::data::plane::Orientation;
    use crate::core::fractals::fn_rule::FnRule;
    use crate::core::fractals::mandelbrot::MandelbrotRule;
    use num_complex::Complex64;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Frame>,
    }

    impl FrameSink for RecordingSink {
        fn submit(&mut self, frame: &Frame) -> Result<(), SinkError> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl FrameSink for FailingSink {
        fn submit(&mut self, _frame: &Frame) -> Result<(), SinkError> {
            Err("disk full".into())
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        reports: Vec<(usize, usize)>,
    }

    impl ProgressReporter for RecordingProgress {
        fn report(&mut self, current: usize, total: usize) {
            self.reports.push((current, total));
        }
    }

    fn config(frame_count: usize) -> ZoomConfig {
        ZoomConfig {
            resolution: 40,
            max_iterations: 30,
            frame_count,
            zoom_factor: 2.0,
            ..ZoomConfig::default()
        }
    }

    #[test]
    fn test_single_frame_is_sampler_plus_engine() {
        // this zoom factor gives an empty window, so any selector call would fail
        let config = ZoomConfig {
            resolution: 5,
            max_iterations: 3,
            frame_count: 1,
            zoom_factor: 100.0,
            ..ZoomConfig::default()
        };
        let mut controller = ZoomController::new(RecordingSink::default(), RecordingProgress::default());

        let used = controller.run(&config, &MandelbrotRule, &RuleParams::new()).unwrap();

        let plane = sample_plane(config.bounds, 5, Orientation::TopDown).unwrap();
        let expected = generate_escape_time(&plane, 3, &MandelbrotRule, &RuleParams::new()).unwrap();
        let (sink, progress) = controller.into_parts();

        assert_eq!(used, vec![config.bounds]);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].escape_time(), &expected);
        assert_eq!(sink.frames[0].bounds(), config.bounds);
        assert_eq!(progress.reports, vec![(1, 1)]);
    }

    #[test]
    fn test_frames_zoom_into_nested_bounds() {
        let mut controller = ZoomController::new(RecordingSink::default(), RecordingProgress::default());

        let used = controller.run(&config(4), &MandelbrotRule, &RuleParams::new()).unwrap();

        assert_eq!(used.len(), 4);

        for pair in used.windows(2) {
            let (outer, inner) = (pair[0], pair[1]);

            assert!(outer.contains_point(Complex64::new(inner.re_min(), inner.im_min())));
            assert!(outer.contains_point(Complex64::new(inner.re_max(), inner.im_max())));
            // a 20-step window of a 39-step axis
            assert!((inner.width() / outer.width() - 20.0 / 39.0).abs() < 1e-9);
            assert!((inner.height() / outer.height() - 20.0 / 39.0).abs() < 1e-9);
        }

        let (sink, progress) = controller.into_parts();
        let indices: Vec<usize> = sink.frames.iter().map(Frame::index).collect();

        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(progress.reports, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_serial_and_parallel_runs_agree() {
        let serial = ZoomConfig {
            execution_mode: ExecutionMode::Serial,
            ..config(3)
        };
        let parallel = ZoomConfig {
            execution_mode: ExecutionMode::Parallel,
            ..config(3)
        };

        let mut first = ZoomController::new(RecordingSink::default(), NoProgress);
        let mut second = ZoomController::new(RecordingSink::default(), NoProgress);

        assert_eq!(
            first.run(&serial, &MandelbrotRule, &RuleParams::new()).unwrap(),
            second.run(&parallel, &MandelbrotRule, &RuleParams::new()).unwrap()
        );
        assert_eq!(first.sink().frames, second.sink().frames);
    }

    #[test]
    fn test_failing_rule_emits_nothing() {
        let failing = FnRule::new("always fails", |_: Complex64, _: Complex64, _: &RuleParams| {
            Err(UpdateRuleError::Domain("unsupported".to_string()))
        });
        let config = ZoomConfig {
            bounds: Bounds::new(-0.5, 0.5, -0.5, 0.5).unwrap(),
            ..config(3)
        };
        let mut controller = ZoomController::new(RecordingSink::default(), RecordingProgress::default());

        let result = controller.run(&config, &failing, &RuleParams::new());

        assert!(matches!(
            result,
            Err(ZoomError::EscapeTime(EscapeTimeError::UpdateRuleFailure {
                row: 0,
                col: 0,
                iteration: 0,
                ..
            }))
        ));

        let (sink, progress) = controller.into_parts();
        assert!(sink.frames.is_empty());
        assert!(progress.reports.is_empty());
    }

    #[test]
    fn test_uniform_frame_fails_by_default() {
        // far outside the set every cell escapes at iteration 0
        let config = ZoomConfig {
            bounds: Bounds::new(10.0, 12.0, 10.0, 12.0).unwrap(),
            ..config(3)
        };
        let mut controller = ZoomController::new(RecordingSink::default(), NoProgress);

        let result = controller.run(&config, &MandelbrotRule, &RuleParams::new());

        assert!(matches!(
            result,
            Err(ZoomError::SelectRegion(SelectRegionError::NoRegionFound))
        ));
        assert_eq!(controller.sink().frames.len(), 1);
    }

    #[test]
    fn test_uniform_frame_holds_bounds_when_asked() {
        let config = ZoomConfig {
            bounds: Bounds::new(10.0, 12.0, 10.0, 12.0).unwrap(),
            no_region_policy: NoRegionPolicy::HoldBounds,
            ..config(3)
        };
        let mut controller = ZoomController::new(RecordingSink::default(), NoProgress);

        let used = controller.run(&config, &MandelbrotRule, &RuleParams::new()).unwrap();

        assert_eq!(used, vec![config.bounds; 3]);
    }

    #[test]
    fn test_cancel_stops_before_next_frame() {
        let checks = AtomicUsize::new(0);
        let cancel = || checks.fetch_add(1, Ordering::Relaxed) >= 2;
        let mut controller = ZoomController::new(RecordingSink::default(), NoProgress);

        let result = controller.run_cancelable(&config(5), &MandelbrotRule, &RuleParams::new(), &cancel);

        assert!(matches!(result, Err(ZoomError::Cancelled { completed: 2 })));
        assert_eq!(controller.sink().frames.len(), 2);
    }

    #[test]
    fn test_sink_failure_is_reported_with_frame_index() {
        let mut controller = ZoomController::new(FailingSink, NoProgress);

        let result = controller.run(&config(2), &MandelbrotRule, &RuleParams::new());

        assert!(matches!(result, Err(ZoomError::FrameSink { index: 0, .. })));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_rendering() {
        let mut controller = ZoomController::new(RecordingSink::default(), NoProgress);

        let result = controller.run(&config(0), &MandelbrotRule, &RuleParams::new());

        assert!(matches!(result, Err(ZoomError::Config(_))));
        assert!(controller.sink().frames.is_empty());
    }

    #[test]
    fn test_window_larger_than_grid_emits_no_frame() {
        let config = ZoomConfig {
            resolution: 2,
            zoom_factor: 1.2,
            ..config(3)
        };
        let mut controller = ZoomController::new(RecordingSink::default(), RecordingProgress::default());

        let result = controller.run(&config, &MandelbrotRule, &RuleParams::new());

        assert!(matches!(
            result,
            Err(ZoomError::Config(ZoomConfigError::InvalidZoomFactor(_)))
        ));

        let (sink, progress) = controller.into_parts();
        assert!(sink.frames.is_empty());
        assert!(progress.reports.is_empty());
    }

    #[test]
    fn test_bottom_up_frames_zoom_into_nested_bounds() {
        let config = ZoomConfig {
            orientation: Orientation::BottomUp,
            ..config(3)
        };
        let mut controller = ZoomController::new(RecordingSink::default(), NoProgress);

        let used = controller.run(&config, &MandelbrotRule, &RuleParams::new()).unwrap();

        assert_eq!(used.len(), 3);

        for pair in used.windows(2) {
            let (outer, inner) = (pair[0], pair[1]);

            assert!(outer.contains_point(Complex64::new(inner.re_min(), inner.im_min())));
            assert!(outer.contains_point(Complex64::new(inner.re_max(), inner.im_max())));
            assert!((inner.height() / outer.height() - 20.0 / 39.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bounds_of_region_in_bottom_up_plane() {
        let bounds = Bounds::new(0.0, 4.0, 0.0, 4.0).unwrap();
        let plane = sample_plane(bounds, 5, Orientation::BottomUp).unwrap();

        let next = bounds_of_region(&plane, Region::at(1, 2, 2, 2)).unwrap();

        // row 1 sits at im 1 and row 3 at im 3 when row 0 is im_min
        assert_eq!(next, Bounds::new(2.0, 4.0, 1.0, 3.0).unwrap());
    }

    #[test]
    fn test_bounds_of_region_uses_corner_coordinates() {
        let bounds = Bounds::new(0.0, 4.0, 0.0, 4.0).unwrap();
        let plane = sample_plane(bounds, 5, Orientation::TopDown).unwrap();

        let next = bounds_of_region(&plane, Region::at(1, 2, 2, 2)).unwrap();

        // row 1 sits at im 3 and row 3 at im 1 in a top-down plane
        assert_eq!(next, Bounds::new(2.0, 4.0, 1.0, 3.0).unwrap());
    }
}
