mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::data::execution_mode::ExecutionMode;
pub use controllers::data::frame::{Frame, FramePlane};
pub use controllers::ports::frame_sink::{FrameSink, SinkError};
pub use controllers::ports::progress_reporter::{NoProgress, ProgressReporter};
pub use controllers::sweep::sweep_config::{FrameSettings, ParamSweep, SweepConfig, SweepFrame};
pub use controllers::sweep::sweep_controller::SweepController;
pub use controllers::zoom::errors::{ZoomConfigError, ZoomError};
pub use controllers::zoom::zoom_config::{NoRegionPolicy, ZoomConfig};
pub use controllers::zoom::zoom_controller::ZoomController;

pub use crate::core::actions::cancellation::{CancelToken, NeverCancel};
pub use crate::core::actions::generate_escape_time::errors::{EscapeTimeError, UpdateRuleError};
pub use crate::core::actions::generate_escape_time::escape_state::ESCAPE_RADIUS;
pub use crate::core::actions::generate_escape_time::generate_escape_time::generate_escape_time;
pub use crate::core::actions::generate_escape_time::generate_escape_time_rayon::generate_escape_time_rayon;
pub use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
pub use crate::core::actions::select_region::errors::SelectRegionError;
pub use crate::core::actions::select_region::scoring::ScoringStrategy;
pub use crate::core::actions::select_region::select_region::{RegionChoice, select_region};
pub use crate::core::actions::select_region::select_region_brute_force::select_region_brute_force;
pub use crate::core::actions::select_region::window_size::{WindowSize, window_size};
pub use crate::core::data::bounds::{Bounds, BoundsError};
pub use crate::core::data::escape_time::{EscapeTime, IterationGrid, ValueGrid};
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::plane::{Orientation, Plane};
pub use crate::core::data::region::Region;
pub use crate::core::data::rule_params::{ParamValue, RuleParams};
pub use crate::core::fractals::burning_ship::BurningShipRule;
pub use crate::core::fractals::fn_rule::FnRule;
pub use crate::core::fractals::fractal_kinds::{FractalKinds, RuleSettings};
pub use crate::core::fractals::julia::JuliaRule;
pub use crate::core::fractals::mandelbar::MandelbarRule;
pub use crate::core::fractals::mandelbrot::MandelbrotRule;
pub use crate::core::fractals::multibrot::MultibrotRule;
pub use crate::core::fractals::ratio_julia::RatioJuliaRule;
pub use crate::core::util::sample_plane::{SamplePlaneError, sample_plane};

pub use presenters::file::ppm::PpmFrameSink;
pub use presenters::progress::log_progress::LogProgress;
pub use presenters::progress::progress_bar::ProgressBar;
