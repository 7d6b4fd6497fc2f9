use thiserror::Error;

use crate::controllers::ports::frame_sink::SinkError;
use crate::core::actions::generate_escape_time::errors::EscapeTimeError;
use crate::core::actions::select_region::errors::SelectRegionError;
use crate::core::data::bounds::BoundsError;
use crate::core::util::sample_plane::SamplePlaneError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoomConfigError {
    #[error("resolution must be at least 2, got {0}")]
    InvalidResolution(usize),
    #[error("maximum iterations must be greater than zero")]
    InvalidIterationBudget,
    #[error("a run needs at least one frame")]
    InvalidFrameCount,
    #[error("zoom factor must be finite and greater than 1, got {0}")]
    InvalidZoomFactor(f64),
}

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ZoomConfigError),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    SamplePlane(#[from] SamplePlaneError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
    #[error(transparent)]
    SelectRegion(#[from] SelectRegionError),
    #[error("frame {index} was rejected by the frame sink")]
    FrameSink {
        index: usize,
        #[source]
        source: SinkError,
    },
    #[error("run cancelled after {completed} frame(s)")]
    Cancelled { completed: usize },
}
