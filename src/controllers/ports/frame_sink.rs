use crate::controllers::data::frame::Frame;

pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Receives every completed frame of a run, in order.
pub trait FrameSink {
    fn submit(&mut self, frame: &Frame) -> Result<(), SinkError>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn submit(&mut self, frame: &Frame) -> Result<(), SinkError> {
        (**self).submit(frame)
    }
}
