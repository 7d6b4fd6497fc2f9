use std::path::{Path, PathBuf};

use crate::controllers::data::frame::{Frame, FramePlane};
use crate::controllers::ports::frame_sink::{FrameSink, SinkError};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::presenters::file::fire_gradient::fire_gradient;
use crate::storage::write_ppm::write_ppm;

/// Writes every frame as `<prefix>_<index>.ppm` into a directory.
#[derive(Debug)]
pub struct PpmFrameSink {
    directory: PathBuf,
    prefix: String,
    plane: FramePlane,
    written: Vec<PathBuf>,
}

impl PpmFrameSink {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>, plane: FramePlane) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            plane,
            written: Vec::new(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    #[must_use]
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.directory.join(format!("{}_{:04}.ppm", self.prefix, index))
    }

    /// Colours the chosen grid of `frame`. In iteration mode cells that never
    /// escaped are black; magnitudes are scaled between their finite extremes.
    pub fn render(&self, frame: &Frame) -> Result<PixelBuffer, PixelBufferError> {
        let values = frame.plane_values(self.plane);
        let (rows, cols) = values.shape();
        let mut buffer = PixelBuffer::new(cols, rows);

        let colour_of: Box<dyn Fn(f64) -> Colour> = match self.plane {
            FramePlane::Iterations => {
                let max = f64::from(frame.escape_time().max_iterations());

                Box::new(move |value| {
                    if value >= max {
                        Colour::BLACK
                    } else {
                        fire_gradient(value / max)
                    }
                })
            }
            FramePlane::Magnitudes => {
                let (low, high) = finite_extent(values.cells());
                let span = high - low;

                Box::new(move |value| {
                    if !value.is_finite() || span <= 0.0 {
                        Colour::BLACK
                    } else {
                        fire_gradient((value - low) / span)
                    }
                })
            }
        };

        for row in 0..rows {
            for (col, &value) in values.row(row).iter().enumerate() {
                buffer.set_pixel(row, col, colour_of(value))?;
            }
        }

        Ok(buffer)
    }
}

fn finite_extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
            (low.min(value), high.max(value))
        })
}

impl FrameSink for PpmFrameSink {
    fn submit(&mut self, frame: &Frame) -> Result<(), SinkError> {
        std::fs::create_dir_all(&self.directory)?;

        let buffer = self.render(frame)?;
        let path = self.frame_path(frame.index());

        write_ppm(&buffer, &path)?;
        tracing::debug!(path = %path.display(), "frame written");
        self.written.push(path);

        Ok(())
    }
}
