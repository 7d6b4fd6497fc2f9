use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at row:{row}, col:{col} outside of {width}x{height} buffer")]
    PixelOutsideBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, row 0 at the top.
#[derive(Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height * 3],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, colour: Colour) -> Result<(), PixelBufferError> {
        if row >= self.height || col >= self.width {
            return Err(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }

        let index = (row * self.width + col) * 3;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
