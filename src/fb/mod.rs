//! Framebuffer core.
//!
//! This module contains the pixel grid and the quantization engine:
//!
//! - **pixels**: owned 2-D boolean grid with bounds-checked access
//! - **glyphs**: fixed 4-bit code → quadrant glyph table
//! - **mono**: doubled-resolution framebuffer (sizing, refresh, lifecycle)
//!
//! # Architecture
//!
//! ```text
//! Framebuffer (kind dispatch)
//! └── MonoFb
//!     ├── PixelBuffer (2·cols × 2·rows booleans)
//!     └── Device (terminal session: draw glyph, flush)
//! ```

pub mod glyphs;
pub mod mono;
pub mod pixels;

use std::io;

use thiserror::Error;

use crate::fb::mono::MonoFb;

pub use glyphs::{glyph_for, quantize, QUAD_GLYPHS};
pub use pixels::PixelBuffer;

#[derive(Error, Debug)]
pub enum FbError {
    #[error("failed to allocate {width}x{height} pixel buffer")]
    Alloc { width: usize, height: usize },

    #[error("pixel ({row}, {col}) outside {width}x{height} buffer")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("terminal device unavailable: {0}")]
    DeviceUnavailable(#[source] io::Error),

    #[error("terminal I/O failed: {0}")]
    DeviceIo(#[from] io::Error),

    #[error("framebuffer kind not supported yet: {0:?}")]
    Unsupported(FbKind),
}

pub type Result<T> = std::result::Result<T, FbError>;

/// The closed set of framebuffer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FbKind {
    /// Monochrome pixels at doubled resolution via quadrant glyphs.
    MonoDoubled,
    /// Color-per-cell ASCII framebuffer. Declared upstream but never
    /// implemented; selecting it is an error.
    Symbol,
}

/// Tagged dispatch over the framebuffer kinds.
///
/// Replaces an untyped handle + type tag with a sum type; every operation
/// matches on the variant.
pub enum Framebuffer {
    MonoDoubled(MonoFb),
}

impl Framebuffer {
    /// Create a framebuffer of the requested kind on the live terminal.
    pub fn create(kind: FbKind) -> Result<Self> {
        match kind {
            FbKind::MonoDoubled => Ok(Self::MonoDoubled(MonoFb::create()?)),
            FbKind::Symbol => Err(FbError::Unsupported(FbKind::Symbol)),
        }
    }

    pub fn kind(&self) -> FbKind {
        match self {
            Self::MonoDoubled(_) => FbKind::MonoDoubled,
        }
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        match self {
            Self::MonoDoubled(fb) => fb.set_pixel(row, col, value),
        }
    }

    pub fn get_pixel(&self, row: usize, col: usize) -> Result<bool> {
        match self {
            Self::MonoDoubled(fb) => fb.get_pixel(row, col),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::MonoDoubled(fb) => fb.dimensions(),
        }
    }

    pub fn refresh(&mut self) -> Result<()> {
        match self {
            Self::MonoDoubled(fb) => fb.refresh(),
        }
    }

    /// Tear down and restore the terminal.
    pub fn destroy(self) -> Result<()> {
        match self {
            Self::MonoDoubled(fb) => fb.destroy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_kind_rejected() {
        assert!(matches!(
            Framebuffer::create(FbKind::Symbol),
            Err(FbError::Unsupported(FbKind::Symbol))
        ));
    }
}
