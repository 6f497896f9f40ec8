//! Owned 2-D boolean pixel grid.
//!
//! `PixelBuffer` stores the virtual pixels as a flat row-major `Vec<bool>`
//! with dimensions fixed at creation. All public access is bounds checked;
//! an out-of-range coordinate is an error, never a clamp.

use tracing::trace;

use crate::fb::{FbError, Result};

/// Dynamically sized monochrome pixel grid.
///
/// Coordinates are `(row, col)` with the origin at the top-left. The cell
/// vector always holds exactly `width * height` entries.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PixelBuffer {
    /// Allocate a zero-initialized buffer.
    ///
    /// Fails with [`FbError::Alloc`] if the cell count overflows or the
    /// allocation cannot be obtained.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(FbError::Alloc { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| FbError::Alloc { width, height })?;
        cells.resize(len, false);

        trace!("allocated pixel buffer {}x{}", width, height);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Read the pixel at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Write the pixel at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Reset every pixel to `false`.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Buffer dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Unchecked-by-contract read for the refresh loop, which only visits
    /// coordinates the block iteration already proved in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(FbError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }
}
