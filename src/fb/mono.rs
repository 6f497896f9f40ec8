//! Monochrome doubled-resolution framebuffer.
//!
//! `MonoFb` owns a [`PixelBuffer`] sized to twice the terminal geometry in
//! both axes and a [`Device`] to render on. Each refresh quantizes every
//! 2×2 pixel block into one quadrant glyph, emits the frame, flushes once,
//! and clears the buffer — callers redraw the full scene every frame.

use tracing::{debug, trace};

use crate::device::{Device, TerminalDevice};
use crate::fb::glyphs::{glyph_for, quantize};
use crate::fb::pixels::PixelBuffer;
use crate::fb::Result;

/// Doubled-resolution monochrome framebuffer.
///
/// The pixel grid is `2 × cols` wide and `2 × rows` tall, captured once at
/// creation; the device is not re-queried afterwards. Exactly one value owns
/// the pixel buffer and the device handle, so the single-buffered render
/// cycle cannot be shared or raced.
pub struct MonoFb<D: Device = TerminalDevice> {
    pixels: PixelBuffer,
    device: D,
}

impl MonoFb<TerminalDevice> {
    /// Activate the terminal and allocate the pixel buffer.
    ///
    /// On any failure nothing stays active: a buffer allocation error drops
    /// the freshly activated device, which restores the terminal.
    pub fn create() -> Result<Self> {
        let device = TerminalDevice::activate()?;
        Self::with_device(device)
    }

    /// Tear down explicitly, surfacing terminal-restore errors.
    ///
    /// Dropping a `MonoFb` performs the same teardown best-effort.
    pub fn destroy(self) -> Result<()> {
        let MonoFb { pixels, device } = self;
        drop(pixels);
        device.deactivate()
    }
}

impl<D: Device> MonoFb<D> {
    /// Build a framebuffer over an already-active device.
    pub fn with_device(device: D) -> Result<Self> {
        let (rows, cols) = device.size();
        // Doubling keeps both axes even, so every 2×2 block the refresh
        // visits is fully in bounds.
        let pixels = PixelBuffer::new(cols as usize * 2, rows as usize * 2)?;

        debug!(
            "mono framebuffer: {}x{} pixels over {}x{} cells",
            pixels.width(),
            pixels.height(),
            cols,
            rows
        );

        Ok(Self { pixels, device })
    }

    /// Write one pixel. Out-of-range coordinates are an error.
    pub fn set_pixel(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.pixels.set(row, col, value)
    }

    /// Read one pixel. Out-of-range coordinates are an error.
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<bool> {
        self.pixels.get(row, col)
    }

    /// Pixel-grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dimensions()
    }

    /// Render the frame and clear the buffer.
    ///
    /// Blocks are visited in row-major order, top-to-bottom then
    /// left-to-right; the glyph for block `(y, x)` lands on terminal cell
    /// `(y/2, x/2)`. Output is flushed once after the last glyph. A device
    /// I/O failure returns immediately and leaves the buffer untouched so
    /// the same frame can be retried.
    pub fn refresh(&mut self) -> Result<()> {
        let (width, height) = self.pixels.dimensions();

        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                let code = quantize(
                    self.pixels.at(y, x),
                    self.pixels.at(y, x + 1),
                    self.pixels.at(y + 1, x),
                    self.pixels.at(y + 1, x + 1),
                );

                self.device
                    .draw_glyph((y / 2) as u16, (x / 2) as u16, glyph_for(code))?;
            }
        }

        self.device.flush()?;
        self.pixels.clear();

        trace!("frame emitted, buffer cleared");
        Ok(())
    }

    /// Overlay a text line on top of the frame and flush.
    ///
    /// Coordinates are terminal cells, not pixels. Meant for harness
    /// status output; the text is overwritten by the next refresh.
    pub fn status_line(&mut self, row: u16, col: u16, text: &str) -> Result<()> {
        self.device.draw_text(row, col, text)?;
        self.device.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;
    use crate::fb::FbError;

    fn fb(rows: u16, cols: u16) -> MonoFb<MockDevice> {
        MonoFb::with_device(MockDevice::new(rows, cols)).unwrap()
    }

    #[test]
    fn test_buffer_doubles_device_geometry() {
        let fb = fb(24, 80);
        assert_eq!(fb.dimensions(), (160, 48));
    }

    #[test]
    fn test_odd_device_geometry_still_even_buffer() {
        let fb = fb(25, 81);
        assert_eq!(fb.dimensions(), (162, 50));
    }

    #[test]
    fn test_set_get_and_bounds() {
        let mut fb = fb(2, 2);
        fb.set_pixel(3, 3, true).unwrap();
        assert!(fb.get_pixel(3, 3).unwrap());
        assert!(matches!(
            fb.set_pixel(4, 0, true),
            Err(FbError::OutOfBounds { row: 4, .. })
        ));
        assert!(fb.get_pixel(0, 4).is_err());
    }

    #[test]
    fn test_refresh_clears_buffer() {
        let mut fb = fb(2, 2);
        for row in 0..4 {
            for col in 0..4 {
                fb.set_pixel(row, col, true).unwrap();
            }
        }

        fb.refresh().unwrap();

        for row in 0..4 {
            for col in 0..4 {
                assert!(!fb.get_pixel(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_block_emission_order() {
        // 2x2 cell terminal -> 4x4 pixels -> four blocks, row-major
        let mut fb = fb(2, 2);
        fb.refresh().unwrap();

        let cells: Vec<(u16, u16)> = fb.device.draws.iter().map(|&(r, c, _)| (r, c)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(fb.device.flushes, 1);
    }

    #[test]
    fn test_quantization_codes() {
        // Top-left pixel of the first block only
        let mut fb = fb(1, 1);
        fb.set_pixel(0, 0, true).unwrap();
        fb.refresh().unwrap();
        assert_eq!(fb.device.draws, vec![(0, 0, '▘')]);

        // All four pixels
        fb.device.draws.clear();
        for row in 0..2 {
            for col in 0..2 {
                fb.set_pixel(row, col, true).unwrap();
            }
        }
        fb.refresh().unwrap();
        assert_eq!(fb.device.draws, vec![(0, 0, '█')]);

        // All clear
        fb.device.draws.clear();
        fb.refresh().unwrap();
        assert_eq!(fb.device.draws, vec![(0, 0, ' ')]);
    }

    #[test]
    fn test_diagonal_scenario() {
        // (0,0) and (1,1) both fall in block (0,0): code 0b1001 -> ▚
        let mut fb = fb(2, 2);
        fb.set_pixel(0, 0, true).unwrap();
        fb.set_pixel(1, 1, true).unwrap();
        fb.refresh().unwrap();

        assert_eq!(
            fb.device.draws,
            vec![(0, 0, '▚'), (0, 1, ' '), (1, 0, ' '), (1, 1, ' ')]
        );

        // Refresh already cleared the frame; next one is all blank
        fb.device.draws.clear();
        fb.refresh().unwrap();
        assert_eq!(
            fb.device.draws,
            vec![(0, 0, ' '), (0, 1, ' '), (1, 0, ' '), (1, 1, ' ')]
        );
    }

    #[test]
    fn test_draw_failure_keeps_frame() {
        let mut fb = fb(2, 2);
        fb.set_pixel(0, 0, true).unwrap();
        fb.device.fail_after_draws = Some(0);

        assert!(matches!(fb.refresh(), Err(FbError::DeviceIo(_))));
        assert!(fb.get_pixel(0, 0).unwrap());

        // Retry after the device recovers succeeds and clears
        fb.device.fail_after_draws = None;
        fb.refresh().unwrap();
        assert!(!fb.get_pixel(0, 0).unwrap());
    }

    #[test]
    fn test_flush_failure_keeps_frame() {
        let mut fb = fb(2, 2);
        fb.set_pixel(2, 3, true).unwrap();
        fb.device.fail_on_flush = true;

        assert!(matches!(fb.refresh(), Err(FbError::DeviceIo(_))));
        assert!(fb.get_pixel(2, 3).unwrap());
    }

    #[test]
    fn test_status_line_passthrough() {
        let mut fb = fb(2, 2);
        fb.status_line(0, 0, "running").unwrap();
        assert_eq!(fb.device.texts, vec![(0, 0, "running".to_string())]);
        assert_eq!(fb.device.flushes, 1);
    }
}
