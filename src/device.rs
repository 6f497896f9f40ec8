//! Terminal-rendering device.
//!
//! The framebuffer talks to the screen through the small [`Device`] trait:
//! query the cell geometry, queue glyph writes, flush once per frame.
//! [`TerminalDevice`] is the crossterm-backed implementation. Activation
//! enters raw mode on the alternate screen with the cursor hidden;
//! deactivation restores the terminal, and `Drop` does the same if the
//! handle is dropped while still active.
//!
//! The terminal is a singleton resource: only one `TerminalDevice` may be
//! active in the process at a time.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{debug, warn};

use crate::fb::{FbError, Result};

/// Contract the framebuffer requires from a rendering target.
///
/// Implementations queue writes; nothing is guaranteed visible until
/// [`flush`](Device::flush) returns.
pub trait Device {
    /// Character-cell geometry as `(rows, cols)`, captured at activation.
    fn size(&self) -> (u16, u16);

    /// Queue one glyph at a character cell. Does not flush.
    fn draw_glyph(&mut self, row: u16, col: u16, glyph: char) -> Result<()>;

    /// Queue a text overlay starting at a character cell. Does not flush.
    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<()>;

    /// Make all queued writes visible.
    fn flush(&mut self) -> Result<()>;
}

/// Set while a `TerminalDevice` is active; the terminal cannot be shared.
static TERMINAL_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Crossterm-backed terminal device.
pub struct TerminalDevice {
    out: Stdout,
    /// `(rows, cols)` at activation time.
    size: (u16, u16),
    active: bool,
}

impl TerminalDevice {
    /// Enter screen-rendering mode and claim the terminal.
    ///
    /// Fails with [`FbError::DeviceUnavailable`] if another device is
    /// already active or the terminal cannot be set up; a partially
    /// completed setup is rolled back before the error returns.
    pub fn activate() -> Result<Self> {
        if TERMINAL_CLAIMED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(FbError::DeviceUnavailable(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "another terminal device is active",
            )));
        }

        let size = match terminal::size() {
            Ok((cols, rows)) => (rows, cols),
            Err(e) => {
                TERMINAL_CLAIMED.store(false, Ordering::SeqCst);
                return Err(FbError::DeviceUnavailable(e));
            }
        };

        if let Err(e) = terminal::enable_raw_mode() {
            TERMINAL_CLAIMED.store(false, Ordering::SeqCst);
            return Err(FbError::DeviceUnavailable(e));
        }

        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            Hide,
            DisableLineWrap,
            Clear(ClearType::All),
            MoveTo(0, 0)
        ) {
            let _ = terminal::disable_raw_mode();
            TERMINAL_CLAIMED.store(false, Ordering::SeqCst);
            return Err(FbError::DeviceUnavailable(e));
        }

        debug!("terminal device active, {} rows x {} cols", size.0, size.1);

        Ok(Self {
            out,
            size,
            active: true,
        })
    }

    /// Leave screen-rendering mode and release the terminal.
    pub fn deactivate(mut self) -> Result<()> {
        self.release()?;
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let restore = execute!(self.out, Show, EnableLineWrap, LeaveAlternateScreen);
        let flushed = self.out.flush();

        // Disable raw mode even if the restore sequence failed
        let raw = terminal::disable_raw_mode();

        TERMINAL_CLAIMED.store(false, Ordering::SeqCst);
        debug!("terminal device released");

        restore.and(flushed).and(raw)
    }
}

impl Device for TerminalDevice {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn draw_glyph(&mut self, row: u16, col: u16, glyph: char) -> Result<()> {
        queue!(self.out, MoveTo(col, row), Print(glyph))?;
        Ok(())
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<()> {
        queue!(self.out, MoveTo(col, row), Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalDevice {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.release() {
                warn!("failed to restore terminal on drop: {}", e);
            }
        }
    }
}
