//! termpix — monochrome doubled-resolution framebuffer for terminals
//!
//! termpix treats the terminal as a pixel display: each character cell
//! carries a 2×2 block of boolean pixels rendered as a single Unicode
//! quadrant glyph, doubling the addressable resolution in both axes.
//!
//! # Quick start
//!
//! ```no_run
//! use termpix::fb::mono::MonoFb;
//!
//! let mut fb = MonoFb::create()?;
//! let (width, height) = fb.dimensions();
//!
//! loop {
//!     // Redraw the full scene; refresh erases the frame afterwards
//!     for x in 0..width {
//!         fb.set_pixel(height / 2, x, true)?;
//!     }
//!     fb.refresh()?;
//!     # break;
//! }
//!
//! fb.destroy()?;
//! # Ok::<(), termpix::fb::FbError>(())
//! ```
//!
//! # Rendering model
//!
//! Single-buffered, overwrite-then-clear: every `refresh` quantizes the
//! grid, emits one glyph per cell in row-major block order, flushes once,
//! and clears all pixels. Callers redraw the whole scene each frame.

pub mod config;
pub mod demos;
pub mod device;
pub mod fb;

pub use config::Config;
pub use device::{Device, TerminalDevice};
pub use fb::mono::MonoFb;
pub use fb::{FbError, FbKind, Framebuffer, PixelBuffer, Result};
