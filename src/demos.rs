//! Demo patterns for the framebuffer.
//!
//! Sample consumers of the framebuffer API: full-screen fills, borders, an
//! FPS stress loop, and animated rectangles. The rectangle helpers clamp to
//! the pixel grid so animations can start or end partially off-screen; the
//! core API itself never clamps.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Config;
use crate::device::Device;
use crate::fb::mono::MonoFb;
use crate::fb::Result;

/// One named demo with its run function.
pub struct Demo {
    pub name: &'static str,
    pub run: fn(&mut MonoFb, &Config) -> Result<()>,
    /// Pause for `hold_ms` after the demo finishes.
    pub hold: bool,
}

/// Demo registry, in run order.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "Pure white",
        run: pure_white,
        hold: true,
    },
    Demo {
        name: "Screen borders",
        run: screen_borders,
        hold: true,
    },
    Demo {
        name: "FPS stress",
        run: fps_stress,
        hold: true,
    },
    Demo {
        name: "Rectangles",
        run: growing_rects,
        hold: false,
    },
    Demo {
        name: "Filled rectangles",
        run: growing_filled_rects,
        hold: false,
    },
    Demo {
        name: "Centered rectangles",
        run: centered_rects,
        hold: false,
    },
    Demo {
        name: "Centered filled rectangles",
        run: centered_filled_rects,
        hold: false,
    },
];

/// Outline a rectangle, skipping pixels outside the grid.
pub fn draw_rect<D: Device>(fb: &mut MonoFb<D>, row: isize, col: isize, w: isize, h: isize) {
    let (width, height) = fb.dimensions();
    let in_grid = |y: isize, x: isize| {
        y >= 0 && x >= 0 && (y as usize) < height && (x as usize) < width
    };

    for y in row..row + h {
        if y < 0 || y as usize >= height {
            continue;
        }
        if y == row || y == row + h - 1 {
            for x in col..col + w {
                if in_grid(y, x) {
                    let _ = fb.set_pixel(y as usize, x as usize, true);
                }
            }
        } else {
            if in_grid(y, col) {
                let _ = fb.set_pixel(y as usize, col as usize, true);
            }
            if in_grid(y, col + w - 1) {
                let _ = fb.set_pixel(y as usize, (col + w - 1) as usize, true);
            }
        }
    }
}

/// Fill a rectangle, skipping pixels outside the grid.
pub fn draw_filled_rect<D: Device>(fb: &mut MonoFb<D>, row: isize, col: isize, w: isize, h: isize) {
    let (width, height) = fb.dimensions();

    for y in row..row + h {
        if y < 0 || y as usize >= height {
            continue;
        }
        for x in col..col + w {
            if x < 0 || x as usize >= width {
                continue;
            }
            let _ = fb.set_pixel(y as usize, x as usize, true);
        }
    }
}

/// Fill every pixel and show one frame.
fn pure_white(fb: &mut MonoFb, _config: &Config) -> Result<()> {
    let (width, height) = fb.dimensions();
    for y in 0..height {
        for x in 0..width {
            fb.set_pixel(y, x, true)?;
        }
    }
    fb.refresh()
}

/// One-pixel border around the whole grid.
fn screen_borders(fb: &mut MonoFb, _config: &Config) -> Result<()> {
    let (width, height) = fb.dimensions();
    draw_rect(fb, 0, 0, width as isize, height as isize);
    fb.refresh()
}

/// 200 full-screen checkerboard frames with an FPS overlay.
fn fps_stress(fb: &mut MonoFb, _config: &Config) -> Result<()> {
    let (width, height) = fb.dimensions();

    for frame in 0..200usize {
        let start = Instant::now();

        for y in 0..height {
            for x in 0..width {
                fb.set_pixel(y, x, (x + y + frame) % 2 == 0)?;
            }
        }
        fb.refresh()?;

        let ms = start.elapsed().as_secs_f64() * 1000.0;
        let fps = if ms > 0.0 { 1000.0 / ms } else { f64::INFINITY };
        fb.status_line(0, 0, &format!("{:.1} FPS ({:.2} ms, frame {})", fps, ms, frame))?;
    }

    info!("fps stress finished");
    Ok(())
}

/// Grow a rectangle from the origin until it covers the grid.
fn growing_rects(fb: &mut MonoFb, config: &Config) -> Result<()> {
    animate_growth(fb, config, false, false)
}

fn growing_filled_rects(fb: &mut MonoFb, config: &Config) -> Result<()> {
    animate_growth(fb, config, true, false)
}

fn centered_rects(fb: &mut MonoFb, config: &Config) -> Result<()> {
    animate_growth(fb, config, false, true)
}

fn centered_filled_rects(fb: &mut MonoFb, config: &Config) -> Result<()> {
    animate_growth(fb, config, true, true)
}

fn animate_growth(fb: &mut MonoFb, config: &Config, filled: bool, centered: bool) -> Result<()> {
    let (width, height) = fb.dimensions();
    let (width, height) = (width as isize, height as isize);

    let mut w: isize = if centered { 2 } else { 10 };
    let mut h: isize = 1;

    loop {
        if w >= width && h >= height {
            break;
        }
        if w < width {
            w += if centered { 2 } else { 1 };
        }
        if h < height {
            h += 1;
        }

        let (row, col) = if centered {
            ((height - h) / 2, (width - w) / 2)
        } else {
            (0, 0)
        };

        if filled {
            draw_filled_rect(fb, row, col, w, h);
        } else {
            draw_rect(fb, row, col, w, h);
        }

        thread::sleep(Duration::from_millis(config.frame_delay_ms));
        fb.refresh()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;

    fn fb(rows: u16, cols: u16) -> MonoFb<MockDevice> {
        MonoFb::with_device(MockDevice::new(rows, cols)).unwrap()
    }

    #[test]
    fn test_rect_outline() {
        // 4x4 pixel grid
        let mut fb = fb(2, 2);
        draw_rect(&mut fb, 0, 0, 4, 4);

        // Edges set, interior clear
        for i in 0..4 {
            assert!(fb.get_pixel(0, i).unwrap());
            assert!(fb.get_pixel(3, i).unwrap());
            assert!(fb.get_pixel(i, 0).unwrap());
            assert!(fb.get_pixel(i, 3).unwrap());
        }
        assert!(!fb.get_pixel(1, 1).unwrap());
        assert!(!fb.get_pixel(2, 2).unwrap());
    }

    #[test]
    fn test_filled_rect() {
        let mut fb = fb(2, 2);
        draw_filled_rect(&mut fb, 1, 1, 2, 2);

        assert!(fb.get_pixel(1, 1).unwrap());
        assert!(fb.get_pixel(2, 2).unwrap());
        assert!(!fb.get_pixel(0, 0).unwrap());
        assert!(!fb.get_pixel(3, 3).unwrap());
    }

    #[test]
    fn test_rect_clamps_off_screen() {
        let mut fb = fb(2, 2);

        // Partially negative and oversized rectangles must not error
        draw_rect(&mut fb, -2, -2, 10, 10);
        draw_filled_rect(&mut fb, 2, 2, 100, 100);

        assert!(fb.get_pixel(3, 3).unwrap());
        assert!(!fb.get_pixel(1, 1).unwrap());
    }

    #[test]
    fn test_registry_names_unique() {
        let mut names: Vec<&str> = DEMOS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEMOS.len());
    }
}
