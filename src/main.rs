//! termpix demo harness
//!
//! Runs the demo patterns from [`termpix::demos`] on the live terminal.
//! With no arguments every demo runs in order after a short notice; pass
//! 1-based demo numbers to run a selection.

use std::env;
use std::thread;
use std::time::Duration;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use termpix::config::{data_dir, Config};
use termpix::demos::DEMOS;
use termpix::fb::{FbKind, Framebuffer};
use termpix::MonoFb;

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termpix {}", VERSION);
}

fn print_help() {
    eprintln!("termpix {} - terminal pixel framebuffer demos", VERSION);
    eprintln!();
    eprintln!("Usage: termpix [OPTIONS] [DEMO...]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  DEMO                  1-based demo number (repeatable)");
    eprintln!("  (none)                Run every demo in order");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --list            List available demos");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Configuration: ~/.termpix/config.toml");
    eprintln!("Log file:      ~/.termpix/termpix.log");
}

fn print_demo_list() {
    eprintln!("Available demos:");
    for (i, demo) in DEMOS.iter().enumerate() {
        eprintln!("  {}) {}", i + 1, demo.name);
    }
    eprintln!();
    eprintln!("Run one with: termpix <number>");
}

/// Demo numbers to run, empty meaning the full suite.
fn parse_args() -> Result<Vec<usize>, String> {
    let args: Vec<String> = env::args().collect();
    let mut selection = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-l" | "--list" => {
                print_demo_list();
                std::process::exit(0);
            }
            arg => {
                let number: usize = arg
                    .parse()
                    .map_err(|_| format!("Unknown argument: {}. Use -h for help.", arg))?;
                if number == 0 || number > DEMOS.len() {
                    return Err(format!(
                        "Invalid demo number: {} (of {} available)",
                        number,
                        DEMOS.len()
                    ));
                }
                selection.push(number - 1);
            }
        }
    }

    Ok(selection)
}

fn init_logging() {
    let log_path = data_dir()
        .map(|dir| dir.join("termpix.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("termpix.log"));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let selection = match parse_args() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("termpix {} starting", VERSION);

    let config = Config::load();

    let Framebuffer::MonoDoubled(mut fb) = Framebuffer::create(FbKind::MonoDoubled)?;
    let (width, height) = fb.dimensions();
    info!("framebuffer ready: {}x{} pixels", width, height);

    let result = if selection.is_empty() {
        run_all(&mut fb, &config)
    } else {
        run_selection(&mut fb, &config, &selection)
    };

    // Restore the terminal before reporting any demo failure
    fb.destroy()?;

    if let Err(e) = result {
        error!("demo run failed: {}", e);
        return Err(e.into());
    }

    eprintln!("All demos done!");
    Ok(())
}

fn run_all(fb: &mut MonoFb, config: &Config) -> termpix::Result<()> {
    fb.status_line(
        0,
        0,
        "WARNING: Running the full demo suite, this takes a while...",
    )?;
    fb.status_line(1, 0, "Run a single demo with: termpix <number>")?;
    fb.status_line(2, 0, "List demos with: termpix --list")?;
    thread::sleep(Duration::from_secs(config.intro_secs));

    for index in 0..DEMOS.len() {
        run_demo(fb, config, index)?;
    }
    Ok(())
}

fn run_selection(fb: &mut MonoFb, config: &Config, selection: &[usize]) -> termpix::Result<()> {
    for &index in selection {
        run_demo(fb, config, index)?;
    }
    Ok(())
}

fn run_demo(fb: &mut MonoFb, config: &Config, index: usize) -> termpix::Result<()> {
    let demo = &DEMOS[index];
    info!("running demo #{}: {}", index + 1, demo.name);

    // Blank frame, then announce the demo
    fb.refresh()?;
    fb.status_line(0, 0, &format!("Running demo #{}: {}", index + 1, demo.name))?;
    thread::sleep(Duration::from_secs(1));

    (demo.run)(fb, config)?;

    if demo.hold {
        thread::sleep(Duration::from_millis(config.hold_ms));
    }
    Ok(())
}
