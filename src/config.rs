//! Run configuration
//!
//! Collects the knobs that shape one run (status preset, shuffling, seed,
//! logging) from parsed CLI arguments, and sets up tracing.

use crate::types::StudentStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a fixed shuffle seed
pub const SEED_ENV: &str = "DEGREEFIT_SEED";

/// Options for an interactive survey run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Status preselected on the welcome screen
    pub status: Option<StudentStatus>,
    /// Randomize program and statement order
    pub shuffle: bool,
    /// Fixed seed for reproducible ordering
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            status: None,
            shuffle: true,
            seed: None,
        }
    }
}

impl RunOptions {
    /// Random source for question ordering
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!(seed, "Using fixed shuffle seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file (safe while the TUI owns the terminal)
    File(PathBuf),
    /// Standard error (headless commands)
    Stderr,
    /// Discard everything
    Off,
}

impl LogTarget {
    /// Pick a target: an explicit file wins, the TUI otherwise stays silent
    pub fn choose(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Default filter directive for a `-v` count
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the verbosity.
pub fn init_tracing(target: &LogTarget, verbosity: u8) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match target {
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Off => builder.with_writer(std::io::sink).try_init(),
    };

    // A subscriber may already be installed (tests); keep the existing one
    if let Err(e) = result {
        debug!("Tracing already initialized: {}", e);
    }
    Ok(())
}
