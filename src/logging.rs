//! Diagnostics setup.
//!
//! The interactive session owns the terminal, so its diagnostics go to a
//! log file under the data directory. One-shot subcommands log to stderr.
//! `RUST_LOG` selects the filter; the default is `info`.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config;

pub fn init(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        // Without a resolvable home there is nowhere to log; run silent.
        let Some(path) = config::log_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
