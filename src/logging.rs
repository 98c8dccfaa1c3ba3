//! Debug logging sink.
//!
//! The prompt shares the terminal with its host, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::EnvConfig;
use crate::error::Result;

/// Install a file-backed `tracing` subscriber when `TEXT_PROMPT_DEBUG_LOG` is set.
///
/// Returns `Ok(false)` when logging is disabled or a global subscriber already exists.
pub fn init_from_env(config: &EnvConfig) -> Result<bool> {
    let Some(path) = config.debug_log.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let installed = fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}
