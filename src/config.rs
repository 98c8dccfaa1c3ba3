//! Environment configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "text_prompt=debug";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Destination for `tracing` output. Logging stays off when unset so the prompt line is
    /// never interleaved with log text.
    pub debug_log: Option<PathBuf>,
    /// `EnvFilter` directive for the debug log.
    pub log_filter: String,
    /// Raw copy of every byte written to the terminal.
    pub write_log: Option<PathBuf>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug_log: env_string_opt("TEXT_PROMPT_DEBUG_LOG").map(PathBuf::from),
            log_filter: env_string_opt("TEXT_PROMPT_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            write_log: env_string_opt("TEXT_PROMPT_WRITE_LOG").map(PathBuf::from),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
