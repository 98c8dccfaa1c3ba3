//! Platform-specific terminal integrations.

pub mod raw_mode;
#[cfg(unix)]
pub mod stdin;

#[cfg(unix)]
pub use raw_mode::RawModeGuard;
#[cfg(unix)]
pub use stdin::PolledStdin;
