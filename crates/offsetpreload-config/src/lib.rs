//! # offsetpreload-config
//!
//! Environment-driven configuration for the offsetpreload shim.
//!
//! The shim resolves configuration exactly once per process, at its first
//! intercepted open. Resolution is deliberately permissive: the consumer
//! program has no channel to receive configuration errors, so a missing
//! target path disables interception entirely and an unparseable offset
//! resolves to zero. The typed [`parse_offset`] error exists for host-side
//! tooling that wants to validate an environment before launching.

use std::ffi::{CString, OsString};

pub mod logging;
pub mod testing;

/// Path of the single file whose positional I/O gets offset-adjusted.
/// Absence disables interception for the whole process.
pub const FILE_ENV: &str = "OFFSETPRELOAD_FILE";

/// Base-10 signed byte offset added to positional I/O on the target file.
/// Absence or parse failure resolves to 0.
pub const OFFSET_ENV: &str = "OFFSETPRELOAD_OFFSET";

/// Non-empty and not `"0"` enables shim diagnostics on stderr.
pub const DEBUG_ENV: &str = "OFFSETPRELOAD_DEBUG";

#[derive(Debug, thiserror::Error)]
pub enum OffsetParseError {
    #[error("not a base-10 integer: {0:?}")]
    NotNumeric(String),
}

/// Snapshot of the interception environment, immutable once taken.
#[derive(Debug, Clone, Default)]
pub struct PreloadConfig {
    /// Target path, kept as the exact bytes the consumer will pass to open.
    /// Path comparison is byte equality with no normalization.
    pub target: Option<CString>,
    /// Byte offset added to every positional read/write on the tracked
    /// descriptor.
    pub offset: i64,
    /// Diagnostics gate for the shim's stderr logging.
    pub debug: bool,
}

impl PreloadConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolve from an arbitrary lookup, letting tests inject an environment
    /// without touching process globals.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        use std::os::unix::ffi::OsStringExt;

        // Environment values cannot contain NUL, so CString::new only fails
        // on a hand-rolled lookup; treat that as absent.
        let target = lookup(FILE_ENV).and_then(|v| CString::new(v.into_vec()).ok());
        if target.is_none() {
            crate::log_config_debug!("target path unset, interception disabled");
        }

        let offset = lookup(OFFSET_ENV).map_or(0, |v| {
            match parse_offset(&v.to_string_lossy()) {
                Ok(n) => n,
                Err(err) => {
                    crate::log_config_warn!("ignoring unparseable offset", error = err.to_string().as_str());
                    0
                }
            }
        });

        let debug = lookup(DEBUG_ENV).map_or(false, |v| !v.is_empty() && v != "0");

        Self {
            target,
            offset,
            debug,
        }
    }

    /// Whether any interception will happen at all.
    pub fn enabled(&self) -> bool {
        self.target.is_some()
    }
}

/// Strict base-10 parse of an offset value. Leading/trailing whitespace is
/// tolerated; anything else is an error the shim downgrades to 0.
pub fn parse_offset(raw: &str) -> Result<i64, OffsetParseError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| OffsetParseError::NotNumeric(raw.to_string()))
}
