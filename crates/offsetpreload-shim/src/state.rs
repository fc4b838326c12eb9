//! Process-wide shim state: resolved configuration plus the single-slot
//! descriptor tracker.
//!
//! The state object is constructed once, on the first intercepted open, and
//! lives until process exit. Before that first open the tracker is in its
//! "unresolved" state, represented by [`ShimState::get`] returning `None`:
//! the positional I/O wrappers never trigger resolution themselves, they
//! just pass through.
//!
//! The tracker remembers at most one descriptor — the most recently opened
//! one whose path equalled the target byte-for-byte. A later matching open
//! (dup-open, remount) replaces the slot unconditionally, and closing the
//! target does not clear it. Configuration is write-once; the tracked slot
//! is an atomic scalar, which keeps concurrent consumers free of torn reads
//! without changing single-threaded behavior.

use libc::{c_char, c_int, off64_t};
use offsetpreload_config::PreloadConfig;
use once_cell::sync::OnceCell;
use std::ffi::CStr;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// Tracker value while no descriptor corresponds to the target path.
pub const FD_UNSET: c_int = -2;

/// Gate for `shim_debug!`, mirrored out of the config at resolution time so
/// the logging macro never touches the state singleton.
pub static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static STATE: OnceCell<ShimState> = OnceCell::new();

pub struct ShimState {
    config: PreloadConfig,
    tracked_fd: AtomicI32,
}

impl ShimState {
    /// Resolve configuration if this is the first intercepted open, then
    /// return the state. Idempotent; only the open wrappers call this.
    pub fn get_or_init() -> &'static ShimState {
        STATE.get_or_init(|| {
            let config = PreloadConfig::from_env();
            DEBUG_ENABLED.store(config.debug, Ordering::Relaxed);
            shim_debug!(
                "config resolved: target={:?} offset={}",
                config.target,
                config.offset
            );
            ShimState {
                config,
                tracked_fd: AtomicI32::new(FD_UNSET),
            }
        })
    }

    /// Peek without resolving; `None` until the first open.
    pub fn get() -> Option<&'static ShimState> {
        STATE.get()
    }

    /// Path matcher: called on every intercepted open with the requested
    /// path and the descriptor the real open returned. Exact byte equality,
    /// no normalization; a match replaces any previously tracked descriptor.
    pub fn note_open(&self, path: *const c_char, fd: c_int) {
        if fd < 0 || path.is_null() {
            return;
        }
        let target = match self.config.target.as_deref() {
            Some(t) => t,
            None => return,
        };
        let opened = unsafe { CStr::from_ptr(path) };
        if opened.to_bytes() == target.to_bytes() {
            self.tracked_fd.store(fd, Ordering::Release);
            shim_debug!("tracking fd {} for target path", fd);
        }
    }

    /// Offset a positional I/O request: requested plus the configured offset
    /// iff `fd` is the tracked descriptor, untouched otherwise. Invalid
    /// results (e.g. negative) are left for the delegate's own validation.
    pub fn effective_offset(&self, fd: c_int, requested: off64_t) -> off64_t {
        adjust(
            self.tracked_fd.load(Ordering::Acquire),
            fd,
            self.config.offset,
            requested,
        )
    }

    /// Currently tracked descriptor, [`FD_UNSET`] if none.
    pub fn tracked_fd(&self) -> c_int {
        self.tracked_fd.load(Ordering::Acquire)
    }
}

fn adjust(tracked: c_int, fd: c_int, base: i64, requested: off64_t) -> off64_t {
    if fd >= 0 && tracked == fd {
        requested.wrapping_add(base)
    } else {
        requested
    }
}
