//! Test support for code that reads the process environment.
//!
//! Environment variables are process-global, and the Rust test harness runs
//! tests on concurrent threads. `ScopedEnv` serializes every test that
//! mutates the environment and restores the previous values on drop.
//!
//! # Usage
//!
//! ```ignore
//! use offsetpreload_config::testing::ScopedEnv;
//!
//! #[test]
//! fn test_something() {
//!     let _env = ScopedEnv::new(&[("OFFSETPRELOAD_FILE", Some("/img.bin"))]);
//!     // environment is held exclusively until _env drops
//! }
//! ```

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive, self-restoring environment override for tests.
pub struct ScopedEnv {
    _lock: MutexGuard<'static, ()>,
    saved: Vec<(String, Option<OsString>)>,
}

impl ScopedEnv {
    /// Apply the given overrides; `None` removes the variable.
    pub fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut saved = Vec::with_capacity(vars.len());
        for (key, value) in vars {
            saved.push(((*key).to_string(), std::env::var_os(key)));
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { _lock: lock, saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
