//! Positional I/O interposers. Pure passthrough except for the offset
//! rewrite on the tracked descriptor: return values, short counts, and
//! `errno` reach the consumer exactly as the delegate produced them, and
//! nothing here retries or reinterprets an outcome.
//!
//! These wrappers never resolve configuration — before the first open the
//! state singleton does not exist and every request goes through unchanged.

use crate::reals::{real_pread64, real_pwrite64};
use crate::state::ShimState;
use libc::{c_int, c_void, off64_t, size_t, ssize_t};

#[no_mangle]
pub unsafe extern "C" fn pread64(
    fd: c_int,
    buf: *mut c_void,
    count: size_t,
    offset: off64_t,
) -> ssize_t {
    let real = real_pread64();
    let offset = match ShimState::get() {
        Some(state) => state.effective_offset(fd, offset),
        None => offset,
    };
    real(fd, buf, count, offset)
}

#[no_mangle]
pub unsafe extern "C" fn pwrite64(
    fd: c_int,
    buf: *const c_void,
    count: size_t,
    offset: off64_t,
) -> ssize_t {
    let real = real_pwrite64();
    let offset = match ShimState::get() {
        Some(state) => state.effective_offset(fd, offset),
        None => offset,
    };
    real(fd, buf, count, offset)
}
