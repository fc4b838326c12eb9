//! Open interposers: ensure configuration is resolved, delegate with
//! arguments unchanged, then feed the result to the path matcher. The
//! returned descriptor passes through regardless of matching — the shim
//! never denies or redirects an open, only the positional I/O that follows.

use crate::reals::{real_open64, real_open64_2};
use crate::state::ShimState;
use libc::{c_char, c_int, mode_t};

/// `open64` is variadic in C; the mode argument is only read by the callee
/// when `O_CREAT`/`O_TMPFILE` is present, so the fixed three-argument form
/// is ABI-compatible on the LP64 targets this shim supports.
#[no_mangle]
pub unsafe extern "C" fn open64(path: *const c_char, flags: c_int, mode: mode_t) -> c_int {
    let real = real_open64();
    let state = ShimState::get_or_init();

    let fd = real(path, flags, mode);
    state.note_open(path, fd);
    fd
}

/// Two-argument fortified variant emitted under `_FORTIFY_SOURCE`; this is
/// the form the fuse2fs toolchain generates.
#[no_mangle]
pub unsafe extern "C" fn __open64_2(path: *const c_char, flags: c_int) -> c_int {
    let real = real_open64_2();
    let state = ShimState::get_or_init();

    let fd = real(path, flags);
    state.note_open(path, fd);
    fd
}
