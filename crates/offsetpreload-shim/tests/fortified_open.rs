//! The two-argument fortified open variant must drive the same tracker and
//! offset rule as the plain three-argument form — it is the variant a
//! `_FORTIFY_SOURCE` consumer build actually calls.
//!
//! Environment primed pre-main; see redirect.rs for why.

use offsetpreload_shim::state::ShimState;
use offsetpreload_shim::syscalls::io::pread64;
use offsetpreload_shim::syscalls::open::__open64_2;
use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

const TARGET_C: &CStr = c"/tmp/offsetpreload-fortify-img.bin";

#[link_section = ".init_array"]
#[used]
static PRIME_ENV: unsafe extern "C" fn() = {
    unsafe extern "C" fn prime() {
        libc::setenv(c"OFFSETPRELOAD_FILE".as_ptr(), TARGET_C.as_ptr(), 1);
        libc::setenv(c"OFFSETPRELOAD_OFFSET".as_ptr(), c"2048".as_ptr(), 1);
    }
    prime
};

unsafe fn shim_pread(fd: libc::c_int, len: usize, offset: i64) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    let n = pread64(fd, buf.as_mut_ptr().cast(), len, offset);
    assert!(n >= 0);
    buf.truncate(n as usize);
    buf
}

#[test]
fn fortified_open_variant_tracks_and_offsets() {
    let container = Path::new(TARGET_C.to_str().unwrap());
    let dir = tempfile::tempdir().unwrap();
    let other = dir.path().join("other.bin");

    let pattern: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(container, &pattern).unwrap();
    std::fs::write(&other, b"other-file-content").unwrap();

    // Opening the target through the fortified variant tracks it.
    let fd = unsafe { __open64_2(TARGET_C.as_ptr(), libc::O_RDONLY) };
    assert!(fd >= 0);
    assert_eq!(ShimState::get().unwrap().tracked_fd(), fd);
    assert_eq!(
        unsafe { shim_pread(fd, 16, 0) }.as_slice(),
        &pattern[2048..2064]
    );
    assert_eq!(
        unsafe { shim_pread(fd, 16, 1024) }.as_slice(),
        &pattern[3072..3088]
    );

    // An unrelated file through the same variant stays untouched and does
    // not disturb the slot.
    let c_other = CString::new(other.as_os_str().as_bytes()).unwrap();
    let ofd = unsafe { __open64_2(c_other.as_ptr(), libc::O_RDONLY) };
    assert!(ofd >= 0);
    assert_eq!(unsafe { shim_pread(ofd, 5, 0) }, b"other");
    assert_eq!(ShimState::get().unwrap().tracked_fd(), fd);

    unsafe {
        libc::close(fd);
        libc::close(ofd);
    }
    let _ = std::fs::remove_file(container);
}
