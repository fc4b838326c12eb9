//! A non-numeric offset value must resolve to zero without disturbing
//! anything else: the target is still tracked, reads are just unshifted.
//!
//! Environment primed pre-main; see redirect.rs for why.

use offsetpreload_shim::state::ShimState;
use offsetpreload_shim::syscalls::io::pread64;
use offsetpreload_shim::syscalls::open::open64;
use std::ffi::CStr;
use std::path::Path;

const TARGET_C: &CStr = c"/tmp/offsetpreload-lenient-img.bin";

#[link_section = ".init_array"]
#[used]
static PRIME_ENV: unsafe extern "C" fn() = {
    unsafe extern "C" fn prime() {
        libc::setenv(c"OFFSETPRELOAD_FILE".as_ptr(), TARGET_C.as_ptr(), 1);
        libc::setenv(c"OFFSETPRELOAD_OFFSET".as_ptr(), c"bananas".as_ptr(), 1);
    }
    prime
};

#[test]
fn garbage_offset_behaves_as_zero() {
    let container = Path::new(TARGET_C.to_str().unwrap());
    let pattern: Vec<u8> = (0..512u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(container, &pattern).unwrap();

    let fd = unsafe { open64(TARGET_C.as_ptr(), libc::O_RDONLY, 0) };
    assert!(fd >= 0);
    assert_eq!(ShimState::get().unwrap().tracked_fd(), fd);

    let mut buf = [0u8; 8];
    let n = unsafe { pread64(fd, buf.as_mut_ptr().cast(), 8, 16) };
    assert_eq!(n, 8);
    assert_eq!(&buf, &pattern[16..24]);

    unsafe { libc::close(fd) };
    let _ = std::fs::remove_file(container);
}
