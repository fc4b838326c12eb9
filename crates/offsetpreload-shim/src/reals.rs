//! Real Symbol Storage
//!
//! One lazily resolved `dlsym(RTLD_NEXT)` pointer per interposed symbol,
//! cached for the process lifetime. Resolution failure is fatal: delegating
//! is the shim's whole job, and silently skipping interception would let the
//! consumer read the wrong bytes while every call appears to succeed.

use libc::{c_char, c_int, c_void, mode_t, off64_t, size_t, ssize_t};
use std::sync::atomic::{AtomicPtr, Ordering};

/// Storage for a real libc function, resolved on first use.
pub struct RealSymbol {
    ptr: AtomicPtr<c_void>,
    name: &'static str,
}

impl RealSymbol {
    pub const fn new(name: &'static str) -> Self {
        Self {
            ptr: AtomicPtr::new(std::ptr::null_mut()),
            name,
        }
    }

    pub unsafe fn get(&self) -> *mut c_void {
        let p = self.ptr.load(Ordering::Acquire);
        if !p.is_null() {
            return p;
        }
        let f = libc::dlsym(libc::RTLD_NEXT, self.name.as_ptr() as *const c_char);
        if f.is_null() {
            self.fail_resolution();
        }
        self.ptr.store(f, Ordering::Release);
        f
    }

    fn fail_resolution(&self) -> ! {
        use std::fmt::Write;
        let mut buf = [0u8; 128];
        let mut wrapper = crate::macros::StackWriter::new(&mut buf);
        let _ = writeln!(
            wrapper,
            "offsetpreload: fatal: cannot resolve real symbol '{}'",
            self.name.trim_end_matches('\0')
        );
        let msg = wrapper.as_str();
        unsafe {
            libc::write(2, msg.as_ptr() as *const c_void, msg.len());
            libc::abort()
        }
    }
}

// One cache per symbol: each wraps a different underlying call.
pub static REAL_PREAD64: RealSymbol = RealSymbol::new("pread64\0");
pub static REAL_PWRITE64: RealSymbol = RealSymbol::new("pwrite64\0");
pub static REAL_OPEN64: RealSymbol = RealSymbol::new("open64\0");
pub static REAL_OPEN64_2: RealSymbol = RealSymbol::new("__open64_2\0");

pub type Pread64Fn = unsafe extern "C" fn(c_int, *mut c_void, size_t, off64_t) -> ssize_t;
pub type Pwrite64Fn = unsafe extern "C" fn(c_int, *const c_void, size_t, off64_t) -> ssize_t;
pub type Open64Fn = unsafe extern "C" fn(*const c_char, c_int, mode_t) -> c_int;
pub type Open64F2Fn = unsafe extern "C" fn(*const c_char, c_int) -> c_int;

pub unsafe fn real_pread64() -> Pread64Fn {
    std::mem::transmute::<*mut c_void, Pread64Fn>(REAL_PREAD64.get())
}

pub unsafe fn real_pwrite64() -> Pwrite64Fn {
    std::mem::transmute::<*mut c_void, Pwrite64Fn>(REAL_PWRITE64.get())
}

pub unsafe fn real_open64() -> Open64Fn {
    std::mem::transmute::<*mut c_void, Open64Fn>(REAL_OPEN64.get())
}

pub unsafe fn real_open64_2() -> Open64F2Fn {
    std::mem::transmute::<*mut c_void, Open64F2Fn>(REAL_OPEN64_2.get())
}
