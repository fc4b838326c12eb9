//! Zero-allocation diagnostics for the shim.
//!
//! Everything here formats into a stack buffer and writes with raw
//! `libc::write`, so logging can never allocate or re-enter the interposed
//! I/O paths.

/// Diagnostic line on stderr, emitted only when `OFFSETPRELOAD_DEBUG` was
/// set at configuration time. Only call this on success paths: `libc::write`
/// may clobber `errno`, and delegate errors must reach the consumer intact.
#[macro_export]
macro_rules! shim_debug {
    ($($arg:tt)*) => {
        if $crate::state::DEBUG_ENABLED.load(std::sync::atomic::Ordering::Relaxed) {
            use std::fmt::Write;
            let mut buf = [0u8; 512];
            let mut wrapper = $crate::macros::StackWriter::new(&mut buf);
            let pid = unsafe { libc::getpid() };
            let _ = write!(wrapper, "[offsetpreload][{}] ", pid);
            let _ = write!(wrapper, $($arg)*);
            let _ = writeln!(wrapper);

            let msg = wrapper.as_str();
            let _ = unsafe { libc::write(2, msg.as_ptr() as *const libc::c_void, msg.len()) };
        }
    };
}

/// Formatter over a caller-provided stack buffer; output is truncated, never
/// reallocated.
pub struct StackWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> StackWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.pos]).unwrap_or("")
    }
}

impl<'a> std::fmt::Write for StackWriter<'a> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        let bytes = s.as_bytes();
        let remaining = self.buf.len() - self.pos;
        let to_copy = std::cmp::min(bytes.len(), remaining);
        self.buf[self.pos..self.pos + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.pos += to_copy;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StackWriter;
    use std::fmt::Write;

    #[test]
    fn truncates_instead_of_allocating() {
        let mut buf = [0u8; 8];
        let mut w = StackWriter::new(&mut buf);
        let _ = write!(w, "0123456789");
        assert_eq!(w.as_str(), "01234567");
    }
}
