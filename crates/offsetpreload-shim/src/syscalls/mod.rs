//! Interposed entry points, grouped the way glibc splits them: `open` for
//! the two open variants that drive the path matcher, `io` for the
//! positional read/write pair that applies the offset.

pub mod io;
pub mod open;
