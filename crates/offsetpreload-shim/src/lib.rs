//! # offsetpreload-shim
//!
//! LD_PRELOAD shim that adds a fixed byte offset to positional I/O on one
//! configured file, leaving every other descriptor untouched.
//!
//! The canonical consumer is a filesystem-image driver such as fuse2fs that
//! believes it is addressing byte 0 of a whole device, while the image
//! actually sits at a known offset inside a larger container file. Set
//! `OFFSETPRELOAD_FILE` to the container path and `OFFSETPRELOAD_OFFSET` to
//! the image's byte offset, preload this library, and run the driver
//! unmodified.
//!
//! Interposed symbols: `pread64`, `pwrite64`, `open64`, `__open64_2`. Every
//! call fully delegates to the next-in-search-order implementation resolved
//! with `dlsym(RTLD_NEXT)`; the shim only rewrites the offset argument when
//! the descriptor matches the most recently opened instance of the target
//! path. Opens are never denied or redirected, and delegate errors pass
//! through verbatim.
//!
//! The tracker keeps a single slot: a later matching open replaces an
//! earlier one, and nothing un-tracks on close. Descriptor-number reuse
//! after the consumer closes the target is therefore the consumer's problem,
//! same as the interposer this replaces.

// Allow unsafe FFI functions without safety docs - these are inherently unsafe C ABI
#![allow(clippy::missing_safety_doc)]

// Macros must be defined before modules that use them
#[macro_use]
pub mod macros;

pub mod reals;
pub mod state;
pub mod syscalls;
