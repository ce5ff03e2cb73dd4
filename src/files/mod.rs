//! Filesystem-backed resources.
//!
//! [`FsRoute`] resolves every request path against a fixed content root:
//! a miss becomes a not-found resource (which PUT can turn into a file), a
//! directory becomes an HTML listing, and a regular file supports byte
//! ranges and ETag-guarded writes.

pub mod etag;
pub mod file;
pub mod locks;
pub mod resolve;

pub use file::{FileResource, FileSlice};
pub use locks::PathLocks;
pub use resolve::{FsRoute, resolve_resource};
