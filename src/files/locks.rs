use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Table of per-path write locks.
///
/// PUT and PATCH critical sections for one file are serialized through the
/// lock returned here, so concurrent writers to the same path cannot
/// interleave a read-compare-write. Reads take no lock. The table is
/// shared by every resource a route resolves.
#[derive(Clone, Default)]
pub struct PathLocks {
    inner: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock guarding writes to `path`, created on first use.
    pub fn for_path(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut table = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        table.entry(path.to_path_buf()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_yields_same_lock() {
        let locks = PathLocks::new();
        let a = locks.for_path(Path::new("/tmp/x"));
        let b = locks.for_path(Path::new("/tmp/x"));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_paths_yield_different_locks() {
        let locks = PathLocks::new();
        let a = locks.for_path(Path::new("/tmp/x"));
        let b = locks.for_path(Path::new("/tmp/y"));
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
