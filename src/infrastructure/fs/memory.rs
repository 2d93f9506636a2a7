//! In-memory File System
//!
//! Keeps file contents in a map and records every call made through the
//! port, so tests can assert exactly which file-system operations happened.
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A single recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Copy { from: PathBuf, to: PathBuf },
    Exists(PathBuf),
}

#[derive(Debug, Default)]
struct State {
    files: HashMap<PathBuf, Vec<u8>>,
    read_only: HashSet<PathBuf>,
    calls: Vec<FsCall>,
}

/// In-memory file system for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
    overwrite_existing: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as `new`, but copies replace existing destinations
    pub fn overwriting() -> Self {
        Self {
            overwrite_existing: true,
            ..Self::default()
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file without recording a call
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.state().files.insert(path.into(), content.into());
    }

    /// Make every copy into `path` fail with `PermissionDenied`
    pub fn deny_writes_to(&self, path: impl Into<PathBuf>) {
        self.state().read_only.insert(path.into());
    }

    /// File content, if present. Not recorded as a call.
    pub fn content(&self, path: &Path) -> Option<Vec<u8>> {
        self.state().files.get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.state().files.contains_key(path)
    }

    /// All calls made through the `FileSystem` port, in order
    pub fn calls(&self) -> Vec<FsCall> {
        self.state().calls.clone()
    }

    /// Number of copies made through the `FileSystem` port
    pub fn copy_count(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c, FsCall::Copy { .. }))
            .count()
    }
}

impl FileSystem for MemoryFs {
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut state = self.state();
        state.calls.push(FsCall::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });

        let content = state
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        if state.read_only.contains(to) {
            return Err(FsError::PermissionDenied(to.to_path_buf()));
        }
        if !self.overwrite_existing && state.files.contains_key(to) {
            return Err(FsError::AlreadyExists(to.to_path_buf()));
        }
        state.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let mut state = self.state();
        state.calls.push(FsCall::Exists(path.to_path_buf()));
        state.files.contains_key(path)
    }
}
