//! FileSystem port - abstraction over the copy and existence checks
//!
//! Relocation and the library fix-up only ever need two primitives, so the
//! port stays that small. Implementations:
//! - `LocalFs` - real disk
//! - `MemoryFs` - in-memory, records every call

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Error, Debug)]
pub enum FsError {
    /// Source file not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Destination already exists and overwriting is not allowed
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach `path` to an I/O error, keeping the common kinds distinguishable.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
pub trait FileSystem {
    /// Copy the file at `from` to a new file at `to`
    ///
    /// Fails if `from` cannot be read, or if `to` cannot be created. Whether
    /// an existing `to` is replaced is up to the implementation.
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;
}
