//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Local file system implementation
///
/// By default a copy never replaces an existing destination: the destination
/// is opened with create-new semantics and an existing file is reported as
/// [`FsError::AlreadyExists`]. A copy that fails after the destination was
/// created removes it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    overwrite_existing: bool,
}

impl LocalFs {
    /// Create a new LocalFs instance that refuses to overwrite
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a LocalFs that replaces existing destinations
    pub fn overwriting() -> Self {
        Self {
            overwrite_existing: true,
        }
    }

    pub fn overwrite_existing(&self) -> bool {
        self.overwrite_existing
    }
}

impl FileSystem for LocalFs {
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut src = File::open(from).map_err(|e| FsError::from_io(from, e))?;
        let permissions = src
            .metadata()
            .map_err(|e| FsError::from_io(from, e))?
            .permissions();

        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite_existing {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let mut dst = options.open(to).map_err(|e| FsError::from_io(to, e))?;

        // A half-written destination must not survive: the fix-up treats an
        // existing sibling as already fixed.
        let result = copy_contents(&mut src, &mut dst, from, to).and_then(|()| {
            dst.set_permissions(permissions).map_err(|e| FsError::from_io(to, e))
        });
        if result.is_err() {
            drop(dst);
            if let Err(error) = std::fs::remove_file(to) {
                if error.kind() != ErrorKind::NotFound {
                    tracing::warn!(%error, path = %to.display(), "could not remove partial copy");
                }
            }
        }
        result
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Stream `src` into `dst`, blaming read errors on `from` and write errors on `to`
fn copy_contents(src: &mut File, dst: &mut File, from: &Path, to: &Path) -> FsResult<()> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FsError::from_io(from, e)),
        };
        dst.write_all(&buf[..n]).map_err(|e| FsError::from_io(to, e))?;
    }
    dst.flush().map_err(|e| FsError::from_io(to, e))
}
