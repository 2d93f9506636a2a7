//! Error types for aapt2-stage
//!
//! Two categories that are deliberately kept apart:
//!
//! - [`StageError`] is recoverable. It comes out of operations a caller asked
//!   for explicitly (relocating the library, loading configuration) and is
//!   meant to be caught and reported.
//! - [`FatalCopyError`] is the unrecoverable category. It comes out of
//!   internal copies (optional-field relocation, the `.ap_` fix-up) that only
//!   fail in a misconfigured build. Propagate it to the top level and abort.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for recoverable staging operations
pub type StageResult<T> = Result<T, StageError>;

/// Recoverable staging error
#[derive(Error, Debug)]
pub enum StageError {
    /// An explicitly requested copy failed
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unrecoverable copy failure
///
/// Raised by copies the build expects to always succeed. There is no
/// conversion into [`StageError`].
#[derive(Error, Debug)]
#[error("fatal: could not copy {} to {}: {source}", .from.display(), .to.display())]
pub struct FatalCopyError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: FsError,
}
