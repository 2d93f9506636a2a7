//! aapt2-stage - static library artifacts for aapt2 link
//!
//! A [`StaticLibrary`] is the output of an aapt2 static-library compile: the
//! resource archive plus an optional `R.txt`, asset directories and source
//! jar. Values are immutable; relocating a file copies it and returns a new
//! value. Rendering the library path for aapt2 applies the `.ap_` to `.apk`
//! fix-up, which may copy the archive next to itself on first use.
//!
//! Logging goes through `tracing`; installing a subscriber is up to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::Stager;
pub use config::{ConfigWarning, StageConfig};
pub use domain::entities::StaticLibrary;
pub use domain::ports::{FileSystem, FsError, FsResult};
pub use domain::services::{collect_asset_path_strings, collect_library_path_strings};
pub use domain::value_objects::LibraryFixup;
pub use error::{FatalCopyError, StageError, StageResult};
pub use infrastructure::fs::{FsCall, LocalFs, MemoryFs};
