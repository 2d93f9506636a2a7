//! Stager Use Case
//!
//! Binds a file system and the configured fix-up so callers staging many
//! libraries for `aapt2 link` do not have to thread both through every call.

use std::path::{Path, PathBuf};

use crate::config::StageConfig;
use crate::domain::entities::StaticLibrary;
use crate::domain::ports::FileSystem;
use crate::domain::services::{collect_asset_path_strings, collect_library_path_strings_with};
use crate::domain::value_objects::LibraryFixup;
use crate::error::{FatalCopyError, StageResult};
use crate::infrastructure::fs::LocalFs;

/// Stages static libraries through a file system
pub struct Stager<FS>
where
    FS: FileSystem,
{
    fs: FS,
    fixup: Option<LibraryFixup>,
}

impl<FS> Stager<FS>
where
    FS: FileSystem,
{
    /// Create a new stager; `None` disables the library fix-up
    pub fn new(fs: FS, fixup: Option<LibraryFixup>) -> Self {
        Self { fs, fixup }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    pub fn fixup(&self) -> Option<&LibraryFixup> {
        self.fixup.as_ref()
    }

    pub fn relocate_library(
        &self,
        library: &StaticLibrary,
        target: impl Into<PathBuf>,
    ) -> StageResult<StaticLibrary> {
        library.relocate_library(&self.fs, target)
    }

    pub fn relocate_r_txt(
        &self,
        library: &StaticLibrary,
        target: Option<&Path>,
    ) -> Result<StaticLibrary, FatalCopyError> {
        library.relocate_r_txt(&self.fs, target)
    }

    pub fn relocate_source_jar(
        &self,
        library: &StaticLibrary,
        target: Option<&Path>,
    ) -> Result<StaticLibrary, FatalCopyError> {
        library.relocate_source_jar(&self.fs, target)
    }

    /// Library path for aapt2, after the configured fix-up
    pub fn library_path_string(&self, library: &StaticLibrary) -> Result<String, FatalCopyError> {
        library.as_library_path_string_with(&self.fs, self.fixup.as_ref())
    }

    /// Library paths for aapt2, in order, after the configured fix-up
    pub fn library_path_strings(
        &self,
        libraries: &[StaticLibrary],
    ) -> Result<Vec<String>, FatalCopyError> {
        collect_library_path_strings_with(&self.fs, libraries, self.fixup.as_ref())
    }

    pub fn asset_path_strings(&self, libraries: &[StaticLibrary]) -> Vec<String> {
        collect_asset_path_strings(libraries)
    }
}

impl Stager<LocalFs> {
    /// Stager on the local disk, configured from `config`
    pub fn from_config(config: &StageConfig) -> Self {
        let fs = if config.copy.overwrite_existing {
            LocalFs::overwriting()
        } else {
            LocalFs::new()
        };
        Self::new(fs, config.fixup.to_fixup())
    }
}
