//! StaticLibrary entity - a static library produced by aapt2
//!
//! A `StaticLibrary` is the compiled resource archive plus the companion
//! files the compile step may have produced next to it. It is immutable:
//! relocating any file yields a new value and leaves the receiver alone.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::LibraryFixup;
use crate::error::{FatalCopyError, StageError, StageResult};

/// A static library generated by aapt2
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticLibrary {
    /// Compiled resource archive
    library: PathBuf,
    /// Resource symbol table (`R.txt`)
    r_txt: Option<PathBuf>,
    /// Asset directories, in caller order
    assets: Option<Vec<PathBuf>>,
    /// Generated source jar
    source_jar: Option<PathBuf>,
}

impl StaticLibrary {
    fn of(
        library: PathBuf,
        r_txt: Option<PathBuf>,
        assets: Option<Vec<PathBuf>>,
        source_jar: Option<PathBuf>,
    ) -> Self {
        Self {
            library,
            r_txt,
            assets,
            source_jar,
        }
    }

    /// Library with no companion files
    pub fn from_library(library: impl Into<PathBuf>) -> Self {
        Self::of(library.into(), None, None, None)
    }

    /// Library with a resource symbol table
    pub fn with_r_txt(library: impl Into<PathBuf>, r_txt: impl Into<PathBuf>) -> Self {
        Self::of(library.into(), Some(r_txt.into()), None, None)
    }

    /// Library with an optional symbol table and optional asset directories
    ///
    /// `None` and `Some(vec![])` are different: only the former means the
    /// compile step produced no asset list at all.
    pub fn with_assets(
        library: impl Into<PathBuf>,
        r_txt: Option<PathBuf>,
        assets: Option<Vec<PathBuf>>,
    ) -> Self {
        Self::of(library.into(), r_txt, assets, None)
    }

    /// Full form
    pub fn with_source_jar(
        library: impl Into<PathBuf>,
        r_txt: Option<PathBuf>,
        assets: Option<Vec<PathBuf>>,
        source_jar: Option<PathBuf>,
    ) -> Self {
        Self::of(library.into(), r_txt, assets, source_jar)
    }

    pub fn library(&self) -> &Path {
        &self.library
    }

    pub fn r_txt(&self) -> Option<&Path> {
        self.r_txt.as_deref()
    }

    pub fn assets(&self) -> Option<&[PathBuf]> {
        self.assets.as_deref()
    }

    pub fn source_jar(&self) -> Option<&Path> {
        self.source_jar.as_deref()
    }

    /// Copy the library archive to `target`
    ///
    /// Returns a new value pointing at `target`. The copy failure is
    /// recoverable and reported as [`StageError::Copy`].
    pub fn relocate_library(
        &self,
        fs: &dyn FileSystem,
        target: impl Into<PathBuf>,
    ) -> StageResult<Self> {
        let target = target.into();
        fs.copy(&self.library, &target)
            .map_err(|source| StageError::Copy {
                from: self.library.clone(),
                to: target.clone(),
                source,
            })?;
        tracing::debug!(from = %self.library.display(), to = %target.display(), "relocated library");
        Ok(Self::of(
            target,
            self.r_txt.clone(),
            self.assets.clone(),
            self.source_jar.clone(),
        ))
    }

    /// Copy `R.txt` to `target`
    ///
    /// A no-op when there is no `R.txt` or no `target`.
    pub fn relocate_r_txt(
        &self,
        fs: &dyn FileSystem,
        target: Option<&Path>,
    ) -> Result<Self, FatalCopyError> {
        let r_txt = copy_to(fs, self.r_txt.as_deref(), target)?;
        Ok(Self::of(
            self.library.clone(),
            r_txt,
            self.assets.clone(),
            self.source_jar.clone(),
        ))
    }

    /// Copy the source jar to `target`
    ///
    /// A no-op when there is no source jar or no `target`.
    pub fn relocate_source_jar(
        &self,
        fs: &dyn FileSystem,
        target: Option<&Path>,
    ) -> Result<Self, FatalCopyError> {
        let source_jar = copy_to(fs, self.source_jar.as_deref(), target)?;
        Ok(Self::of(
            self.library.clone(),
            self.r_txt.clone(),
            self.assets.clone(),
            source_jar,
        ))
    }

    /// Library path as aapt2 should receive it, after the default fix-up
    ///
    /// May copy `foo.ap_` to `foo.apk` on first use.
    pub fn as_library_path_string(&self, fs: &dyn FileSystem) -> Result<String, FatalCopyError> {
        self.as_library_path_string_with(fs, Some(&LibraryFixup::default()))
    }

    /// Library path as aapt2 should receive it, with an explicit fix-up
    ///
    /// `None` disables the fix-up and never touches the file system.
    pub fn as_library_path_string_with(
        &self,
        fs: &dyn FileSystem,
        fixup: Option<&LibraryFixup>,
    ) -> Result<String, FatalCopyError> {
        let path = match fixup {
            Some(fixup) => fix_for_aapt2(fs, &self.library, fixup)?,
            None => self.library.clone(),
        };
        Ok(path.display().to_string())
    }

    /// Asset directories as strings; empty when none were given
    pub fn as_asset_path_strings(&self) -> Vec<String> {
        self.assets
            .iter()
            .flatten()
            .map(|p| p.display().to_string())
            .collect()
    }
}

/// Copy `input` to `target` when both are present
fn copy_to(
    fs: &dyn FileSystem,
    input: Option<&Path>,
    target: Option<&Path>,
) -> Result<Option<PathBuf>, FatalCopyError> {
    let Some(input) = input else {
        return Ok(None);
    };
    let Some(target) = target else {
        tracing::trace!(path = %input.display(), "no relocation target; keeping path");
        return Ok(Some(input.to_path_buf()));
    };
    fs.copy(input, target).map_err(|source| FatalCopyError {
        from: input.to_path_buf(),
        to: target.to_path_buf(),
        source,
    })?;
    tracing::debug!(from = %input.display(), to = %target.display(), "relocated file");
    Ok(Some(target.to_path_buf()))
}

// An existing sibling is trusted as an earlier fix without comparing contents.
fn fix_for_aapt2(
    fs: &dyn FileSystem,
    library: &Path,
    fixup: &LibraryFixup,
) -> Result<PathBuf, FatalCopyError> {
    let Some(fixed) = fixup.fixed_sibling(library) else {
        return Ok(library.to_path_buf());
    };
    if fs.exists(&fixed) {
        tracing::debug!(path = %fixed.display(), "library already fixed for aapt2");
        return Ok(fixed);
    }
    fs.copy(library, &fixed).map_err(|source| FatalCopyError {
        from: library.to_path_buf(),
        to: fixed.clone(),
        source,
    })?;
    tracing::debug!(from = %library.display(), to = %fixed.display(), "fixed library extension for aapt2");
    Ok(fixed)
}
