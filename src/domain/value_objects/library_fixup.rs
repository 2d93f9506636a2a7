//! Library fix-up value object
//!
//! aapt2 does not accept a `.ap_` file as a `-I`/link input, but the
//! resource compile step emits exactly that. The fix is to present the tool a
//! sibling file whose name ends in `.apk` instead.

use std::path::{Path, PathBuf};

/// Legacy suffix emitted by the resource compile step
pub const LEGACY_LIBRARY_SUFFIX: &str = ".ap_";

/// Suffix aapt2 recognizes as a library
pub const LIBRARY_SUFFIX: &str = ".apk";

/// A file-name suffix rewrite applied before handing a library path to aapt2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFixup {
    legacy_suffix: String,
    replacement_suffix: String,
}

impl LibraryFixup {
    pub fn new(legacy_suffix: impl Into<String>, replacement_suffix: impl Into<String>) -> Self {
        Self {
            legacy_suffix: legacy_suffix.into(),
            replacement_suffix: replacement_suffix.into(),
        }
    }

    pub fn legacy_suffix(&self) -> &str {
        &self.legacy_suffix
    }

    pub fn replacement_suffix(&self) -> &str {
        &self.replacement_suffix
    }

    /// Whether `path`'s file name ends with the legacy suffix
    pub fn applies_to(&self, path: &Path) -> bool {
        self.fixed_sibling(path).is_some()
    }

    /// The sibling path aapt2 should see, or `None` if no fix is needed
    ///
    /// Only the trailing suffix of the file name is rewritten, never every
    /// occurrence: `lib.ap_` becomes `lib.apk` and `a.ap_.b.ap_` becomes
    /// `a.ap_.b.apk`, not `a.apk.b.apk`. Parent directories are kept as they
    /// are. Non UTF-8 names are left alone.
    pub fn fixed_sibling(&self, path: &Path) -> Option<PathBuf> {
        if self.legacy_suffix.is_empty() {
            return None;
        }
        let name = path.file_name()?.to_str()?;
        let stem = name.strip_suffix(self.legacy_suffix.as_str())?;
        Some(path.with_file_name(format!("{stem}{}", self.replacement_suffix)))
    }
}

impl Default for LibraryFixup {
    fn default() -> Self {
        Self::new(LEGACY_LIBRARY_SUFFIX, LIBRARY_SUFFIX)
    }
}
