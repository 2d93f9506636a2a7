//! Path collection across many static libraries
//!
//! aapt2 link takes every dependency library and every asset directory as
//! plain arguments; these helpers flatten a dependency list into those.

use crate::domain::entities::StaticLibrary;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::LibraryFixup;
use crate::error::FatalCopyError;

/// Library path strings in input order, each after the default fix-up
///
/// Stops at the first library whose fix-up copy fails.
pub fn collect_library_path_strings(
    fs: &dyn FileSystem,
    libraries: &[StaticLibrary],
) -> Result<Vec<String>, FatalCopyError> {
    collect_library_path_strings_with(fs, libraries, Some(&LibraryFixup::default()))
}

pub(crate) fn collect_library_path_strings_with(
    fs: &dyn FileSystem,
    libraries: &[StaticLibrary],
    fixup: Option<&LibraryFixup>,
) -> Result<Vec<String>, FatalCopyError> {
    libraries
        .iter()
        .map(|library| library.as_library_path_string_with(fs, fixup))
        .collect()
}

/// Every asset directory of every library, concatenated in order
///
/// Duplicates are kept.
pub fn collect_asset_path_strings(libraries: &[StaticLibrary]) -> Vec<String> {
    libraries
        .iter()
        .flat_map(StaticLibrary::as_asset_path_strings)
        .collect()
}
