//! Value Objects
//!
//! Immutable types that describe *how* paths are treated, not *which* paths.

mod library_fixup;

pub use library_fixup::{LibraryFixup, LEGACY_LIBRARY_SUFFIX, LIBRARY_SUFFIX};
