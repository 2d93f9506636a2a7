//! Domain Services
//!
//! Operations that work across a list of `StaticLibrary` values.

mod path_collector;

pub(crate) use path_collector::collect_library_path_strings_with;
pub use path_collector::{collect_asset_path_strings, collect_library_path_strings};
