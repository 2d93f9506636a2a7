//! Domain Entities
//!
//! - `StaticLibrary` - An aapt2 static library and its companion files

mod static_library;

pub use static_library::StaticLibrary;
