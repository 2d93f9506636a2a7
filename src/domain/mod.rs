//! Domain Layer
//!
//! The static-library value and the rules for turning it into paths aapt2
//! accepts.
//!
//! ## Structure
//!
//! - `entities/` - The `StaticLibrary` artifact
//! - `value_objects/` - Immutable helper types (`LibraryFixup`)
//! - `services/` - Operations over many libraries at once
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Immutable values** - Relocation returns a new value, never mutates
//! 2. **Ports & Adapters** - All I/O goes through the `FileSystem` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
