//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! ## Use Cases
//!
//! - `Stager` - Relocate static libraries and render their paths for aapt2

pub mod stager;

pub use stager::Stager;
