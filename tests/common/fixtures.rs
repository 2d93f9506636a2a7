//! Test fixtures - reusable content constants for tests.

/// Bytes standing in for a compiled resource archive
pub const ARCHIVE_BYTES: &[u8] = b"PK\x03\x04resources.arsc";

/// A small resource symbol table
pub const R_TXT: &str = "int string app_name 0x7f010000\nint layout main 0x7f020000\n";

/// Bytes standing in for a generated source jar
pub const SRCJAR_BYTES: &[u8] = b"PK\x03\x04com/example/R.java";
