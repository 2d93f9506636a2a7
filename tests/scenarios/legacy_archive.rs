//! Scenario: aapt2 and the `.ap_` archive
//!
//! aapt2 rejects `.ap_` files as link inputs. Rendering the library path
//! copies the archive to a `.apk` sibling once and reuses it afterwards.

use aapt2_stage::{LocalFs, StaticLibrary};

use crate::common::*;

/// SCENARIO: foo.ap_ with no foo.apk next to it
#[test]
fn scenario_legacy_archive_gets_apk_sibling() {
    let ws = Workspace::new();
    let lib = StaticLibrary::from_library(ws.write("foo.ap_", ARCHIVE_BYTES));

    let rendered = lib.as_library_path_string(&LocalFs::new()).unwrap();

    assert_eq!(rendered, path_string(&ws.path("foo.apk")));
    assert_eq!(ws.read("foo.apk"), ws.read("foo.ap_"));
    assert_eq!(lib.library(), ws.path("foo.ap_"));
}

/// SCENARIO: bar.apk needs nothing
#[test]
fn scenario_apk_is_rendered_unchanged() {
    let ws = Workspace::new();
    let lib = StaticLibrary::from_library(ws.write("bar.apk", ARCHIVE_BYTES));

    let rendered = lib.as_library_path_string(&LocalFs::new()).unwrap();

    assert_eq!(rendered, path_string(&ws.path("bar.apk")));
    let entries = std::fs::read_dir(ws.root()).unwrap().count();
    assert_eq!(entries, 1, "no sibling should be created");
}

/// SCENARIO: Rendering twice copies once
#[test]
fn scenario_fixup_is_idempotent_on_disk() {
    let ws = Workspace::new();
    let fs = LocalFs::new();
    let lib = StaticLibrary::from_library(ws.write("foo.ap_", ARCHIVE_BYTES));

    let first = lib.as_library_path_string(&fs).unwrap();
    let second = lib.as_library_path_string(&fs).unwrap();

    // A second copy would have hit AlreadyExists with the default LocalFs.
    assert_eq!(first, second);
}

/// SCENARIO: A leftover foo.apk from an older build is trusted as-is
#[test]
fn scenario_stale_sibling_is_reused() {
    let ws = Workspace::new();
    let lib = StaticLibrary::from_library(ws.write("foo.ap_", ARCHIVE_BYTES));
    ws.write("foo.apk", b"left over from a previous build");

    let rendered = lib.as_library_path_string(&LocalFs::new()).unwrap();

    assert_eq!(rendered, path_string(&ws.path("foo.apk")));
    assert_eq!(ws.read("foo.apk"), b"left over from a previous build");
}

/// SCENARIO: The archive disappeared before link
#[test]
fn scenario_missing_legacy_archive_is_fatal() {
    let ws = Workspace::new();
    let lib = StaticLibrary::from_library(ws.path("gone.ap_"));

    let fatal = lib.as_library_path_string(&LocalFs::new()).unwrap_err();

    assert_eq!(fatal.from, ws.path("gone.ap_"));
    assert_eq!(fatal.to, ws.path("gone.apk"));
    assert!(fatal.to_string().starts_with("fatal:"));
}

/// SCENARIO: A failed fix-up leaves nothing behind to be trusted later
#[test]
fn scenario_failed_fixup_leaves_no_sibling() {
    let ws = Workspace::new();
    // A directory named like the archive opens on unix but cannot be read.
    let lib = StaticLibrary::from_library(ws.mkdir("foo.ap_"));
    let fs = LocalFs::new();

    let first = lib.as_library_path_string(&fs).unwrap_err();
    assert_eq!(first.to, ws.path("foo.apk"));
    assert!(!ws.exists("foo.apk"));

    // The second render must fail again instead of handing aapt2 an empty file.
    let second = lib.as_library_path_string(&fs).unwrap_err();
    assert_eq!(second.from, ws.path("foo.ap_"));
    assert!(!ws.exists("foo.apk"));
}
