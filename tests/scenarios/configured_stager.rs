//! Scenario: Staging driven by a project config file

use aapt2_stage::config::PROJECT_CONFIG_FILE;
use aapt2_stage::{StageConfig, Stager, StaticLibrary};

use crate::common::*;

/// SCENARIO: Project turns the fix-up off
#[test]
fn scenario_project_disables_fixup() {
    let ws = Workspace::new();
    ws.write(PROJECT_CONFIG_FILE, "[fixup]\nenabled = false\n");
    let lib = StaticLibrary::from_library(ws.write("out/lib.ap_", ARCHIVE_BYTES));

    let config = StageConfig::load(&ws.path(PROJECT_CONFIG_FILE)).unwrap();
    let stager = Stager::from_config(&config);

    assert_eq!(
        stager.library_path_string(&lib).unwrap(),
        path_string(&ws.path("out/lib.ap_"))
    );
    assert!(!ws.exists("out/lib.apk"));
}

/// SCENARIO: Project allows overwriting staged files
#[test]
fn scenario_project_allows_overwrite() {
    let ws = Workspace::new();
    ws.write(PROJECT_CONFIG_FILE, "[copy]\noverwrite_existing = true\n");
    ws.write("staging/R.txt", "stale");
    let lib = StaticLibrary::with_r_txt(
        ws.write("out/lib.apk", ARCHIVE_BYTES),
        ws.write("out/R.txt", R_TXT),
    );

    let config = StageConfig::load(&ws.path(PROJECT_CONFIG_FILE)).unwrap();
    let stager = Stager::from_config(&config);
    let staged = stager
        .relocate_r_txt(&lib, Some(&ws.path("staging/R.txt")))
        .unwrap();

    assert_eq!(staged.r_txt(), Some(ws.path("staging/R.txt").as_path()));
    assert_eq!(ws.read("staging/R.txt"), R_TXT.as_bytes());
}

/// SCENARIO: Custom legacy extension
#[test]
fn scenario_custom_extensions() {
    let ws = Workspace::new();
    ws.write(
        PROJECT_CONFIG_FILE,
        "[fixup]\nlegacy_extension = \".res_\"\nlibrary_extension = \".zip\"\n",
    );
    let lib = StaticLibrary::from_library(ws.write("out/lib.res_", ARCHIVE_BYTES));

    let config = StageConfig::load(&ws.path(PROJECT_CONFIG_FILE)).unwrap();
    let rendered = Stager::from_config(&config)
        .library_path_strings(&[lib])
        .unwrap();

    assert_eq!(rendered, vec![path_string(&ws.path("out/lib.zip"))]);
    assert_eq!(ws.read("out/lib.zip"), ARCHIVE_BYTES);
}
