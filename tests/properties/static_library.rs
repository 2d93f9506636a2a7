//! Property tests for StaticLibrary immutability and path rendering.

use proptest::prelude::*;
use std::path::{Path, PathBuf};

use aapt2_stage::{collect_asset_path_strings, MemoryFs, StaticLibrary};

fn path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec("[a-z0-9]{1,8}", 1..=3)
        .prop_map(|segments| PathBuf::from(segments.join("/")))
}

fn assets() -> impl Strategy<Value = Option<Vec<PathBuf>>> {
    proptest::option::of(proptest::collection::vec(path(), 0..4))
}

fn library() -> impl Strategy<Value = StaticLibrary> {
    (
        path(),
        proptest::option::of(path()),
        assets(),
        proptest::option::of(path()),
    )
        .prop_map(|(lib, r_txt, assets, srcjar)| {
            StaticLibrary::with_source_jar(lib.with_extension("ap_"), r_txt, assets, srcjar)
        })
}

fn seeded(lib: &StaticLibrary) -> MemoryFs {
    let fs = MemoryFs::overwriting();
    fs.insert(lib.library(), "archive");
    if let Some(r_txt) = lib.r_txt() {
        fs.insert(r_txt, "symbols");
    }
    if let Some(jar) = lib.source_jar() {
        fs.insert(jar, "sources");
    }
    fs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `from_library` sets the library and nothing else.
    #[test]
    fn property_from_library_only_library(lib in path()) {
        let value = StaticLibrary::from_library(&lib);

        prop_assert_eq!(value.library(), lib.as_path());
        prop_assert!(value.r_txt().is_none());
        prop_assert!(value.assets().is_none());
        prop_assert!(value.source_jar().is_none());
    }

    /// PROPERTY: No relocation changes the receiver or the source files.
    #[test]
    fn property_relocation_never_mutates_receiver(lib in library()) {
        let fs = seeded(&lib);
        let before = lib.clone();

        let _ = lib.relocate_library(&fs, "stage/lib.ap_");
        let _ = lib.relocate_r_txt(&fs, Some(Path::new("stage/R.txt")));
        let _ = lib.relocate_source_jar(&fs, Some(Path::new("stage/lib.srcjar")));

        prop_assert_eq!(&lib, &before);
        prop_assert_eq!(fs.content(lib.library()), Some(b"archive".to_vec()));
        if let Some(r_txt) = lib.r_txt() {
            prop_assert_eq!(fs.content(r_txt), Some(b"symbols".to_vec()));
        }
    }

    /// PROPERTY: Relocating one field carries every other field over as-is.
    #[test]
    fn property_relocate_r_txt_keeps_other_fields(lib in library()) {
        let fs = seeded(&lib);

        let moved = lib.relocate_r_txt(&fs, Some(Path::new("stage/R.txt"))).unwrap();

        prop_assert_eq!(moved.library(), lib.library());
        prop_assert_eq!(moved.assets(), lib.assets());
        prop_assert_eq!(moved.source_jar(), lib.source_jar());
        prop_assert_eq!(moved.r_txt().is_some(), lib.r_txt().is_some());
    }

    /// PROPERTY: Rendering the library path twice copies at most once.
    #[test]
    fn property_fixup_copies_at_most_once(lib in library()) {
        let fs = seeded(&lib);

        let first = lib.as_library_path_string(&fs).unwrap();
        let second = lib.as_library_path_string(&fs).unwrap();

        prop_assert_eq!(first, second);
        prop_assert!(fs.copy_count() <= 1);
    }

    /// PROPERTY: Collected asset paths are the in-order concatenation.
    #[test]
    fn property_asset_paths_concatenate(libs in proptest::collection::vec(library(), 0..5)) {
        let expected: Vec<String> = libs
            .iter()
            .flat_map(|lib| lib.assets().unwrap_or_default().iter())
            .map(|p| p.display().to_string())
            .collect();

        prop_assert_eq!(collect_asset_path_strings(&libs), expected);
    }
}
