#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let fixup = aapt2_stage::LibraryFixup::default();
        if let Some(fixed) = fixup.fixed_sibling(std::path::Path::new(name)) {
            assert!(fixed.to_string_lossy().ends_with(".apk"));
        }
    }
});
