#![no_main]

use libfuzzer_sys::fuzz_target;

use biblio::TomlBackend;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz store snapshot decoding and validation - this should never panic
        let backend = TomlBackend::new("fuzz.toml");
        let _ = backend.parse(content);
    }
});
