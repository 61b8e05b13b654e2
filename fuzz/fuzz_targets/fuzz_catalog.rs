#![no_main]
use coffee_mixer::catalog::Catalog;
use coffee_mixer::Validatable;
use libfuzzer_sys::fuzz_target;

/// Fuzz both catalog parsers and run validation on anything that loads.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for catalog in [Catalog::from_json(s), Catalog::from_yaml(s)].into_iter().flatten() {
            let _ = catalog.validate();
            let _ = catalog.option_count();
        }
    }
});
