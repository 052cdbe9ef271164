#![no_main]

use libfuzzer_sys::fuzz_target;
use rangemask::config::resolve_presets;
use rangemask::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data)
        && let Ok(config) = toml::from_str::<ConfigFile>(input)
    {
        let _ = resolve_presets(Some(&config));
    }
});
