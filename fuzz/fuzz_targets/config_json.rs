#![no_main]

use libfuzzer_sys::fuzz_target;
use rangemask::config::resolve_presets;
use rangemask::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<ConfigFile>(data)
        && let Ok(presets) = resolve_presets(Some(&config))
    {
        assert!(presets.iter().all(|preset| !preset.label.trim().is_empty()));
    }
});
