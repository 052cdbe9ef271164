#![no_main]

use libfuzzer_sys::fuzz_target;
use rangemask::fuzzing::parse_key_script_input;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = parse_key_script_input(input);
    }
});
