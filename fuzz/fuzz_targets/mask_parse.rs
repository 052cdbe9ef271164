#![no_main]

use libfuzzer_sys::fuzz_target;
use rangemask::editor::{format_range, parse_buffer};
use rangemask::fuzzing::parse_mask_input;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data)
        && let Ok(buffer) = parse_mask_input(input)
    {
        let range = parse_buffer(&buffer);
        let reparsed = parse_buffer(&format_range(Some(&range)));
        assert_eq!(range.fields(), reparsed.fields());
    }
});
