#![no_main]

use clap::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut args = vec!["rangemask"];
        args.extend(input.split_whitespace().take(64));
        if let Ok(parsed) = rangemask::args::RangeArgs::try_parse_from(args)
            && parsed.last_hours.is_some()
        {
            assert!(parsed.from.is_none() && parsed.to.is_none());
        }
    }
});
