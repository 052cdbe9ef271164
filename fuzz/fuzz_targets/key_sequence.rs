#![no_main]

use libfuzzer_sys::fuzz_target;
use rangemask::editor::{MASK_TEMPLATE, is_digit_slot, parse_buffer};
use rangemask::fuzzing::{FuzzStep, replay_bytes, step_from_byte};

fuzz_target!(|data: &[u8]| {
    let states = replay_bytes(data);
    for (byte, state) in data.iter().zip(states.iter()) {
        if matches!(step_from_byte(*byte), FuzzStep::Key(_)) {
            assert!(is_digit_slot(state.caret));
        }
        let (from_h, from_m, to_h, to_m) = parse_buffer(&state.buffer).fields();
        assert!(from_h < 24 && to_h < 24 && from_m < 60 && to_m < 60);
        for index in [2, 5, 6, 7, 10] {
            assert_eq!(state.buffer.char_at(index), MASK_TEMPLATE.chars().nth(index));
        }
    }
});
