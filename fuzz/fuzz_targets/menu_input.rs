#![no_main]

use censo::menu;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Console lines arrive as arbitrary text; parsing must never panic
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(option) = menu::parse_option(input) {
            let _ = option.operation_label();
        }
    }
});
