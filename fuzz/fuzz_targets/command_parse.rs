#![no_main]

use heapkit::command::{parse_script, render_script};
use heapkit::simulator::HeapSimulator;
use libfuzzer_sys::fuzz_target;

// Fuzz the script parser with arbitrary text
//
// Parsing must never panic; a script that parses must render back to a
// script that parses to the same commands and replays without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(commands) = parse_script(text) else {
        return;
    };

    let rendered = render_script(&commands);
    assert_eq!(parse_script(&rendered).unwrap(), commands);

    let output = HeapSimulator::new(16).run(&commands);
    assert_eq!(output.len(), commands.len());
});
