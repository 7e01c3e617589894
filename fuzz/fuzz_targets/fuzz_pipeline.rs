#![no_main]
use std::io::{self, Cursor};

use arbitrary::Arbitrary;
use drillkit::{InputOptions, IntInput, NextInt, parse_int};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Session {
    script: Vec<u8>,
    sentinel: String,
    max_line_bytes: Option<u8>,
}

fuzz_target!(|session: Session| {
    if session.sentinel.is_empty() {
        return;
    }
    let options = InputOptions {
        sentinel: session.sentinel,
        max_line_bytes: session.max_line_bytes.map(usize::from),
        ..InputOptions::default()
    };
    let Ok(mut input) =
        IntInput::with_options(Cursor::new(&session.script), io::sink(), io::sink(), options)
    else {
        return;
    };

    // Every value must be a line of the script that parses to it, and the
    // stream can yield at most one value per newline plus one.
    let bound = session.script.iter().filter(|&&b| b == b'\n').count() + 1;
    let mut values = 0;
    loop {
        match input.next_int("") {
            NextInt::Value(value) => {
                values += 1;
                assert!(values <= bound);
                let text = value.to_string();
                assert_eq!(parse_int(text.as_bytes()), Ok(value));
            }
            NextInt::UserStopped | NextInt::AllocationFailed(_) => break,
            NextInt::InputFailed(err) => panic!("in-memory input failed: {err}"),
        }
    }
});
