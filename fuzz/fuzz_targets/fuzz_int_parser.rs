#![no_main]
use drillkit::{ParseError, parse_int};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let ours = parse_int(data);

    // Outside of a leading '+', which is rejected here, the accepted language
    // is exactly what `str::parse::<i32>` accepts.
    let reference = match std::str::from_utf8(data) {
        Ok(text) if !text.starts_with('+') => text.parse::<i32>().ok(),
        _ => None,
    };

    match ours {
        Ok(value) => assert_eq!(reference, Some(value), "{data:?}"),
        Err(ParseError::TrailingGarbage { offset, byte }) => {
            assert!(reference.is_none());
            assert_eq!(data.get(offset), Some(&byte));
            assert!(!byte.is_ascii_digit());
        }
        Err(ParseError::EmptyInput) => assert!(data.is_empty()),
        Err(_) => assert!(reference.is_none(), "{data:?}"),
    }
});
