//! Strict decimal integer parsing.
//!
//! Accepted grammar: an optional single `-` followed by one or more ASCII
//! digits, and nothing else. No whitespace, no `+`, no radix prefixes.
//! Accumulation is overflow-checked digit by digit; negative numbers are
//! accumulated downwards so that `i32::MIN` is representable.
use crate::error::ParseError;

/// Parses `text` as a signed 32-bit decimal integer.
///
/// ```rust
/// use drillkit::{parse_int, ParseError};
///
/// assert_eq!(parse_int(b"-42"), Ok(-42));
/// assert_eq!(parse_int(b"-"), Err(ParseError::NoDigits));
/// assert_eq!(parse_int(b"99999999999999999999"), Err(ParseError::NumberTooLarge));
/// ```
pub fn parse_int(text: &[u8]) -> Result<i32, ParseError> {
    let (negative, digits) = match text {
        [] => return Err(ParseError::EmptyInput),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, text),
    };
    let sign_len = text.len() - digits.len();

    let run = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if run == 0 {
        return Err(ParseError::NoDigits);
    }

    let mut value: i32 = 0;
    for &b in &digits[..run] {
        let digit = i32::from(b - b'0');
        value = if negative {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .ok_or(ParseError::NumberTooSmall)?
        } else {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(ParseError::NumberTooLarge)?
        };
    }

    if let Some(&byte) = digits.get(run) {
        return Err(ParseError::TrailingGarbage {
            offset: sign_len + run,
            byte,
        });
    }

    Ok(value)
}

/// [`parse_int`] for text that is already a `str`.
pub fn parse_int_str(text: &str) -> Result<i32, ParseError> {
    parse_int(text.as_bytes())
}
