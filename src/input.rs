//! Validated console input.
//!
//! Prompts are repeated until the user enters a whole number inside the
//! requested range. Works over any `BufRead`/`Write` pair so it can be
//! driven from stdin/stdout or from in-memory buffers.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

/// Why a line of input was rejected.
///
/// The `Display` strings are the messages shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line was not a whole number.
    #[error("Invalid input. Please enter a whole number.")]
    NonNumeric(String),

    /// The number was outside the accepted range. Numbers too large for
    /// an `i64` carry the saturated value.
    #[error("Input must be between {min} and {max}. Please try again.")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Parse one line of input as a whole number in `[min, max]`.
///
/// Surrounding whitespace is ignored.
pub fn parse_in_range(raw: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(e) => {
            let value = match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(InputError::NonNumeric(trimmed.to_string())),
            };
            return Err(InputError::OutOfRange { value, min, max });
        }
    };

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { value, min, max })
    }
}

/// Prompt until a whole number in `[min, max]` is entered.
///
/// Rejected lines print the matching [`InputError`] message and prompt
/// again, without limit. The only way out other than valid input is the
/// reader reaching end of input, which is returned as
/// [`io::ErrorKind::UnexpectedEof`].
pub fn prompt_in_range<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    min: i64,
    max: i64,
) -> Result<i64>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            )
            .into());
        }

        match parse_in_range(&line, min, max) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(input = line.trim(), error = ?e, "rejected input");
                writeln!(writer, "{}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const NON_NUMERIC: &str = "Invalid input. Please enter a whole number.";
    const OUT_OF_RANGE: &str = "Input must be between 0 and 10. Please try again.";

    fn run(input: &str) -> (Result<i64>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_in_range(&mut reader, &mut output, "> ", 0, 10);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_in_range("7", 0, 10), Ok(7));
        assert_eq!(parse_in_range("  3 \n", 0, 10), Ok(3));
        assert_eq!(parse_in_range("0", 0, 10), Ok(0));
        assert_eq!(parse_in_range("10", 0, 10), Ok(10));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            parse_in_range("abc", 0, 10),
            Err(InputError::NonNumeric("abc".to_string()))
        );
        assert!(matches!(
            parse_in_range("4.5", 0, 10),
            Err(InputError::NonNumeric(_))
        ));
        assert!(matches!(parse_in_range("", 0, 10), Err(InputError::NonNumeric(_))));
        assert_eq!(
            parse_in_range("11", 0, 10),
            Err(InputError::OutOfRange {
                value: 11,
                min: 0,
                max: 10
            })
        );
        assert!(matches!(
            parse_in_range("-1", 0, 10),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        assert_eq!(
            parse_in_range("99999999999999999999", 0, 10),
            Err(InputError::OutOfRange {
                value: i64::MAX,
                min: 0,
                max: 10
            })
        );
        assert_eq!(
            parse_in_range("-99999999999999999999", 0, 10),
            Err(InputError::OutOfRange {
                value: i64::MIN,
                min: 0,
                max: 10
            })
        );

        let (result, output) = run("99999999999999999999\n5\n");
        assert_eq!(result.unwrap(), 5);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 1);
        assert_eq!(output.matches(NON_NUMERIC).count(), 0);
    }

    #[test]
    fn test_accepts_first_valid() {
        let (result, output) = run("6\n");
        assert_eq!(result.unwrap(), 6);
        assert_eq!(output, "> ");
    }

    #[test]
    fn test_non_numeric_then_valid() {
        let (result, output) = run("abc\n4\n");
        assert_eq!(result.unwrap(), 4);
        assert_eq!(output.matches(NON_NUMERIC).count(), 1);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 0);
        assert_eq!(output.matches("> ").count(), 2);
    }

    #[test]
    fn test_out_of_range_then_valid() {
        let (result, output) = run("42\n9\n");
        assert_eq!(result.unwrap(), 9);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 1);
        assert_eq!(output.matches(NON_NUMERIC).count(), 0);
    }

    #[test]
    fn test_keeps_prompting() {
        let (result, output) = run("x\n-3\ny\n11\n2\n");
        assert_eq!(result.unwrap(), 2);
        assert_eq!(output.matches(NON_NUMERIC).count(), 2);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 2);
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, output) = run("nope\n");
        let err = result.unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(output.matches(NON_NUMERIC).count(), 1);
    }
}
