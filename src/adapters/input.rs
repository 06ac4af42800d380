//! # Input Adapter
//!
//! Reads a [`Problem`] from whitespace-separated tokens:
//!
//! ```text
//! n k
//! a_0 a_1 ... a_(n-1)
//! ```
//!
//! Line layout does not matter, only token order. Tokens after the `n`th
//! element are ignored.

use std::io::Read;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::core::error::{ParseError, Result};
use crate::core::Problem;

/// Parse a problem from already-loaded text
pub fn parse_problem(text: &str) -> std::result::Result<Problem, ParseError> {
    let mut tokens = Tokens::new(text);

    let n: i128 = tokens.next_int("n")?;
    if n < 0 {
        return Err(ParseError::NegativeLength(n));
    }
    // Anything past usize::MAX cannot be satisfied and surfaces as MissingElements
    let expected = usize::try_from(n).unwrap_or(usize::MAX);

    let count: i128 = tokens.next_int("k")?;

    let mut values = Vec::new();
    while values.len() < expected {
        match tokens.next_int_opt::<i64>()? {
            Some(v) => values.push(v),
            None => {
                return Err(ParseError::MissingElements {
                    expected,
                    got: values.len(),
                })
            }
        }
    }

    let ignored = tokens.remaining();
    if ignored > 0 {
        warn!(ignored, "ignoring tokens after the last element");
    }
    debug!(n = expected, k = count, "parsed problem");

    Ok(Problem::new(values, count))
}

/// Read all of `reader` and parse it
pub fn read_problem<R: Read>(mut reader: R) -> Result<Problem> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_problem(&text)?)
}

/// Integer widths the tokenizer can produce
trait Integer: FromStr<Err = ParseIntError> {
    const BITS: u32;
}

impl Integer for i64 {
    const BITS: u32 = i64::BITS;
}

impl Integer for i128 {
    const BITS: u32 = i128::BITS;
}

/// Whitespace tokenizer that remembers 1-based token positions
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_int_opt<T: Integer>(&mut self) -> std::result::Result<Option<T>, ParseError> {
        let Some(token) = self.inner.next() else {
            return Ok(None);
        };
        self.position += 1;

        token.parse::<T>().map(Some).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::IntegerOverflow {
                position: self.position,
                token: token.to_string(),
                bits: T::BITS,
            },
            _ => ParseError::InvalidInteger {
                position: self.position,
                token: token.to_string(),
            },
        })
    }

    fn next_int<T: Integer>(&mut self, field: &'static str) -> std::result::Result<T, ParseError> {
        self.next_int_opt()?.ok_or(ParseError::MissingField(field))
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
