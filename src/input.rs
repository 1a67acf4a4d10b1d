//! The batch line protocol.
//!
//! Line 1 holds n, line 2 holds k, then n lines hold one integer each.
//! Surrounding whitespace on a line is ignored, as are blank lines after the
//! last value.

use log::debug;

use crate::error::{Error, Result};
use crate::traits::LineSource;
use crate::types::Problem;

struct Reader<S> {
    source: S,
    line: usize,
}

impl<S: LineSource> Reader<S> {
    fn next(&mut self) -> Result<Option<String>> {
        match self.source.next_line() {
            Some(line) => {
                self.line += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn expect_int(&mut self, expected: &'static str) -> Result<i64> {
        let line = self.line + 1;
        let text = self.next()?.ok_or(Error::UnexpectedEof { line, expected })?;
        let trimmed = text.trim();
        trimmed.parse::<i64>().map_err(|_| Error::InvalidInteger {
            line,
            text: trimmed.to_string(),
        })
    }
}

/// Reads one [`Problem`] from `source`, validating sizes as it goes.
pub fn read_problem<S: LineSource>(source: S) -> Result<Problem> {
    let mut reader = Reader { source, line: 0 };

    let n = reader.expect_int("the value count")?;
    let k = reader.expect_int("the window size")?;

    // A negative count is as empty as zero.
    if n <= 0 {
        return Err(Error::EmptyInput);
    }
    // Only fails on targets where usize is narrower than 64 bits.
    let n = usize::try_from(n).map_err(|_| Error::InvalidInteger {
        line: 1,
        text: n.to_string(),
    })?;
    if k <= 0 || k as u64 > n as u64 {
        return Err(Error::WindowOutOfRange { k, n });
    }

    let mut values = Vec::with_capacity(n.min(1 << 20));
    for _ in 0..n {
        values.push(reader.expect_int("a value")?);
    }

    while let Some(extra) = reader.next()? {
        if !extra.trim().is_empty() {
            return Err(Error::TrailingInput { line: reader.line });
        }
    }

    debug!("read {} values with window size {}", n, k);
    Ok(Problem::new(k as usize, values))
}
