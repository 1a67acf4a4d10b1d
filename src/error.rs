//! Error type for the max_min library.
//!
//! Library code returns [`Error`]; the binary wraps it in `anyhow` with
//! context about which stage failed.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No values to choose a window from.
    #[error("invalid input: the value sequence is empty")]
    EmptyInput,

    /// A selector was built with a window of zero elements.
    #[error("invalid input: window size must be at least 1")]
    ZeroWindow,

    /// Window size is not in `1..=n`.
    #[error("invalid input: window size {k} is outside 1..={n}")]
    WindowOutOfRange { k: i64, n: usize },

    /// A line did not hold a base-10 integer.
    #[error("invalid input: line {line}: {text:?} is not an integer")]
    InvalidInteger { line: usize, text: String },

    /// The source ran out before every declared line was read.
    #[error("invalid input: line {line}: expected {expected}, found end of input")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// A non-blank line followed the declared values.
    #[error("invalid input: line {line}: unexpected data after the last value")]
    TrailingInput { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
