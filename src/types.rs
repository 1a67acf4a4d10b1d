/// A contiguous run of `k` elements in the sorted sequence.
///
/// `start` indexes into the sorted sequence, not the caller's input order.
/// Because the run is sorted ascending, `low` is its first element and `high`
/// its last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Zero-based start index in the sorted sequence.
    pub start: usize,
    /// Smallest value in the window.
    pub low: i64,
    /// Largest value in the window.
    pub high: i64,
}

impl Window {
    /// The window's max-min span.
    ///
    /// Computed as an unsigned distance so that `[i64::MIN, i64::MAX]` does
    /// not overflow.
    pub fn span(&self) -> u64 {
        self.high.abs_diff(self.low)
    }
}

/// A parsed batch input: window size and the unordered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub k: usize,
    pub values: Vec<i64>,
}

impl Problem {
    pub fn new(k: usize, values: Vec<i64>) -> Self {
        Self { k, values }
    }
}
