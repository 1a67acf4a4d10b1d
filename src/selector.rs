//! The min-range selector.
//!
//! Once the values are sorted, the tightest set of `k` elements always
//! occupies `k` contiguous sorted positions, so a single scan over the sorted
//! sequence finds the global minimum span.

use log::debug;

use crate::error::{Error, Result};
use crate::types::Window;

/// A validated window size, reusable across inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    k: usize,
}

pub struct SelectorBuilder {
    k: usize,
}

impl Default for SelectorBuilder {
    fn default() -> Self {
        Self { k: 1 }
    }
}

impl SelectorBuilder {
    pub fn window(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn build(self) -> Result<Selector> {
        if self.k == 0 {
            return Err(Error::ZeroWindow);
        }
        Ok(Selector { k: self.k })
    }
}

impl Selector {
    pub fn new(k: usize) -> Result<Self> {
        SelectorBuilder::default().window(k).build()
    }

    pub fn window_size(&self) -> usize {
        self.k
    }

    /// Finds the tightest window in `values`, which may be in any order.
    ///
    /// The caller's slice is left untouched; a sorted copy is scanned.
    pub fn select(&self, values: &[i64]) -> Result<Window> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        self.select_sorted(&sorted)
    }

    /// Like [`Selector::select`] for input that is already ascending.
    pub fn select_sorted(&self, sorted: &[i64]) -> Result<Window> {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        self.check(sorted.len())?;

        let k = self.k;
        let mut best = Window {
            start: 0,
            low: sorted[0],
            high: sorted[k - 1],
        };
        // Strict `<` keeps the lowest start on ties.
        for (start, span) in spans(k, sorted).enumerate().skip(1) {
            if span < best.span() {
                best = Window {
                    start,
                    low: sorted[start],
                    high: sorted[start + k - 1],
                };
            }
        }

        debug!(
            "tightest window of {} over {} values starts at {} (span {})",
            k,
            sorted.len(),
            best.start,
            best.span()
        );
        Ok(best)
    }

    pub fn min_range(&self, values: &[i64]) -> Result<u64> {
        self.select(values).map(|w| w.span())
    }

    fn check(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::WindowOutOfRange {
                k: i64::try_from(self.k).unwrap_or(i64::MAX),
                n,
            });
        }
        Ok(())
    }
}

/// Spans of every `k`-wide window of `sorted`, in start order.
///
/// Yields nothing when `k` is zero or wider than `sorted`.
pub fn spans(k: usize, sorted: &[i64]) -> impl Iterator<Item = u64> + '_ {
    let width = if k == 0 { sorted.len() + 1 } else { k };
    sorted
        .windows(width)
        .map(|w| w[w.len() - 1].abs_diff(w[0]))
}

/// Minimum max-min span over any `k` contiguous elements of `values` once
/// sorted.
///
/// ```
/// assert_eq!(max_min::min_range(3, &[10, 100, 300, 200, 1000, 20, 30]).unwrap(), 20);
/// ```
pub fn min_range(k: usize, values: &[i64]) -> Result<u64> {
    tightest_window(k, values).map(|w| w.span())
}

/// The window achieving [`min_range`], lowest start index on ties.
pub fn tightest_window(k: usize, values: &[i64]) -> Result<Window> {
    // `select` checks k against the length, so skip the builder's check
    Selector { k }.select(values)
}
