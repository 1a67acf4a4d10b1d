use std::collections::VecDeque;
use std::io;

use max_min::LineSource;

pub struct MockSource {
    lines: VecDeque<String>,
}

impl MockSource {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Builds the n / k / values protocol for `values`.
    pub fn problem(k: i64, values: &[i64]) -> Self {
        let mut lines = VecDeque::with_capacity(values.len() + 2);
        lines.push_back(values.len().to_string());
        lines.push_back(k.to_string());
        lines.extend(values.iter().map(i64::to_string));
        Self { lines }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for MockSource {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.pop_front().map(Ok)
    }
}
