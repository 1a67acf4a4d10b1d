use std::path::PathBuf;

use crate::io::{FileSink, WriterSink};
use crate::traits::ResultSink;

/// Environment variable naming the result file.
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Result file; stdout when `None`.
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. An empty value
    /// counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_path = lookup(OUTPUT_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self { output_path }
    }

    /// The configured sink. A result file is only touched once a result is
    /// written.
    pub fn sink(&self) -> Box<dyn ResultSink> {
        match &self.output_path {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(WriterSink::new(std::io::stdout().lock())),
        }
    }
}
