pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod selector;
pub mod traits;
pub mod types;

pub use crate::batch::run;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::input::read_problem;
pub use crate::io::{FileSink, ReaderSource, WriterSink};
pub use crate::selector::{Selector, SelectorBuilder, min_range, spans, tightest_window};
pub use crate::traits::{LineSource, ResultSink};
pub use crate::types::{Problem, Window};
