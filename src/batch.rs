use crate::error::Result;
use crate::input::read_problem;
use crate::selector::Selector;
use crate::traits::{LineSource, ResultSink};

/// Reads a problem from `source`, writes its minimum span to `sink` and
/// returns it.
///
/// Nothing is written to `sink` unless the whole input was valid.
pub fn run<S: LineSource, W: ResultSink>(source: S, mut sink: W) -> Result<u64> {
    let problem = read_problem(source)?;
    let window = Selector::new(problem.k)?.select(&problem.values)?;
    let span = window.span();
    sink.write_result(span)?;
    sink.finish()?;
    Ok(span)
}
