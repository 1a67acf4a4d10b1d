use std::io;

/// Where the batch reads its line protocol from.
pub trait LineSource {
    /// The next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Option<io::Result<String>>;
}

/// Where the batch delivers its result.
pub trait ResultSink {
    fn write_result(&mut self, value: u64) -> io::Result<()>;

    // Default for sinks that write through immediately
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        (**self).next_line()
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn write_result(&mut self, value: u64) -> io::Result<()> {
        (**self).write_result(value)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn write_result(&mut self, value: u64) -> io::Result<()> {
        (**self).write_result(value)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
