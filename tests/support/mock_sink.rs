use std::io;

use max_min::ResultSink;

#[derive(Default, Debug, Clone)]
pub struct MockSink {
    pub written: Vec<u64>,
    pub finished: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MockSink {
    fn write_result(&mut self, value: u64) -> io::Result<()> {
        self.written.push(value);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
