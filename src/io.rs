//! Adapters from `std::io` to the batch seams.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::traits::{LineSource, ResultSink};

/// Line source over any buffered reader, e.g. locked stdin.
pub struct ReaderSource<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.next()
    }
}

/// Writes the result as one decimal line to any writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn write_result(&mut self, value: u64) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Writes the result to a file.
///
/// The file is created (or truncated) on the first write, so an existing
/// file is left alone when a run fails before producing a result.
pub struct FileSink {
    path: PathBuf,
    inner: Option<WriterSink<BufWriter<File>>>,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            inner: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> io::Result<&mut WriterSink<BufWriter<File>>> {
        let inner = match self.inner.take() {
            Some(inner) => inner,
            None => {
                let file = File::create(&self.path)?;
                debug!("writing result to {}", self.path.display());
                WriterSink::new(BufWriter::new(file))
            }
        };
        Ok(self.inner.insert(inner))
    }
}

impl ResultSink for FileSink {
    fn write_result(&mut self, value: u64) -> io::Result<()> {
        self.open()?.write_result(value)
    }

    fn finish(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(inner) => inner.finish(),
            None => Ok(()),
        }
    }
}
