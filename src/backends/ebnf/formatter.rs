use std::io::{self, Write, BufWriter};

/// Buffers the lines of an EBNF document on their way into the output stream.
pub(crate) struct EbnfFormatter<T: Write> {
    stream: BufWriter<T>,
    lines: usize,
}

impl<T> EbnfFormatter<T>
where
    T: Write,
{
    pub(crate) fn new(writer: T) -> Self {
        Self {
            stream: BufWriter::new(writer),
            lines: 0,
        }
    }

    pub(crate) fn write<S: AsRef<str>>(&mut self, line: S) -> io::Result<()> {
        self.lines += 1;
        writeln!(&mut self.stream, "{}", line.as_ref())
    }

    /// `width` spaces followed by `line`.
    pub(crate) fn write_indented<S: AsRef<str>>(&mut self, width: usize, line: S) -> io::Result<()> {
        self.lines += 1;
        writeln!(&mut self.stream, "{:width$}{}", "", line.as_ref(), width = width)
    }

    /// Flush all buffered lines and return how many were written.
    pub(crate) fn finish(mut self) -> io::Result<usize> {
        self.stream.flush()?;
        Ok(self.lines)
    }
}
