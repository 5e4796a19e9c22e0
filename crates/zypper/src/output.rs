//! Destination for zypper's standard output

/// A contiguous region of an output sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSpan {
    pub offset: usize,
    pub len: usize,
}

impl OutputSpan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Append-only text sink that receives subcommand output
pub trait OutputSink {
    /// Current write position
    fn position(&self) -> usize;

    /// Append `text` at the current position
    fn write_output(&mut self, text: &str);
}

impl OutputSink for String {
    fn position(&self) -> usize {
        self.len()
    }

    fn write_output(&mut self, text: &str) {
        self.push_str(text);
    }
}
