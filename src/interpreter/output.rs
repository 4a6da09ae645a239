/// Line-oriented output consumed by `say`.
///
/// The interpreter depends only on "append a line of text"; the caller
/// owns the concrete sink and injects it for the length of a run.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);
}

/// Writes each line to standard output.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Collects lines in memory. Used by the test suites and anywhere output
/// needs to be inspected after a run.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
