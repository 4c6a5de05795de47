use crate::prelude::println;

/// Destination of result lines.
///
/// The connector makes exactly one `info` call per result line, in the final
/// sorted order, and writes nothing else through it.
pub trait ResultLog {
    fn info(&mut self, line: &str);
}

/// Writes each result line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLog;

impl ResultLog for StdoutLog {
    fn info(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps result lines in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturedLog {
    lines: Vec<String>,
}

#[cfg(test)]
impl CapturedLog {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
impl ResultLog for CapturedLog {
    fn info(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
