//! Line-oriented console abstraction

use std::io::{self, BufRead, Write};

/// What the view needs from a terminal.
pub trait Console {
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn print_line(&mut self, text: &str) -> io::Result<()>;
    /// Next input line without its line terminator, `None` once input is exhausted.
    fn input_line(&mut self) -> io::Result<Option<String>>;
}

pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self { Self { reader, writer } }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self { Self::new(io::stdin().lock(), io::stdout()) }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn input_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Feeds fixed input lines and records everything printed.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<I: IntoIterator<Item = &'static str>>(inputs: I) -> Self {
        Self { inputs: inputs.into_iter().map(String::from).collect(), output: String::new() }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> { self.output.push_str(text); Ok(()) }
    fn print_line(&mut self, text: &str) -> io::Result<()> { self.output.push_str(text); self.output.push('\n'); Ok(()) }
    fn input_line(&mut self) -> io::Result<Option<String>> { Ok(self.inputs.pop_front()) }
}
