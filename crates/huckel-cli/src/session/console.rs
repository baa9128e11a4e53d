use super::input::parse_atom_count;
use std::io::{self, BufRead, Write};

/// Line-oriented console over any reader and writer. `None` from a read means end of input.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Re-prompts until the input is an integer of at least `min`.
    pub fn prompt_count(&mut self, prompt: &str, min: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_atom_count(&line, min) {
                Ok(n) => return Ok(Some(n)),
                Err(e) => self.println(&e.to_string())?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
