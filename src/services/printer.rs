use crate::domain::constants::HELLO;
use crate::domain::models::Step;
use std::io::{self, Write};

#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error("output closed by reader")]
    Closed,
    #[error("failed to write output")]
    Write(#[source] io::Error),
}

impl From<io::Error> for PrintError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::BrokenPipe {
            PrintError::Closed
        } else {
            PrintError::Write(err)
        }
    }
}

/// Stateless line printer over any sink. Owns nothing but the sink itself.
pub struct Printer<W: Write> {
    sink: W,
}

impl Printer<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn print_hello(&mut self) -> Result<(), PrintError> {
        self.line(HELLO)
    }

    pub fn print(&mut self, text: &str) -> Result<(), PrintError> {
        self.line(text)
    }

    pub fn print_multiple(&mut self, first: &str, second: &str) -> Result<(), PrintError> {
        self.sink.write_all(first.as_bytes())?;
        self.sink.write_all(second.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }

    /// Writes the rendered step and hands the line back to the caller.
    pub fn emit(&mut self, step: &Step) -> Result<String, PrintError> {
        match step {
            Step::Hello => self.print_hello()?,
            Step::Print { text } => self.print(text)?,
            Step::PrintMultiple { first, second } => self.print_multiple(first, second)?,
        }
        log::debug!("emitted {:?}", step);
        Ok(step.render())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn line(&mut self, text: &str) -> Result<(), PrintError> {
        self.sink.write_all(text.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}
