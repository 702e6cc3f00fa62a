// shotscale/src/session/mod.rs
use crate::catalog::Catalog;
use crate::core::{ResizeEngine, Result};
use std::io::{BufRead, Write};

const PROMPT: &str =
    "Enter an id to resize the image, \"a\" to resize all, \"c\" to clear the screen, \"q\" to quit\n>> ";

/// One parsed prompt token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Skip,
    Clear,
    Quit,
    All,
    Resize(usize),
    Invalid(String),
}

impl Command {
    /// Anything that is not a literal token is treated as an attempted id.
    pub fn parse(input: &str) -> Self {
        let token = input.trim();

        match token {
            "" => Command::Skip,
            "c" => Command::Clear,
            "q" => Command::Quit,
            "a" => Command::All,
            _ => match token.parse::<usize>() {
                Ok(id) => Command::Resize(id),
                Err(_) => Command::Invalid(token.to_string()),
            },
        }
    }
}

/// Read-eval-act loop over one catalog snapshot. Generic over its streams so
/// tests can feed input and capture output without a terminal.
pub struct InteractiveSession<R, W> {
    catalog: Catalog,
    engine: ResizeEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(catalog: Catalog, engine: ResizeEngine, input: R, output: W) -> Self {
        Self {
            catalog,
            engine,
            input,
            output,
        }
    }

    /// Runs until the operator quits, input ends, or the catalog is empty.
    /// Per-entry resize failures are reported and never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_listing()?;

            if self.catalog.is_empty() {
                writeln!(self.output, "No images to work with.")?;
                break;
            }

            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF behaves like quit
                break;
            }

            match Command::parse(&line) {
                Command::Skip => continue,
                Command::Quit => break,
                Command::Clear => write!(self.output, "\x1b[2J\x1b[1;1H")?,
                Command::All => self.resize_all()?,
                Command::Resize(id) => self.resize_id(id)?,
                Command::Invalid(token) => {
                    writeln!(self.output, "Can not work with '{}'", token)?
                }
            }
        }

        writeln!(self.output, "Job done.")?;
        Ok(())
    }

    fn print_listing(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "-".repeat(60))?;
        for entry in self.catalog.entries() {
            writeln!(self.output, "{:>3}  {}", entry.id, entry.name)?;
        }
        Ok(())
    }

    fn resize_all(&mut self) -> Result<()> {
        for entry in self.catalog.entries() {
            match self.engine.resize(entry) {
                Ok(path) => writeln!(self.output, "Saved {}", path.display())?,
                Err(e) => writeln!(self.output, "Resize failed for {}: {}", entry.name, e)?,
            }
        }
        Ok(())
    }

    fn resize_id(&mut self, id: usize) -> Result<()> {
        match self.catalog.get(id) {
            Some(entry) => match self.engine.resize(entry) {
                Ok(path) => writeln!(self.output, "Saved {}", path.display())?,
                Err(e) => writeln!(self.output, "Resize failed for {}: {}", entry.name, e)?,
            },
            None => writeln!(self.output, "Can not find id {}", id)?,
        }

        Ok(())
    }
}
