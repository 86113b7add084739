use crate::cli::style::Palette;
use crate::config::toml_config::ReplConfig;
use crate::core::pretty::PrettyNumbers;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// What the shell does with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Quit,
    Formatted(String),
    Rejected(String),
}

/// Read-eval-print loop around [`PrettyNumbers`].
pub struct Repl {
    formatter: PrettyNumbers,
    config: ReplConfig,
    palette: Palette,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        let palette = Palette::new(config.color);
        Self {
            formatter: PrettyNumbers::new(),
            config,
            palette,
        }
    }

    pub fn evaluate(&self, line: &str) -> Step {
        if line.eq_ignore_ascii_case("q") {
            return Step::Quit;
        }

        match self.formatter.pretty(line) {
            Ok(pretty) => Step::Formatted(pretty),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                Step::Rejected(e.to_string())
            }
        }
    }

    /// Prompts until `q` or end of input, then prints the farewell banner.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<()> {
        if self.config.banner {
            for line in self.palette.welcome() {
                writeln!(output, "{line}")?;
            }
        }

        let mut buffer = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                tracing::debug!("End of input, leaving the prompt");
                break;
            }
            let line = buffer.trim_end_matches(['\r', '\n']);

            match self.evaluate(line) {
                Step::Quit => break,
                Step::Formatted(pretty) => {
                    writeln!(output, "{}", self.palette.success(&format!("Pretty: {pretty}")))?;
                }
                Step::Rejected(message) => {
                    writeln!(output, "{}", self.palette.failure(&format!("{message}\n")))?;
                }
            }
        }

        if self.config.banner {
            for line in self.palette.farewell() {
                writeln!(output, "{line}")?;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Formats each value once. Returns how many values were rejected.
    pub fn format_all<W: Write, E: Write>(
        &self,
        values: &[String],
        output: &mut W,
        errors: &mut E,
    ) -> Result<usize> {
        let mut rejected = 0;
        for value in values {
            match self.formatter.pretty(value) {
                Ok(pretty) => writeln!(output, "{pretty}")?,
                Err(e) => {
                    rejected += 1;
                    writeln!(errors, "{}: {}", value, self.palette.failure(&e.to_string()))?;
                }
            }
        }
        Ok(rejected)
    }
}
