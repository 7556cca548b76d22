//! Dual-sink output routing.
//!
//! Every header and data line goes to the terminal, colorized, and to the
//! optional log file as plain text. Screen chrome (clear sequence, banner)
//! is terminal-only. The log copy is written first, and a closed terminal
//! (e.g. stdout piped into `head`) silences the terminal without stopping
//! the log.

use colored::*;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::core::monitor::SeverityBand;
use crate::error::{Result, SyspeekError};

type Writer = Box<dyn Write + Send>;

pub struct OutputSink {
    terminal: Writer,
    terminal_closed: bool,
    log: Option<Writer>,
}

impl OutputSink {
    /// Terminal on stdout, plus a log file opened in create-or-append mode
    pub fn open(log_path: Option<&Path>) -> Result<Self> {
        let log = match log_path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| SyspeekError::log_file(path, e))?;
                log::info!("Mirroring output to {}", path.display());
                Some(Box::new(file) as Writer)
            }
            None => None,
        };

        Ok(Self::new(Box::new(io::stdout()), log))
    }

    pub fn new(terminal: Writer, log: Option<Writer>) -> Self {
        Self {
            terminal,
            terminal_closed: false,
            log,
        }
    }

    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }

    /// Write a line to both sinks, colored on the terminal by severity
    pub fn emit(&mut self, text: &str, severity: Option<SeverityBand>) -> Result<()> {
        let painted = match severity {
            Some(SeverityBand::Critical) => text.red().to_string(),
            Some(SeverityBand::Warning) => text.yellow().to_string(),
            Some(SeverityBand::Normal) => text.green().to_string(),
            None => text.to_string(),
        };
        self.log_only(text)?;
        self.write_terminal(&format!("{}\n", painted))
    }

    /// Uncolored line on both sinks
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.emit(text, None)
    }

    pub fn blank(&mut self) -> Result<()> {
        self.emit("", None)
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        self.log_only(title)?;
        self.write_terminal(&format!("{}\n", title.cyan()))
    }

    /// Raw text for the terminal only; no newline is appended
    pub fn terminal_only(&mut self, text: &str) -> Result<()> {
        self.write_terminal(text)
    }

    /// Line for the log file only; a no-op without one
    pub fn log_only(&mut self, text: &str) -> Result<()> {
        if let Some(log) = self.log.as_mut() {
            writeln!(log, "{}", text)?;
            log.flush()?;
        }
        Ok(())
    }

    fn write_terminal(&mut self, text: &str) -> Result<()> {
        if self.terminal_closed {
            return Ok(());
        }

        let written = self
            .terminal
            .write_all(text.as_bytes())
            .and_then(|()| self.terminal.flush());
        match written {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Terminal closed, continuing with log output only");
                self.terminal_closed = true;
                Ok(())
            }
            other => Ok(other?),
        }
    }
}
