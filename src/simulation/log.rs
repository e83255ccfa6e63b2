//! Inspection logs that keep lines in memory or print them.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::*;

use crate::collaborators::InspectionLog;
use crate::error::{InspectorError, Result};

/// Keeps every batch of lines it receives
#[derive(Debug, Default)]
pub struct MemoryLog {
    batches: Mutex<Vec<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged batches, one per inspection, in call order
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl InspectionLog for MemoryLog {
    fn log(&self, lines: &[String]) -> Result<()> {
        self.batches
            .lock()
            .map_err(|e| InspectorError::Log(e.to_string()))?
            .push(lines.to_vec());
        Ok(())
    }
}

/// Writes one status line per row, optionally colorizing the verdict
pub struct ConsoleLog<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleLog<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsoleLog<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn paint(&self, line: &str) -> String {
        if !self.color {
            return line.to_string();
        }
        match line.rsplit_once('#') {
            Some((head, "WARNING")) => format!("{}#{}", head, "WARNING".red().bold()),
            Some((head, "OK")) => format!("{}#{}", head, "OK".green()),
            _ => line.to_string(),
        }
    }
}

impl<W: Write + Send> InspectionLog for ConsoleLog<W> {
    fn log(&self, lines: &[String]) -> Result<()> {
        let mut out = self.out.lock().map_err(|e| InspectorError::Log(e.to_string()))?;
        for line in lines {
            writeln!(out, "{}", self.paint(line))?;
        }
        out.flush()?;
        Ok(())
    }
}
