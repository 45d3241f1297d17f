//! Finished G-code programs.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::CamToolResult;

/// An emitted G-code program. Lines are fixed once the program is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GCodeProgram {
    lines: Vec<String>,
}

impl GCodeProgram {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the program as UTF-8 text, one instruction per line.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> CamToolResult<()> {
        writer.write_all(self.to_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the program to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> CamToolResult<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for GCodeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
