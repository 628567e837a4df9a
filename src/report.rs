//! Destinations for `REPORT` output.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the robot writes its reports.
///
/// Each report is a single line. `File` appends to the given path, creating
/// it if needed; the file is opened per write so an external reader sees
/// every report as soon as it is issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportSink {
    /// Standard output.
    #[default]
    Stdout,
    /// Append-only text file.
    File(PathBuf),
    /// Collected in memory, for embedding and tests.
    Buffer(Vec<String>),
}

impl ReportSink {
    /// Writes one report line to the sink.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")
            }
            Self::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{line}")
            }
            Self::Buffer(lines) => {
                lines.push(line.to_owned());
                Ok(())
            }
        }
    }

    /// Lines collected so far by a `Buffer` sink; empty for the others.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Buffer(lines) => lines.as_slice(),
            _ => &[],
        }
    }
}

impl From<Option<PathBuf>> for ReportSink {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}
