use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::{debug_log, errors::errors::DriverError};

use super::report::{scan, ScanOutput};

/// Supplies the full source text before a scan starts.
pub trait ReportSource {
    fn name(&self) -> String;
    fn read_source(&self) -> Result<String, DriverError>;
}

/// Receives each finished report by file name.
pub trait ReportSink {
    fn write_report(&mut self, name: &str, contents: &str) -> Result<(), DriverError>;
}

pub struct FsSource {
    path: PathBuf,
}

impl FsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FsSource { path: path.into() }
    }
}

impl ReportSource for FsSource {
    fn name(&self) -> String {
        self.path.as_os_str().to_string_lossy().into_owned()
    }

    fn read_source(&self) -> Result<String, DriverError> {
        debug_log!("reading {}", self.path.display());

        fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DriverError::SourceNotFound {
                    path: self.path.clone(),
                }
            } else {
                DriverError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }
}

/// Writes reports as files inside one directory, creating it if needed.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl ReportSink for DirectorySink {
    fn write_report(&mut self, name: &str, contents: &str) -> Result<(), DriverError> {
        let path = self.dir.join(name);
        debug_log!("writing {}", path.display());

        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, contents))
            .map_err(|source| DriverError::Write { path, source })
    }
}

/// Reads the source, runs one scan and writes all three reports.
pub fn run(
    source: &impl ReportSource,
    sink: &mut impl ReportSink,
) -> Result<(String, ScanOutput), DriverError> {
    let text = source.read_source()?;
    let output = scan(&text);

    for (name, contents) in output.reports() {
        sink.write_report(name, &contents)?;
    }

    Ok((text, output))
}
