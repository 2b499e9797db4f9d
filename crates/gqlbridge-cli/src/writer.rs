//! Writing generated units to the output directory

use gqlbridge_codegen::GeneratedUnit;
use gqlbridge_core::{GenError, GenResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of [`OutputWriter::write_all`]
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Files left untouched because they existed and overwrite is off
    pub skipped: Vec<PathBuf>,
    pub errors: Vec<GenError>,
}

impl WriteReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Writes generated units as `<dir>/<file_name>`
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    overwrite: bool,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> GenResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| self.output_error(&self.dir, source))
    }

    /// Remove `*.java` files from the output directory. Other files stay.
    pub fn clean(&self) -> GenResult<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(self.output_error(&self.dir, source)),
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|source| self.output_error(&self.dir, source))?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "java") {
                fs::remove_file(&path).map_err(|source| self.output_error(&path, source))?;
                tracing::debug!(path = %path.display(), "removed");
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Write every unit. A failure is recorded and the remaining units are
    /// still written.
    pub fn write_all(&self, units: &[GeneratedUnit]) -> WriteReport {
        let mut report = WriteReport::default();

        if let Err(e) = self.ensure_dir() {
            report.errors.push(e);
            return report;
        }

        for unit in units {
            let path = self.dir.join(&unit.file_name);

            if !self.overwrite && path.exists() {
                tracing::debug!(path = %path.display(), "exists, not overwriting");
                report.skipped.push(path);
                continue;
            }

            match fs::write(&path, &unit.content) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), bytes = unit.content.len(), "wrote");
                    report.written.push(path);
                }
                Err(source) => {
                    tracing::warn!(path = %path.display(), error = %source, "write failed");
                    report.errors.push(self.output_error(&path, source));
                }
            }
        }

        report
    }

    fn output_error(&self, path: &Path, source: io::Error) -> GenError {
        GenError::Output {
            path: path.to_path_buf(),
            source,
        }
    }
}
