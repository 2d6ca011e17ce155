use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dani_logging::dani_warn;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Fail unless `dir` exists and is a directory. Never creates anything.
pub fn require_output_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir)
        .map_err(|e| PersistError::OutputDir(format!("{}: {e}", dir.display())))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir(format!(
            "{}: path is not a directory",
            dir.display()
        )));
    }
    Ok(())
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        require_output_dir(dir)?;
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Remove `dir` with everything in it, then create it empty.
pub fn reset_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.is_dir() {
        dani_warn!("Removing {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    ensure_output_dir(dir)
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
///
/// A reader of `dir` sees either no file or the complete one.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        require_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
