//! Scratch buffer: the `.agda` file that accumulates REPL input.

use crate::error::ReflError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An append-only Agda module on disk
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    path: PathBuf,
}

impl ScratchBuffer {
    /// Create a fresh, uniquely named module in `dir` and write its header
    pub fn create_in(dir: &Path) -> Result<Self, ReflError> {
        std::fs::create_dir_all(dir)?;
        let dir = std::path::absolute(dir)?;
        let file = tempfile::Builder::new()
            .prefix("Refl")
            .suffix(".agda")
            .tempfile_in(&dir)?;
        let path = file.into_temp_path().keep().map_err(|e| e.error)?;

        let buffer = Self { path };
        buffer.write_header()?;
        debug!(path = %buffer.path.display(), "Scratch buffer created");
        Ok(buffer)
    }

    /// Reuse an existing file, writing the header only when it is empty
    ///
    /// Relative paths are resolved against the current directory, so the
    /// buffer's parent is always a usable working directory for Agda.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReflError> {
        let buffer = Self {
            path: std::path::absolute(path)?,
        };
        let is_empty = match std::fs::metadata(&buffer.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };
        if is_empty {
            buffer.write_header()?;
        }
        Ok(buffer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Agda module name, which must match the file stem
    pub fn module_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Append one block of source followed by a blank line
    pub fn append(&self, input: &str) -> Result<(), ReflError> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        write!(file, "{}\n\n", input)?;
        Ok(())
    }

    pub fn contents(&self) -> Result<String, ReflError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn write_header(&self) -> Result<(), ReflError> {
        self.append(&format!("module {} where", self.module_name()))
    }
}
