use crate::error::{Result, ReviveError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const DOCUMENT_EXTENSION: &str = "yaml";

/// Named project documents.
pub trait ProjectStore {
    /// Stores a new document. Fails with [`ReviveError::Conflict`] if `name`
    /// already exists, leaving the existing document untouched.
    fn create(&self, name: &str, content: &str) -> Result<()>;

    fn read(&self, name: &str) -> Result<String>;

    fn delete(&self, name: &str) -> Result<()>;

    /// Stored names in ascending order.
    fn list(&self) -> Result<Vec<String>>;

    /// Where the document lives on disk, if the store is file-backed.
    fn path(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ReviveError::Config(
            "Project name cannot be empty".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ReviveError::Config(format!(
            "Project name '{}' cannot be used as a file name",
            name
        )));
    }
    Ok(())
}

/// One `<name>.yaml` file per project inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, name: &str) -> Result<PathBuf> {
        check_name(name)?;
        Ok(self.dir.join(format!("{}.{}", name, DOCUMENT_EXTENSION)))
    }

    /// Creates `name` exclusively and fills it with `write` under an
    /// exclusive lock. A document that could not be fully written is removed
    /// again so it never blocks a later create.
    fn create_with<F>(&self, name: &str, write: F) -> Result<()>
    where
        F: FnOnce(&mut File) -> std::io::Result<()>,
    {
        let path = self.document_path(name)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ReviveError::Config(format!(
                "Failed to create projects directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ReviveError::Conflict(format!(
                    "{} ({})",
                    name,
                    path.display()
                )));
            }
            Err(e) => return Err(ReviveError::Io(e)),
        };

        if let Err(e) = write_locked(&mut file, write) {
            drop(file);
            if let Err(remove_err) = std::fs::remove_file(&path) {
                tracing::warn!(
                    "Failed to remove incomplete document {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(ReviveError::Config(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!("Saved project '{}' to {}", name, path.display());
        Ok(())
    }
}

fn write_locked<F>(file: &mut File, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    file.try_lock_exclusive()?;

    let written = write(file).and_then(|_| file.sync_all());

    if let Err(e) = file.unlock() {
        tracing::warn!("Failed to release write lock: {}", e);
    }
    written
}

impl ProjectStore for FileStore {
    fn create(&self, name: &str, content: &str) -> Result<()> {
        self.create_with(name, |file| file.write_all(content.as_bytes()))
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.document_path(name)?;
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReviveError::NotFound(format!("project '{}'", name)),
            _ => ReviveError::Io(e),
        })
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.document_path(name)?;
        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReviveError::NotFound(format!("project '{}'", name)),
            _ => ReviveError::Io(e),
        })?;
        tracing::info!("Deleted project '{}'", name);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ReviveError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn path(&self, name: &str) -> Option<PathBuf> {
        self.document_path(name).ok()
    }
}
