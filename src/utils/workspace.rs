use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_DIR: &str = "output";
pub const LOGGING_DIR: &str = "logging";
pub const LOG_FILE: &str = "app.log";

/// Directory layout of a generation run: `<root>/output` for CSV files and
/// `<root>/logging/app.log` for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    output_dir: PathBuf,
    logging_dir: PathBuf,
}

impl Workspace {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            output_dir: root.join(OUTPUT_DIR),
            logging_dir: root.join(LOGGING_DIR),
            root,
        }
    }

    /// Creates the output and logging directories if they are missing.
    pub fn prepare(root: impl AsRef<Path>) -> Result<Self> {
        let workspace = Self::new(root);
        fs::create_dir_all(&workspace.output_dir)?;
        fs::create_dir_all(&workspace.logging_dir)?;
        Ok(workspace)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logging_dir(&self) -> &Path {
        &self.logging_dir
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = Workspace::prepare(temp_dir.path()).unwrap();

        assert!(workspace.output_dir().is_dir());
        assert!(workspace.logging_dir().is_dir());
        assert_eq!(
            workspace.log_file(),
            temp_dir.path().join("logging").join("app.log")
        );
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        Workspace::prepare(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("output").join("keep.csv"), "x").unwrap();

        let workspace = Workspace::prepare(temp_dir.path()).unwrap();

        assert!(workspace.output_dir().join("keep.csv").exists());
    }
}
