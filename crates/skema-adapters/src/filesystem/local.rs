//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use skema_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkemaResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkemaResult<()> {
        // std::fs::create_dir_all already treats an existing directory as
        // success; AlreadyExists is still matched explicitly so a racing
        // concurrent creation cannot surface as a failure. A file sitting at
        // the target path is a real failure, not idempotence.
        match std::fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(ApplicationError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> SkemaResult<()> {
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::FileWriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("src/order-total");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));
    }

    #[test]
    fn write_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("a.ts");

        fs.write_file(&file, "export class A {}").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "export class A {}");
    }

    #[test]
    fn create_dir_over_file_reports_cause() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("blocker");
        std::fs::write(&file, "x").unwrap();

        // A file in the way is not "already exists" for a directory.
        let err = fs.create_dir_all(&file.join("child")).unwrap_err();
        assert!(err.to_string().contains("could not create directory"));
    }
}
