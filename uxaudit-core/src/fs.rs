//! Filesystem abstractions used for source inspection.

use std::io;
use std::path::Path;

use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read a file, mapping "not found" to `Ok(None)`.
pub fn read_optional<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Option<String>> {
    match fs.read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(crate::UxAuditError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::{MockFileSystem, StdFileSystem, read_optional};
    use crate::UxAuditError;
    use crate::fs::FileSystem;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn std_filesystem_reads_files() {
        let root = std::env::temp_dir().join(unique_dir_name());
        std::fs::create_dir_all(&root).expect("create temp dir");
        let file_path = root.join("Navbar.tsx");
        std::fs::write(&file_path, "<nav />").expect("write test file");

        let fs = StdFileSystem::new();
        let contents = fs.read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "<nav />");

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn read_optional_maps_missing_to_none() {
        let missing = std::env::temp_dir().join(unique_dir_name()).join("nope.tsx");
        let contents = read_optional(&StdFileSystem::new(), &missing).expect("no error");
        assert!(contents.is_none());
    }

    #[test]
    fn read_optional_propagates_other_errors() {
        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string().returning(|_| {
            Err(UxAuditError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied",
            )))
        });
        let result = read_optional(&fs, &PathBuf::from("src/app/page.tsx"));
        assert!(result.is_err());
    }

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("uxaudit_core_test_{nanos}"))
    }
}
