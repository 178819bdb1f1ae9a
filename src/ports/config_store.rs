use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the directory generated files are written into.
pub trait ConfigStore {
    /// Fail with `AppError::WritePermissionDenied` unless new files can be created.
    fn ensure_writable(&self) -> Result<(), AppError>;

    /// Full path `file_name` would be written to.
    fn path_for(&self, file_name: &str) -> PathBuf;

    /// Create or replace `file_name` with `contents`, returning its path.
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError>;
}
