use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ConfigStore;

const PROBE_FILE: &str = "nginxAutoConfig.test.txt";

/// Writes generated files into a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root: PathBuf,
}

impl FilesystemConfigStore {
    /// Create a store for the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn ensure_writable(&self) -> Result<(), AppError> {
        let probe = self.root.join(PROBE_FILE);
        match fs::File::create(&probe) {
            Ok(file) => {
                drop(file);
                fs::remove_file(&probe)?;
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(AppError::WritePermissionDenied(self.root.clone()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        let path = self.path_for(file_name);
        fs::write(&path, contents)
            .map_err(|source| AppError::WriteFailed { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(path)
    }
}
