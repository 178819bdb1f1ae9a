use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// In-memory config store for testing.
#[derive(Default)]
pub struct MemoryConfigStore {
    pub files: RefCell<BTreeMap<String, String>>,
    pub read_only: bool,
}

#[allow(dead_code)]
impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn file(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn ensure_writable(&self) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::WritePermissionDenied(PathBuf::from("memory")));
        }
        Ok(())
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        PathBuf::from("memory").join(file_name)
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        self.ensure_writable()?;
        self.files.borrow_mut().insert(file_name.to_string(), contents.to_string());
        Ok(self.path_for(file_name))
    }
}
