use crate::ports::{ConfigStore, Console};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Console, S: ConfigStore> {
    console: C,
    store: S,
}

impl<C: Console, S: ConfigStore> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(console: C, store: S) -> Self {
        Self { console, store }
    }

    /// Get a reference to the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Get a reference to the output store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
