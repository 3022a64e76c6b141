//! Shared in-memory file backing store for test doubles.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// In-memory project tree: file contents plus the set of executable paths.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<String, String>>>,
    pub(crate) executables: Arc<Mutex<BTreeSet<String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }
}
