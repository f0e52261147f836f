//! Client-side file registry
//!
//! Session-only CRUD over the files the user has picked for upload. Only
//! PDF files are accepted, matching what the extraction backend allows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ViewerError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub size: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct FileRegistry {
    entries: BTreeMap<String, FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_allowed(name: &str) -> bool {
        name.rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
    }

    /// Add a file, replacing any entry with the same name.
    pub fn add(&mut self, name: String, size: Option<f64>) -> Result<(), ViewerError> {
        if !Self::is_allowed(&name) {
            return Err(ViewerError::UnsupportedFile(name));
        }
        self.entries
            .insert(name.clone(), FileEntry { name, size });
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Remove everything; returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn list(&self) -> Vec<&FileEntry> {
        self.entries.values().collect()
    }
}
