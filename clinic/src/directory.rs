use tracing::debug;

use crate::records::Named;

/// Append-only list searched linearly by name. Duplicate names are kept;
/// lookups return the earliest registration.
#[derive(Debug, Clone)]
pub struct Directory<T> {
    entries: Vec<T>,
}

impl<T> Default for Directory<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Named> Directory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: T) {
        debug!(entry = entry.name(), size = self.entries.len() + 1, "directory entry added");
        self.entries.push(entry);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
