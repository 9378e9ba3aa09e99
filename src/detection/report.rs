use crate::core::Occurrence;
use serde::Serialize;
use std::collections::HashMap;

/// A name exported by more than one file, with every qualifying sighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub name: String,
    pub occurrences: Vec<Occurrence>,
}

/// Duplicated names in the order they were first found to collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    entries: Vec<DuplicateEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DuplicateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an entry seeded with its first two occurrences.
    pub(crate) fn open(&mut self, name: &str, first: Occurrence, second: Occurrence) {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(DuplicateEntry {
            name: name.to_string(),
            occurrences: vec![first, second],
        });
    }

    /// Append to an open entry; returns false if `name` has none.
    pub(crate) fn append(&mut self, name: &str, occurrence: Occurrence) -> bool {
        match self.index.get(name) {
            Some(&position) => {
                self.entries[position].occurrences.push(occurrence);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Occurrence]> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].occurrences.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DuplicateEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of duplicated names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all duplicated names.
    pub fn occurrence_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.occurrences.len())
            .sum()
    }
}

impl<'a> IntoIterator for &'a DuplicateReport {
    type Item = &'a DuplicateEntry;
    type IntoIter = std::slice::Iter<'a, DuplicateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
