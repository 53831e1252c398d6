use serde::Serialize;
use uuid::Uuid;

use crate::model::questresult::QuestResult;
use crate::objectwithuuid::ObjectWithUUID;
use crate::quest::questerror::QuestError;

use super::comparisonentry::ComparisonEntry;


/// Ordered scenarios kept for one session. Owned by the caller; two sets never
/// share entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>
}

impl ComparisonSet {
    pub fn new() -> ComparisonSet {
        ComparisonSet { entries: Vec::new() }
    }

    pub fn add(&mut self, label: Option<&str>, result: &QuestResult) -> &ComparisonEntry {
        self.entries.push(ComparisonEntry::new(label, result));
        let index = self.entries.len() - 1;
        &self.entries[index]
    }

    pub fn get(&self, uuid: &Uuid) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|entry| entry.uuid() == uuid)
    }

    pub fn remove(&mut self, uuid: &Uuid) -> Option<ComparisonEntry> {
        let index = self.entries.iter().position(|entry| entry.uuid() == uuid)?;
        Some(self.entries.remove(index))
    }

    pub fn relabel(&mut self, uuid: &Uuid, label: &str) -> Result<(), QuestError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(QuestError::invalid_input("comparison label must not be blank"));
        }
        let entry = self.entries
            .iter_mut()
            .find(|entry| entry.uuid() == uuid)
            .ok_or_else(|| QuestError::invalid_input(format!("no comparison entry {}", uuid)))?;
        entry.set_label(label.to_owned());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a ComparisonEntry;
    type IntoIter = std::slice::Iter<'a, ComparisonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
