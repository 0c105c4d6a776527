use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One question the assistant knows how to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered, non-empty, read-only catalog of [`KnowledgeEntry`] values.
///
/// Order carries no weight in scoring but decides ties: the earlier entry
/// wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Box<[KnowledgeEntry]>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidConfiguration(
                "knowledge base is empty".into(),
            ));
        }
        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    /// For catalogs known to be non-empty at compile time.
    pub(crate) fn from_nonempty(entries: Vec<KnowledgeEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self {
            entries: entries.into_boxed_slice(),
        }
    }

    /// Parse a JSON array of `{"question": ..., "answer": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Read and parse a JSON knowledge file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let knowledge = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = knowledge.entries.len(),
            "loaded knowledge base"
        );
        Ok(knowledge)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a KnowledgeEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
