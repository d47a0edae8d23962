use crate::core::{Record, RecordSource};
use crate::utils::error::{LookupError, Result};
use std::collections::HashMap;

/// A [`RecordSource`] that answers lookups from records held in memory,
/// keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: HashMap<String, Record>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut directory = Self::new();
        for record in records {
            directory.insert(record);
        }
        directory
    }

    /// Decodes a JSON array of `{"name": ..., "age": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        tracing::debug!("Loaded {} records into directory", records.len());
        Ok(Self::from_records(records))
    }

    /// Stores `record` under its name, returning any record it replaced.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for InMemoryDirectory {
    fn fetch(&self, name: &str) -> std::result::Result<Record, LookupError> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::new(format!("no record found for {}", name)))
    }
}
