// File: crates/vernier-analysis/src/store.rs
// Summary: Record store seam: CRUD trait plus the in-memory implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisError, MealAnalysis};

/// A persisted meal entry, as produced from an accepted analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub consumed_at: DateTime<Utc>,
}

impl MealRecord {
    /// Build an unsaved record (empty id) from an analysis.
    pub fn from_analysis(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        analysis: &MealAnalysis,
        consumed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            name: name.into(),
            calories: analysis.total_calories,
            protein: analysis.total_protein,
            carbs: analysis.total_carbs,
            fat: analysis.total_fat,
            consumed_at,
        }
    }
}

/// Simple CRUD seam for the storage collaborator. No transactionality
/// guarantees; every operation is one-shot.
pub trait RecordStore {
    /// Persist a record and return it with its assigned id.
    fn create_record(&mut self, record: MealRecord) -> Result<MealRecord, AnalysisError>;

    /// All records for one owner, most recent first.
    fn list_records_by_owner(&self, owner_id: &str) -> Result<Vec<MealRecord>, AnalysisError>;

    /// All records for one owner consumed within `[from, to]`.
    fn list_records_by_date_range(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>, AnalysisError>;

    /// Replace an existing record in full, matching on id.
    fn update_record(&mut self, record: MealRecord) -> Result<MealRecord, AnalysisError>;

    fn delete_record(&mut self, id: &str) -> Result<(), AnalysisError>;
}

/// Vec-backed store used by tests and the demo binary.
#[derive(Default)]
pub struct MemoryStore {
    records: Vec<MealRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn create_record(&mut self, mut record: MealRecord) -> Result<MealRecord, AnalysisError> {
        self.next_id += 1;
        record.id = self.next_id.to_string();
        self.records.push(record.clone());
        Ok(record)
    }

    fn list_records_by_owner(&self, owner_id: &str) -> Result<Vec<MealRecord>, AnalysisError> {
        let mut out: Vec<MealRecord> = self
            .records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.consumed_at.cmp(&a.consumed_at));
        Ok(out)
    }

    fn list_records_by_date_range(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>, AnalysisError> {
        let mut out: Vec<MealRecord> = self
            .records
            .iter()
            .filter(|r| r.owner_id == owner_id && r.consumed_at >= from && r.consumed_at <= to)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.consumed_at.cmp(&a.consumed_at));
        Ok(out)
    }

    fn update_record(&mut self, record: MealRecord) -> Result<MealRecord, AnalysisError> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(AnalysisError::NotFound(record.id)),
        }
    }

    fn delete_record(&mut self, id: &str) -> Result<(), AnalysisError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(AnalysisError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
