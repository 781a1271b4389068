//! Medication list — entry validation, the session collection, and view types.
//!
//! `try_create` turns raw form fields into a [`MedicationRecord`].
//! [`MedicationCollection`] holds the session's records in entry order and
//! hands them to a [`SubmissionSink`] on submit. Nothing in this module logs
//! or notifies; the command layer does that.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{label_for, MedicationRecord};
use crate::submission::{SubmissionBatch, SubmissionSink};

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

/// User-input errors. All are recoverable by correcting input and retrying,
/// and none of them change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingRequiredField,

    #[error("Days must be a positive number.")]
    InvalidDuration,

    #[error("Please add at least one medication.")]
    EmptyCollection,
}

// ═══════════════════════════════════════════
// Entry validation & construction
// ═══════════════════════════════════════════

/// Validate raw form fields and build a record with a fresh id.
///
/// `name` and `instructions` are trimmed. `frequency` is stored as given and
/// is not checked against the frequency registry.
pub fn try_create(
    name: &str,
    frequency: &str,
    days_raw: &str,
    instructions: &str,
) -> Result<MedicationRecord, ValidationError> {
    let name = name.trim();
    if name.is_empty() || frequency.is_empty() || days_raw.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }

    let days = parse_days(days_raw)?;

    Ok(MedicationRecord::new(
        Uuid::new_v4(),
        name.to_string(),
        frequency.to_string(),
        days,
        instructions.trim().to_string(),
    ))
}

/// Parse a duration field into a whole, positive day count.
///
/// Accepts anything that reads as a number (`"5"`, `" 5 "`, `"5.0"`, `"1e1"`)
/// as long as the value is whole and fits in a `u32`.
fn parse_days(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(days) = trimmed.parse::<u32>() {
        return match days {
            0 => Err(ValidationError::InvalidDuration),
            d => Ok(d),
        };
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidDuration)?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::InvalidDuration);
    }
    Ok(value as u32)
}

/// Duration as sent by a form: text from an input box, or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DaysInput {
    Text(String),
    Number(f64),
}

impl DaysInput {
    fn to_raw(&self) -> String {
        match self {
            DaysInput::Text(s) => s.clone(),
            DaysInput::Number(n) => n.to_string(),
        }
    }
}

/// Medication form payload. Unset fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedicationInput {
    pub name: String,
    pub frequency: Option<String>,
    pub days: Option<DaysInput>,
    pub instructions: Option<String>,
}

impl MedicationInput {
    pub fn to_record(&self) -> Result<MedicationRecord, ValidationError> {
        let days = self.days.as_ref().map(DaysInput::to_raw).unwrap_or_default();
        try_create(
            &self.name,
            self.frequency.as_deref().unwrap_or_default(),
            &days,
            self.instructions.as_deref().unwrap_or_default(),
        )
    }
}

// ═══════════════════════════════════════════
// Session collection
// ═══════════════════════════════════════════

/// Whether the session has anything to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionState {
    Empty,
    HasEntries,
}

/// The session's medication records, in the order they were added.
///
/// Submitting does not clear the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationCollection {
    records: Vec<MedicationRecord>,
}

impl MedicationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No deduplication.
    pub fn add(&mut self, record: MedicationRecord) {
        self.records.push(record);
    }

    /// Remove the record with `id`. Unknown ids leave the collection as is.
    pub fn remove(&mut self, id: Uuid) -> Option<MedicationRecord> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Hand every record to `sink`, in order.
    pub fn submit(&self, sink: &dyn SubmissionSink) -> Result<(), ValidationError> {
        if self.records.is_empty() {
            return Err(ValidationError::EmptyCollection);
        }
        sink.deliver(&SubmissionBatch::new(&self.records));
        Ok(())
    }

    pub fn state(&self) -> CollectionState {
        if self.records.is_empty() {
            CollectionState::Empty
        } else {
            CollectionState::HasEntries
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&MedicationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[MedicationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MedicationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the list screen data.
    pub fn list_data(&self) -> MedicationListData {
        MedicationListData::from_records(&self.records)
    }
}

impl<'a> IntoIterator for &'a MedicationCollection {
    type Item = &'a MedicationRecord;
    type IntoIter = std::slice::Iter<'a, MedicationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ═══════════════════════════════════════════
// View types — serialised to frontend
// ═══════════════════════════════════════════

/// A medication card for the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationCard {
    pub id: Uuid,
    pub name: String,
    pub frequency: String,
    pub frequency_label: String,
    pub days: u32,
    pub duration_label: String,
    pub instructions: Option<String>,
}

impl From<&MedicationRecord> for MedicationCard {
    fn from(record: &MedicationRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            frequency: record.frequency().to_string(),
            frequency_label: label_for(record.frequency()).to_string(),
            days: record.days(),
            duration_label: duration_label(record.days()),
            instructions: record
                .has_instructions()
                .then(|| record.instructions().to_string()),
        }
    }
}

/// Data for the medication list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationListData {
    pub medications: Vec<MedicationCard>,
    pub total: usize,
    /// Header badge, absent while the list is empty.
    pub count_label: Option<String>,
    pub can_submit: bool,
}

impl MedicationListData {
    pub fn from_records(records: &[MedicationRecord]) -> Self {
        let total = records.len();
        Self {
            medications: records.iter().map(MedicationCard::from).collect(),
            total,
            count_label: (total > 0).then(|| count_label(total)),
            can_submit: total > 0,
        }
    }
}

/// Frequency dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Dropdown options, in form order.
pub fn frequency_options() -> Vec<FrequencyOption> {
    crate::models::FrequencyCode::ALL
        .iter()
        .map(|f| FrequencyOption {
            code: f.as_str(),
            label: f.label(),
        })
        .collect()
}

pub fn duration_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn count_label(total: usize) -> String {
    if total == 1 {
        "1 medication added".to_string()
    } else {
        format!("{total} medications added")
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
