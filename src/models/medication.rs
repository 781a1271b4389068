use serde::Serialize;
use uuid::Uuid;

use super::enums::{label_for, FrequencyCode};

/// One validated medication entry.
///
/// Fields are private: a record only comes out of
/// [`crate::medications::try_create`], and is never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationRecord {
    id: Uuid,
    name: String,
    frequency: String,
    days: u32,
    instructions: String,
}

impl MedicationRecord {
    pub(crate) fn new(
        id: Uuid,
        name: String,
        frequency: String,
        days: u32,
        instructions: String,
    ) -> Self {
        Self {
            id,
            name,
            frequency,
            days,
            instructions,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The frequency code as entered, registered or not.
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Parsed frequency, `None` for codes outside the registry.
    pub fn frequency_code(&self) -> Option<FrequencyCode> {
        self.frequency.parse().ok()
    }

    pub fn frequency_label(&self) -> String {
        label_for(&self.frequency).to_string()
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn has_instructions(&self) -> bool {
        !self.instructions.is_empty()
    }
}
