//! Medication list commands.
//!
//! Five commands:
//! - `get_medication_list`: list screen data for the current session
//! - `get_frequency_options`: dropdown codes and labels (static data)
//! - `add_medication`: validate a form entry and append it
//! - `remove_medication`: drop one entry by id
//! - `submit_medications`: hand the whole list to the submission sink

use serde::Serialize;
use uuid::Uuid;

use crate::medications::{self, FrequencyOption, MedicationInput, MedicationListData};

use super::state::AppState;
use super::Notice;

/// List data after a mutation, plus the toast to show.
#[derive(Debug, Clone, Serialize)]
pub struct ListUpdate {
    pub list: MedicationListData,
    pub notice: Notice,
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResult {
    pub submitted: usize,
    pub notice: Notice,
}

/// Fetches the list screen data.
pub fn get_medication_list(state: &AppState) -> Result<MedicationListData, String> {
    let session = state.lock_session()?;
    tracing::debug!(count = session.len(), "Medication list requested");
    Ok(session.list_data())
}

/// Returns the frequency dropdown options.
pub fn get_frequency_options() -> Vec<FrequencyOption> {
    medications::frequency_options()
}

/// Validates a form entry and appends it to the session list.
pub fn add_medication(input: MedicationInput, state: &AppState) -> Result<ListUpdate, String> {
    let record = input.to_record().map_err(|e| {
        tracing::warn!(error = %e, "Medication entry rejected");
        e.to_string()
    })?;

    let mut session = state.lock_session()?;
    let id = record.id();
    session.add(record);
    tracing::info!(%id, count = session.len(), "Medication added");

    Ok(ListUpdate {
        list: session.list_data(),
        notice: Notice::success("Medication added successfully."),
    })
}

/// Removes a medication by id. Unknown ids leave the list unchanged.
pub fn remove_medication(medication_id: String, state: &AppState) -> Result<ListUpdate, String> {
    let med_uuid =
        Uuid::parse_str(&medication_id).map_err(|e| format!("Invalid medication ID: {e}"))?;

    let mut session = state.lock_session()?;
    match session.remove(med_uuid) {
        Some(_) => tracing::info!(id = %med_uuid, count = session.len(), "Medication removed"),
        None => tracing::debug!(id = %med_uuid, "Remove requested for unknown medication"),
    }

    Ok(ListUpdate {
        list: session.list_data(),
        notice: Notice::info("Medication removed."),
    })
}

/// Submits the full list. The list is kept after submission.
pub fn submit_medications(state: &AppState) -> Result<SubmitResult, String> {
    let session = state.lock_session()?;
    session.submit(state.sink()).map_err(|e| {
        tracing::warn!(error = %e, "Submit rejected");
        e.to_string()
    })?;
    tracing::info!(count = session.len(), "Medications submitted");

    Ok(SubmitResult {
        submitted: session.len(),
        notice: Notice::success("Medications submitted successfully!"),
    })
}
