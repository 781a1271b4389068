use std::sync::{Mutex, MutexGuard};

use crate::medications::MedicationCollection;
use crate::submission::{LogSink, SubmissionSink};

/// Session state shared by the command handlers.
/// Holds the medication list and the submission sink.
pub struct AppState {
    session: Mutex<MedicationCollection>,
    sink: Box<dyn SubmissionSink + Send + Sync>,
}

impl AppState {
    /// Empty session submitting to the log.
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }

    pub fn with_sink(sink: impl SubmissionSink + Send + Sync + 'static) -> Self {
        Self {
            session: Mutex::new(MedicationCollection::new()),
            sink: Box::new(sink),
        }
    }

    /// Lock the session's medication list.
    pub fn lock_session(&self) -> Result<MutexGuard<'_, MedicationCollection>, String> {
        self.session
            .lock()
            .map_err(|_| "Failed to acquire session lock".to_string())
    }

    pub fn sink(&self) -> &dyn SubmissionSink {
        self.sink.as_ref()
    }

    /// Discard the session's list (navigation away).
    pub fn reset(&self) -> Result<(), String> {
        let mut session = self.lock_session()?;
        let discarded = session.len();
        *session = MedicationCollection::new();
        tracing::info!(discarded, "Medication session reset");
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
