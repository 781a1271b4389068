//! Submission sinks — where a submitted medication batch goes.
//!
//! The collection hands its records to a [`SubmissionSink`] and is done;
//! nothing here feeds back into the session. [`LogSink`] is the default and
//! only records the batch in the log. [`JsonWriterSink`] prints it for the CLI.

use std::io::Write;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::MedicationRecord;

/// The payload delivered on submit: every record, in list order.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionBatch<'a> {
    pub submitted_at: DateTime<Utc>,
    pub count: usize,
    pub medications: &'a [MedicationRecord],
}

impl<'a> SubmissionBatch<'a> {
    pub fn new(medications: &'a [MedicationRecord]) -> Self {
        Self {
            submitted_at: Utc::now(),
            count: medications.len(),
            medications,
        }
    }
}

/// Receiver of submitted batches.
///
/// Delivery is fire-and-forget: a sink that can fail reports the failure
/// itself (log, retry queue) instead of surfacing it to the submitter.
pub trait SubmissionSink {
    fn deliver(&self, batch: &SubmissionBatch<'_>);
}

/// Logs each batch as one structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, batch: &SubmissionBatch<'_>) {
        match serde_json::to_string(batch) {
            Ok(payload) => tracing::info!(
                count = batch.count,
                submitted_at = %batch.submitted_at,
                payload = %payload,
                "Submitting medications"
            ),
            Err(e) => tracing::warn!(
                count = batch.count,
                error = %e,
                "Submitting medications (payload not serializable)"
            ),
        }
    }
}

/// Writes each batch as pretty-printed JSON followed by a newline.
pub struct JsonWriterSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> SubmissionSink for JsonWriterSink<W> {
    fn deliver(&self, batch: &SubmissionBatch<'_>) {
        let Ok(mut writer) = self.writer.lock() else {
            tracing::warn!("Submission writer lock poisoned, batch dropped");
            return;
        };
        let result = serde_json::to_writer_pretty(&mut *writer, batch)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(writer))
            .and_then(|_| writer.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, count = batch.count, "Failed to write submission batch");
        }
    }
}
