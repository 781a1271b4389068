//! Command-line front end.
//!
//! Drives the command layer from a JSON file of form entries so the
//! medication list can be exercised without a UI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::commands::medications::{add_medication, get_frequency_options, submit_medications};
use crate::commands::state::AppState;
use crate::commands::Notice;
use crate::medications::MedicationInput;
use crate::models::label_for;
use crate::submission::JsonWriterSink;

#[derive(Parser, Debug)]
#[command(name = "medlist")]
#[command(version, about = "Record and submit a patient's medication list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List frequency codes and their labels
    Frequencies,
    /// Print the display label for a frequency code
    Label {
        /// Frequency code, e.g. once-daily
        code: String,
    },
    /// Add every entry from a JSON array, then submit the list
    Submit {
        /// JSON file of form entries (stdin when omitted or "-")
        file: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid medication entries: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Execute a parsed command, writing results to `out`.
///
/// `submit` moves `out` into the session's sink, so the batch JSON lands on
/// the same writer as every other command's output.
pub fn execute<W>(cli: Cli, mut out: W) -> Result<(), CliError>
where
    W: Write + Send + 'static,
{
    match cli.command {
        Commands::Frequencies => {
            for option in get_frequency_options() {
                writeln!(out, "{}\t{}", option.code, option.label)?;
            }
        }
        Commands::Label { code } => {
            writeln!(out, "{}", label_for(&code))?;
        }
        Commands::Submit { file } => {
            let entries = read_entries(file.as_deref())?;
            let state = AppState::with_sink(JsonWriterSink::new(out));
            let submitted = submit_entries(entries, &state)?;
            tracing::info!(submitted, "Batch submitted from CLI");
        }
    }
    Ok(())
}

/// Add each entry to the session, skipping invalid ones, then submit.
/// Returns the number of records submitted.
pub fn submit_entries(entries: Vec<MedicationInput>, state: &AppState) -> Result<usize, CliError> {
    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry.name.clone();
        match add_medication(entry, state) {
            Ok(update) => report(&update.notice, &name),
            Err(message) => {
                tracing::warn!(index, name = %name, "Skipping entry");
                report(&Notice::error(message), &name);
            }
        }
    }

    let result = submit_medications(state).map_err(CliError::Rejected)?;
    report(&result.notice, "");
    Ok(result.submitted)
}

fn read_entries(file: Option<&Path>) -> Result<Vec<MedicationInput>, CliError> {
    let raw = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Notices go to stderr; stdout carries the submitted batch.
fn report(notice: &Notice, subject: &str) {
    if subject.is_empty() {
        eprintln!("[{:?}] {}", notice.level, notice.message);
    } else {
        eprintln!("[{:?}] {}: {}", notice.level, subject, notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{SubmissionBatch, SubmissionSink};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct NamesSink {
        names: Arc<Mutex<Vec<String>>>,
    }

    impl SubmissionSink for NamesSink {
        fn deliver(&self, batch: &SubmissionBatch<'_>) {
            let mut names = self.names.lock().unwrap();
            names.extend(batch.medications.iter().map(|r| r.name().to_string()));
        }
    }

    /// Cloneable in-memory writer; clones share one buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn run_to_string(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let out = SharedBuf::default();
        execute(cli, out.clone()).unwrap();
        out.contents()
    }

    #[test]
    fn frequencies_prints_every_code() {
        let out = run_to_string(&["medlist", "frequencies"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "once-daily\tOnce Daily");
        assert_eq!(lines[5], "weekly\tWeekly");
    }

    #[test]
    fn label_falls_back_to_code() {
        assert_eq!(run_to_string(&["medlist", "label", "twice-daily"]), "Twice Daily\n");
        assert_eq!(run_to_string(&["medlist", "label", "not-a-code"]), "not-a-code\n");
    }

    #[test]
    fn submit_requires_no_positional_file() {
        let cli = Cli::try_parse_from(["medlist", "submit"]).unwrap();
        assert!(matches!(cli.command, Commands::Submit { file: None }));
    }

    #[test]
    fn submit_entries_skips_invalid_and_submits_rest() {
        let sink = NamesSink::default();
        let state = AppState::with_sink(sink.clone());
        let entries: Vec<MedicationInput> = serde_json::from_str(
            r#"[
                {"name": "Aspirin", "frequency": "once-daily", "days": "30"},
                {"name": "", "frequency": "weekly", "days": 2},
                {"frequency": "weekly", "days": 3},
                {"name": "Ibuprofen", "frequency": "as-needed", "days": 0},
                {"name": "Metformin", "frequency": "twice-daily", "days": 90, "instructions": "With meals"}
            ]"#,
        )
        .unwrap();

        let submitted = submit_entries(entries, &state).unwrap();
        assert_eq!(submitted, 2);
        assert_eq!(*sink.names.lock().unwrap(), vec!["Aspirin", "Metformin"]);
    }

    #[test]
    fn submit_file_writes_batch_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meds.json");
        fs::write(
            &path,
            r#"[
                {"name": "Aspirin", "frequency": "once-daily", "days": "5"},
                {"frequency": "weekly", "days": 3}
            ]"#,
        )
        .unwrap();

        let out = run_to_string(&["medlist", "submit", path.to_str().unwrap()]);
        let batch: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(batch["count"], 1);
        assert_eq!(batch["medications"][0]["name"], "Aspirin");
        assert_eq!(batch["medications"][0]["days"], 5);
    }

    #[test]
    fn submit_entries_with_nothing_valid_is_rejected() {
        let state = AppState::with_sink(NamesSink::default());
        let entries = vec![MedicationInput {
            name: "Aspirin".into(),
            ..Default::default()
        }];

        let err = submit_entries(entries, &state).unwrap_err();
        assert_eq!(err.to_string(), "Please add at least one medication.");
    }

    #[test]
    fn read_entries_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meds.json");
        fs::write(
            &path,
            r#"[{"name": "Aspirin", "frequency": "once-daily", "days": "5"}]"#,
        )
        .unwrap();

        let entries = read_entries(Some(&path)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Aspirin");
    }

    #[test]
    fn read_entries_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(read_entries(Some(&path)), Err(CliError::Json(_))));
    }

    #[test]
    fn read_entries_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(read_entries(Some(&path)), Err(CliError::Io(_))));
    }
}
