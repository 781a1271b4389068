pub mod medications;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::medications::ValidationError;

/// Health check command — verifies the backend is running
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Toast severity for the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A user-facing notification produced by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn from_error(err: &ValidationError) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_returns_ok() {
        assert_eq!(health_check(), "ok");
    }

    #[test]
    fn notice_from_validation_error() {
        let notice = Notice::from_error(&ValidationError::InvalidDuration);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Days must be a positive number.");
    }

    #[test]
    fn notice_level_serializes_snake_case() {
        let json = serde_json::to_value(Notice::info("Medication removed.")).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "Medication removed.");
    }
}
