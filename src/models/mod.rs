pub mod enums;
pub mod medication;

pub use enums::{is_known_frequency, label_for, FrequencyCode, UnknownCode};
pub use medication::MedicationRecord;
