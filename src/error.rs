use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowError {
    #[error("index {index} out of range for {what} (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("slot {slot} out of range for {what} (slots 0..{len})")]
    SlotOutOfRange {
        what: &'static str,
        slot: usize,
        len: usize,
    },

    #[error("{stat} count {value} outside the allowed range 0..=10")]
    StatOutOfRange { stat: &'static str, value: u8 },

    #[error("rpg log is empty; log a day of stats first")]
    EmptyLog,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GrowError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::SlotOutOfRange { .. } => "slot_out_of_range",
            Self::StatOutOfRange { .. } => "stat_out_of_range",
            Self::EmptyLog => "empty_log",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowError>;
