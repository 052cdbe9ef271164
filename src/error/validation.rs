use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid time '{value}'. Expected 'HH:MM' (00:00 to 23:59).")]
    InvalidClockTime { value: String },
    #[error("Invalid mask '{value}'. Expected 13 characters shaped like 'hh:mm - hh:mm'.")]
    InvalidMask { value: String },
    #[error("Invalid preset hours '{value}'. Expected a whole number of hours.")]
    InvalidPresetHours { value: String },
    #[error("Preset label must not be empty.")]
    EmptyPresetLabel,
    #[error("Invalid key '{value}'. Expected a digit, Backspace, Delete, Left, Right, Enter or click:<offset>.")]
    InvalidKeyToken { value: String },
    #[error("Invalid click offset in '{value}': {source}")]
    InvalidClickOffset {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Both --from and --to must be set together.")]
    IncompleteRange,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
