//! Process-level error type.
//!
//! Every fallible stage returns [`AppError`], which carries the exit code the
//! binary terminates with alongside the diagnostic printed to stderr. The two
//! fatal conditions (unreadable input, zero well-formed rows) both map to
//! exit code 1; malformed individual rows never surface here.

#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
