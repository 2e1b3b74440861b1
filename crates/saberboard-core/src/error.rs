use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid score record: {0}")]
    Validation(String),

    #[error("Invalid leaderboard data: {0}")]
    Format(String),

    #[error("Leaderboard not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let message = if e.is_eof() {
            format!("Unexpected end of input: {}", e)
        } else if e.is_syntax() {
            format!("Syntax error: {}", e)
        } else if e.is_data() {
            format!("Unexpected structure: {}", e)
        } else {
            format!("JSON error: {}", e)
        };
        Error::Format(message)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Format(format!("Not valid UTF-8: {}", e))
    }
}
