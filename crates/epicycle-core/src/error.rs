use std::fmt;

#[derive(Debug)]
pub enum EpicycleError {
    Json(serde_json::Error),
    InvalidData(String),
}

impl fmt::Display for EpicycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpicycleError::Json(e) => write!(f, "JSON error: {e}"),
            EpicycleError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for EpicycleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EpicycleError::Json(e) => Some(e),
            EpicycleError::InvalidData(_) => None,
        }
    }
}

impl From<serde_json::Error> for EpicycleError {
    fn from(e: serde_json::Error) -> Self {
        EpicycleError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, EpicycleError>;
