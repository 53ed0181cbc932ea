use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Remote resource could not be fetched")]
    FetchFailure,
    #[error("Remote resource could not be decoded")]
    DecodeFailure,
    #[error("Local storage unavailable")]
    StorageFailure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn fetch(resource: &str, details: impl ToString) -> Self {
        Self::with_details(ErrorCode::FetchFailure, format!("Failed to fetch {resource}"), details.to_string())
    }

    pub fn decode(resource: &str, details: impl ToString) -> Self {
        Self::with_details(ErrorCode::DecodeFailure, format!("Failed to parse {resource}"), details.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
