// src/backend/error.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered.")]
    DuplicateEmail(String),

    #[error("SKU already exists")]
    DuplicateSku(String),

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Email not verified.")]
    EmailNotVerified,

    #[error("Invalid or expired token.")]
    InvalidToken(String),

    #[error("Invalid item id")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Mail dispatch failed: {0}")]
    MailError(String),

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// HTTP status code the hosting layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::InvalidInput(_)
            | ServiceError::DuplicateEmail(_)
            | ServiceError::DuplicateSku(_)
            | ServiceError::InvalidCredentials
            | ServiceError::EmailNotVerified
            | ServiceError::InvalidToken(_)
            | ServiceError::InvalidId(_)
            | ServiceError::UploadError(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::MailError(_)
            | ServiceError::StorageError(_)
            | ServiceError::InternalError(_) => 500,
        }
    }

    /// Message safe to put in a response body. Server-side failures are
    /// logged with detail but answered generically.
    pub fn public_message(&self) -> String {
        if self.status_code() == 500 {
            "Server error".to_string()
        } else {
            self.to_string()
        }
    }
}
