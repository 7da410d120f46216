// web_app/error.rs - Error taxonomy for catalog access
//
// Every variant is handled locally by showing its message; nothing here is
// fatal or retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while talking to the catalog API
///
/// `Display` is the message shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorefrontError {
    /// The request itself failed (connection, timeout, non-success status)
    #[error("Failed to fetch products. Please try again later.")]
    Network { message: String },

    /// The payload did not have the expected shape
    #[error("Invalid data received from the catalog.")]
    MalformedResponse { message: String },

    /// The listing query matched zero products
    #[error("Product does not exist")]
    EmptyResult,

    /// A single-product lookup yielded nothing
    #[error("Product does not exist")]
    NotFound { id: u64 },
}

impl StorefrontError {
    pub fn network(message: impl Into<String>) -> Self {
        StorefrontError::Network {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        StorefrontError::MalformedResponse {
            message: message.into(),
        }
    }

    /// Underlying detail for logs; empty for variants that carry none
    pub fn detail(&self) -> String {
        match self {
            StorefrontError::Network { message } => message.clone(),
            StorefrontError::MalformedResponse { message } => message.clone(),
            StorefrontError::EmptyResult => String::new(),
            StorefrontError::NotFound { id } => format!("product {} not found", id),
        }
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorefrontError::malformed(err.to_string())
        } else {
            StorefrontError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::malformed(err.to_string())
    }
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
