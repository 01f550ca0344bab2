// src/utils/serialization.rs
// ============================================================================
// JSON SNAPSHOT SERIALIZATION
// ============================================================================
// Configurations are persisted in the same flat JSON shape the browser
// client writes, with no version envelope.
// ============================================================================

use crate::TokenomicsError;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<SerializeError> for TokenomicsError {
    fn from(err: SerializeError) -> Self {
        TokenomicsError::Serialization(err.to_string())
    }
}

/// Types stored as JSON snapshots
pub trait JsonSnapshot: Serialize + DeserializeOwned {
    /// Compact JSON
    fn to_json(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON (CLI output)
    fn to_json_pretty(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_json(raw: &str) -> Result<Self, SerializeError> {
        if raw.trim().is_empty() {
            return Err(SerializeError::InvalidFormat("empty snapshot".to_string()));
        }
        Ok(serde_json::from_str(raw)?)
    }
}

impl<T: Serialize + DeserializeOwned> JsonSnapshot for T {}
