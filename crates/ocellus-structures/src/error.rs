// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for foundation data operations

/// Result type for foundation data operations
pub type Result<T> = std::result::Result<T, OcellusDataError>;

/// Common error type for ocellus data operations.
///
/// Covers configuration-table validation and deserialization across the
/// foundation layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OcellusDataError {
    /// Failed to deserialize a configuration table
    #[error("Failed to deserialize: {0}")]
    DeserializationError(String),

    /// Invalid parameters provided to a function or configuration table
    #[error("Bad parameters: {0}")]
    BadParameters(String),
}

impl From<serde_json::Error> for OcellusDataError {
    fn from(err: serde_json::Error) -> Self {
        OcellusDataError::DeserializationError(err.to_string())
    }
}
