use thiserror::Error;

use crate::models::document::CsvDocument;

/// Unified error type for the entire wealth-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── CSV Ingestion ───────────────────────────────────────────────
    /// A required header column could not be resolved. The whole document
    /// is unusable; no partial result is produced.
    #[error("Invalid {document} format: {message}")]
    InvalidFormat {
        document: CsvDocument,
        message: String,
    },

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Network ─────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error while fetching {document}: status {status}")]
    Http { document: CsvDocument, status: u16 },

    // ── Sync ────────────────────────────────────────────────────────
    #[error("Sync failed at {stage}: {source}")]
    SyncFailed {
        stage: CsvDocument,
        #[source]
        source: Box<CoreError>,
    },

    // ── Session / Config ────────────────────────────────────────────
    #[error("Session expired or missing")]
    SessionExpired,

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    pub(crate) fn invalid_format(document: CsvDocument, message: impl Into<String>) -> Self {
        CoreError::InvalidFormat {
            document,
            message: message.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Spreadsheet export URLs carry access tokens in the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
