// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use std::error::Error;

use wealth_tracker_core::errors::CoreError;
use wealth_tracker_core::models::document::CsvDocument;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_format_names_document() {
        let err = CoreError::InvalidFormat {
            document: CsvDocument::History,
            message: "header must contain a date and a EUR column".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid History format: header must contain a date and a EUR column"
        );
    }

    #[test]
    fn invalid_format_cash_split() {
        let err = CoreError::InvalidFormat {
            document: CsvDocument::CashSplit,
            message: "missing columns".into(),
        };
        assert_eq!(err.to_string(), "Invalid Cash Split format: missing columns");
    }

    #[test]
    fn http_error() {
        let err = CoreError::Http {
            document: CsvDocument::Assets,
            status: 502,
        };
        assert_eq!(err.to_string(), "HTTP error while fetching Assets: status 502");
    }

    #[test]
    fn sync_failed_includes_reason() {
        let err = CoreError::SyncFailed {
            stage: CsvDocument::Investments,
            source: Box::new(CoreError::Network("connection refused".into())),
        };
        assert_eq!(
            err.to_string(),
            "Sync failed at Investments: Network error: connection refused"
        );
    }

    #[test]
    fn session_expired() {
        assert_eq!(
            CoreError::SessionExpired.to_string(),
            "Session expired or missing"
        );
    }

    #[test]
    fn storage_and_serialization() {
        assert_eq!(
            CoreError::Storage("disk full".into()).to_string(),
            "Storage error: disk full"
        );
        assert_eq!(
            CoreError::Serialization("bad".into()).to_string(),
            "Serialization error: bad"
        );
        assert_eq!(
            CoreError::Deserialization("eof".into()).to_string(),
            "Deserialization error: eof"
        );
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("ron_per_eur must be positive".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: ron_per_eur must be positive"
        );
    }
}

// ── Source chain ────────────────────────────────────────────────────

mod source_chain {
    use super::*;

    #[test]
    fn sync_failed_exposes_inner_error() {
        let err = CoreError::SyncFailed {
            stage: CsvDocument::History,
            source: Box::new(CoreError::InvalidFormat {
                document: CsvDocument::History,
                message: "x".into(),
            }),
        };
        let inner = err.source().expect("source should be set");
        assert_eq!(inner.to_string(), "Invalid History format: x");
    }

    #[test]
    fn leaf_errors_have_no_source() {
        assert!(CoreError::SessionExpired.source().is_none());
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m == "permission denied"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
