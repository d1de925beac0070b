//! Error taxonomy for loading a chamber roster.
//!
//! Every variant is terminal for the current load. Nothing is retried or
//! recovered silently; the caller decides whether to trigger another load.

use crate::chamber::Chamber;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Missing credential or invalid setting. Raised before any I/O.
    #[error("{0}")]
    Configuration(String),

    /// Non-success HTTP status, transport failure, or an undecodable body.
    #[error("{reason}")]
    Fetch { status: Option<u16>, reason: String },

    /// The response parsed but carried no members.
    #[error("No {} data available.", .0.api_name())]
    EmptyData(Chamber),
}

impl ChartError {
    pub fn missing_api_key() -> Self {
        ChartError::Configuration(
            "Congress API key not found. Set CONGRESS_API_KEY or pass --api-key.".to_string(),
        )
    }

    pub fn fetch(status: Option<u16>, reason: impl Into<String>) -> Self {
        ChartError::Fetch {
            status,
            reason: reason.into(),
        }
    }

    /// Short heading shown above the message in notices
    pub fn title(&self) -> &str {
        match self {
            ChartError::Configuration(_) => "Configuration Error",
            ChartError::Fetch { .. } => "Error",
            ChartError::EmptyData(_) => "No Data",
        }
    }

    pub fn is_empty_data(&self) -> bool {
        matches!(self, ChartError::EmptyData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_message_names_chamber() {
        let err = ChartError::EmptyData(Chamber::Senate);
        assert_eq!(err.to_string(), "No senate data available.");
        assert_eq!(err.title(), "No Data");
        assert!(err.is_empty_data());
    }

    #[test]
    fn test_fetch_message_is_reason_verbatim() {
        let err = ChartError::fetch(Some(500), "Internal Server Error");
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_missing_key_is_configuration() {
        let err = ChartError::missing_api_key();
        assert!(matches!(err, ChartError::Configuration(_)));
        assert!(err.to_string().contains("CONGRESS_API_KEY"));
    }
}
