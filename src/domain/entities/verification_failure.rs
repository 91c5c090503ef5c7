use thiserror::Error;

use crate::data::models::google_play_developer_api::api_error_model::{
    ApiErrorDetailModel, ApiErrorModel,
};

/// A verification rejected by the Google Play Developer API, or a response
/// that could not be recognized as a valid purchase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct VerificationFailure {
    pub code: i64,
    pub message: String,
    pub errors: Vec<VerificationFailureDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFailureDetail {
    pub domain: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub location_type: Option<String>,
    pub location: Option<String>,
}

impl VerificationFailure {
    pub const UNKNOWN_CODE: i64 = -1;
    pub const UNKNOWN_MESSAGE: &'static str = "Unknown error";

    /// Failure for responses that carry no API error object.
    pub fn unknown() -> Self {
        Self {
            code: Self::UNKNOWN_CODE,
            message: Self::UNKNOWN_MESSAGE.to_string(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn from_google_api_error(m: ApiErrorModel) -> Self {
        Self {
            code: m.code.unwrap_or(Self::UNKNOWN_CODE),
            message: m
                .message
                .unwrap_or_else(|| Self::UNKNOWN_MESSAGE.to_string()),
            errors: m
                .errors
                .into_iter()
                .map(VerificationFailureDetail::from)
                .collect(),
        }
    }
}

impl Default for VerificationFailure {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<ApiErrorDetailModel> for VerificationFailureDetail {
    fn from(m: ApiErrorDetailModel) -> Self {
        Self {
            domain: m.domain,
            reason: m.reason,
            message: m.message,
            location_type: m.location_type,
            location: m.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_api_error_falls_back_to_defaults() {
        let m: ApiErrorModel = serde_json::from_value(serde_json::json!({ "code": 500 })).unwrap();
        let failure = VerificationFailure::from_google_api_error(m);
        assert_eq!(failure.code, 500);
        assert_eq!(failure.message, "Unknown error");
        assert!(failure.errors.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(VerificationFailure::default().to_string(), "-1: Unknown error");
    }
}
