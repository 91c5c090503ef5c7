use serde::Deserialize;

/// The `error` object of a Google API error envelope:
///
/// ```json
/// { "error": { "code": 401, "message": "...", "errors": [ ... ] } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorModel {
    pub(crate) code: Option<i64>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorDetailModel>,
}

/// One entry of the `errors` list of an API error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetailModel {
    pub domain: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub location_type: Option<String>,
    pub location: Option<String>,
}
