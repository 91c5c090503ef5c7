use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::api_error_model::ApiErrorModel;

/// Response body of a Google Play Developer API purchase lookup, classified by
/// shape. The body is kept as data regardless of the HTTP status code.
#[derive(Debug, Clone, PartialEq)]
pub enum PublisherResponse<T> {
    /// The body deserialized into the expected purchase resource. `raw` holds
    /// the JSON object verbatim.
    Purchase { purchase: T, raw: Map<String, Value> },
    /// The body is a Google API error envelope; holds its `error` object.
    ApiError(ApiErrorModel),
    /// Anything else: a non-object body, a malformed resource, or an `error`
    /// field that is not an API error object.
    Unrecognized(Value),
}

impl<T: DeserializeOwned> PublisherResponse<T> {
    pub fn from_body(body: Value) -> Self {
        let Value::Object(raw) = body else {
            return Self::Unrecognized(body);
        };
        if let Some(error) = raw.get("error") {
            return match serde_json::from_value(error.clone()) {
                Ok(error) => Self::ApiError(error),
                Err(_) => Self::Unrecognized(Value::Object(raw)),
            };
        }
        match serde_json::from_value(Value::Object(raw.clone())) {
            Ok(purchase) => Self::Purchase { purchase, raw },
            Err(_) => Self::Unrecognized(Value::Object(raw)),
        }
    }

    /// Parses a raw response body. Bodies that are not JSON become
    /// [`PublisherResponse::Unrecognized`] holding the text as a string.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(body) => Self::from_body(body),
            Err(_) => Self::Unrecognized(Value::String(text.to_string())),
        }
    }
}
