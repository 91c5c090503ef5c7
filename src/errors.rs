use std::path::PathBuf;

use thiserror::Error;

/// Credentials could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential field '{0}'")]
    MissingField(&'static str),

    #[error("no keyfile found, searched env vars: {}", .searched.join(", "))]
    NoKeyfileFound { searched: Vec<&'static str> },

    #[error("keyfile {} could not be read", .path.display())]
    KeyfileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keyfile {} is not a valid service account keyfile", .path.display())]
    KeyfileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The Google Play Developer API service account could not be authenticated.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Google Play API service account key could not be parsed")]
    KeyInvalid(#[source] std::io::Error),

    #[error("Google Play API service account authenticator could not be built")]
    AuthenticatorBuild(#[source] std::io::Error),

    #[error("Google Play API service account token could not be obtained")]
    TokenRequest(#[source] yup_oauth2::Error),

    #[error("Google Play API service account token is empty")]
    EmptyToken,
}

/// Network-level failure while calling out to the Google Play Developer API.
///
/// API error envelopes are not transport errors; they surface as
/// [`crate::VerificationFailure`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{function_name}: callout failed to send")]
    Send {
        function_name: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{function_name}: failed to read callout response")]
    ReadBody {
        function_name: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{function_name}: access token unavailable")]
    Auth {
        function_name: &'static str,
        #[source]
        source: AuthError,
    },

    #[error("{function_name}: {segment:?} is not a valid path segment")]
    InvalidPathSegment {
        function_name: &'static str,
        segment: String,
    },
}

/// Failure while constructing a [`crate::Verifier`].
#[derive(Debug, Error)]
pub enum PlayStoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("invalid Google Play Developer API base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },
}
