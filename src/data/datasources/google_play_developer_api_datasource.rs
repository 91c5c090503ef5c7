use std::{future::Future, pin::Pin, sync::Arc};

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info, warn};
use url::Url;
use yup_oauth2::{parse_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey};

use crate::{
    config::Credentials,
    constants::{
        GOOGLE_DEFAULT_TOKEN_URI, GOOGLE_PLAY_DEVELOPER_API_BASE_URL,
        GOOGLE_PLAY_DEVELOPER_API_SCOPE,
    },
    data::models::google_play_developer_api::{
        product_purchase_model::ProductPurchaseModel, publisher_response::PublisherResponse,
        subscription_purchase_model::SubscriptionPurchaseModel,
    },
    errors::{AuthError, PlayStoreError, TransportError},
};

/// Raw access to the purchase lookups of the Google Play Developer API.
///
/// Implementations return the response body as data, including API error
/// envelopes. Only network-level failures are errors.
#[async_trait]
pub trait GooglePlayDeveloperApiDatasource: Send + Sync {
    /// purchases.products.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v2/purchases.products/get
    ///
    /// packageName:
    ///   The package name of the application the inapp product was sold in (for
    ///   example, 'com.some.thing').
    /// productId:
    ///   The inapp product SKU (for example, 'com.some.thing.inapp1').
    /// token:
    ///   The token provided to the user's device when the inapp product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<PublisherResponse<ProductPurchaseModel>, TransportError>;

    /// purchases.subscriptions.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v2/purchases.subscriptions/get
    ///
    /// packageName:
    ///   The package name of the application for which this subscription was
    ///   purchased (for example, 'com.some.thing').
    /// subscriptionId:
    ///   The purchased subscription ID (for example, 'monthly001').
    /// token:
    ///   The token provided to the user's device when the subscription was
    ///   purchased.
    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<PublisherResponse<SubscriptionPurchaseModel>, TransportError>;
}

type TokenFuture = Pin<Box<dyn Future<Output = Result<String, AuthError>> + Send>>;

enum AccessTokenSource {
    Static(String),
    /// Backed by a yup-oauth2 authenticator, which caches the token and
    /// refreshes it before it expires.
    ServiceAccount(Box<dyn Fn() -> TokenFuture + Send + Sync>),
}

impl AccessTokenSource {
    async fn access_token(&self) -> Result<String, AuthError> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::ServiceAccount(fetch) => fetch().await,
        }
    }
}

/// Google Play Developer API client authenticated as a service account.
pub struct GooglePlayDeveloperApiDatasourceImpl {
    http_client: reqwest::Client,
    base_url: Url,
    tokens: AccessTokenSource,
}

#[async_trait]
impl GooglePlayDeveloperApiDatasource for GooglePlayDeveloperApiDatasourceImpl {
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<PublisherResponse<ProductPurchaseModel>, TransportError> {
        debug!(package_name, product_id, "looking up product purchase");
        let segments = [
            "applications",
            package_name,
            "purchases",
            "products",
            product_id,
            "tokens",
            token,
        ];
        self.callout(&segments, "purchases.products.get").await
    }

    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<PublisherResponse<SubscriptionPurchaseModel>, TransportError> {
        debug!(package_name, subscription_id, "looking up subscription purchase");
        let segments = [
            "applications",
            package_name,
            "purchases",
            "subscriptions",
            subscription_id,
            "tokens",
            token,
        ];
        self.callout(&segments, "purchases.subscriptions.get").await
    }
}

impl GooglePlayDeveloperApiDatasourceImpl {
    /// Authenticates the service account and binds the client to the public
    /// Google Play Developer API.
    pub async fn new(credentials: &Credentials) -> Result<Self, PlayStoreError> {
        Self::with_base_url(credentials, GOOGLE_PLAY_DEVELOPER_API_BASE_URL).await
    }

    /// Same as [`GooglePlayDeveloperApiDatasourceImpl::new`], sending requests
    /// to `base_url` (e.g. "https://www.googleapis.com/androidpublisher/v2").
    ///
    /// A first access token is requested right away so that bad credentials
    /// fail here rather than on the first verification.
    pub async fn with_base_url(
        credentials: &Credentials,
        base_url: &str,
    ) -> Result<Self, PlayStoreError> {
        let base_url = parse_base_url(base_url)?;
        let tokens = service_account_token_source(credentials).await?;
        tokens.access_token().await?;
        info!(
            client_email = %credentials.client_email,
            "obtained Google Play Developer API access token"
        );
        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            tokens,
        })
    }

    /// Builds a client around an access token obtained elsewhere. The token
    /// is never refreshed.
    pub fn with_access_token(
        base_url: &str,
        access_token: impl Into<String>,
    ) -> Result<Self, PlayStoreError> {
        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url: parse_base_url(base_url)?,
            tokens: AccessTokenSource::Static(access_token.into()),
        })
    }

    /// Appends `segments` to the base URL, percent-encoding each of them.
    fn endpoint(
        &self,
        segments: &[&str],
        function_name: &'static str,
    ) -> Result<Url, TransportError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(TransportError::InvalidPathSegment {
                function_name,
                segment: segment.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        // Base URLs are checked to accept path segments on construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn callout<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        function_name: &'static str,
    ) -> Result<PublisherResponse<T>, TransportError> {
        let url = self.endpoint(segments, function_name)?;
        let access_token = self
            .tokens
            .access_token()
            .await
            .map_err(|source| TransportError::Auth {
                function_name,
                source,
            })?;

        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|source| TransportError::Send {
                function_name,
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| TransportError::ReadBody {
                function_name,
                source,
            })?;

        // Error statuses still carry a body worth classifying.
        if !status.is_success() {
            warn!(function_name, %status, "callout returned with error status code");
        }
        let parsed = PublisherResponse::from_text(&body);
        if let PublisherResponse::Unrecognized(_) = parsed {
            warn!(function_name, %status, "callout returned an unrecognized payload");
        }
        Ok(parsed)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, PlayStoreError> {
    match Url::parse(base_url) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        Ok(_) => Err(PlayStoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: None,
        }),
        Err(e) => Err(PlayStoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: Some(e),
        }),
    }
}

async fn service_account_token_source(
    credentials: &Credentials,
) -> Result<AccessTokenSource, AuthError> {
    let key = service_account_key(credentials).map_err(AuthError::KeyInvalid)?;
    let authenticator = Arc::new(
        ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(AuthError::AuthenticatorBuild)?,
    );
    Ok(AccessTokenSource::ServiceAccount(Box::new(
        move || -> TokenFuture {
            let authenticator = Arc::clone(&authenticator);
            Box::pin(async move {
                let scopes = &[GOOGLE_PLAY_DEVELOPER_API_SCOPE];
                let token = authenticator
                    .token(scopes)
                    .await
                    .map_err(AuthError::TokenRequest)?;
                token
                    .token()
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .ok_or(AuthError::EmptyToken)
            })
        },
    )))
}

fn service_account_key(credentials: &Credentials) -> std::io::Result<ServiceAccountKey> {
    let keyfile = json!({
        "type": "service_account",
        "client_id": credentials.client_id,
        "client_email": credentials.client_email,
        "private_key": credentials.private_key,
        "token_uri": credentials.token_uri.as_deref().unwrap_or(GOOGLE_DEFAULT_TOKEN_URI),
    });
    parse_service_account_key(keyfile.to_string())
}
