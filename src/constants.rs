pub(crate) const GOOGLE_PLAY_DEVELOPER_API_BASE_URL: &str =
    "https://www.googleapis.com/androidpublisher/v2";
pub(crate) const GOOGLE_PLAY_DEVELOPER_API_SCOPE: &str =
    "https://www.googleapis.com/auth/androidpublisher";
pub(crate) const GOOGLE_DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub(crate) const PRODUCT_PURCHASE_KIND: &str = "androidpublisher#productPurchase";
pub(crate) const SUBSCRIPTION_PURCHASE_KIND: &str = "androidpublisher#subscriptionPurchase";

/// Environment variables holding the raw credential triple, in the order
/// `client_id`, `client_email`, `private_key`.
pub(crate) const CREDENTIAL_ENV_VARS: [&str; 3] =
    ["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_EMAIL", "GOOGLE_PRIVATE_KEY"];

/// Environment variables holding a path to a JSON keyfile, checked in order.
pub(crate) const KEYFILE_ENV_VARS: [&str; 4] = [
    "ANDROID_PUBLISHER_KEYFILE_JSON",
    "GOOGLE_CLOUD_CREDENTIALS_JSON",
    "GOOGLE_CLOUD_KEYFILE_JSON",
    "GCLOUD_KEYFILE_JSON",
];
