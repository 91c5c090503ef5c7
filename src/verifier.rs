use crate::{
    config::Config,
    data::{
        datasources::google_play_developer_api_datasource::{
            GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
        },
        repositories::{
            product_verification::ProductVerification,
            subscription_verification::SubscriptionVerification,
        },
    },
    domain::entities::{
        receipt::Receipt, subscription::Subscription, verification_outcome::VerificationOutcome,
    },
    errors::{PlayStoreError, TransportError},
};

/// Verifies Google Play purchase tokens.
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use play_store_verifier::{Config, VerificationOutcome, Verifier};
///
/// let verifier = Verifier::new(&Config::default()).await?;
/// match verifier.verify("my.bundle", "product_1", "a-very-long-secure-token").await? {
///     VerificationOutcome::Success(receipt) => println!("purchased: {}", receipt.is_purchased()),
///     VerificationOutcome::Failure(failure) => println!("rejected: {failure}"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct Verifier<C: GooglePlayDeveloperApiDatasource = GooglePlayDeveloperApiDatasourceImpl> {
    client: C,
}

impl<C: GooglePlayDeveloperApiDatasource> Verifier<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    /// Looks up a one-time product purchase.
    pub async fn verify(
        &self,
        package: &str,
        product_id: &str,
        token: &str,
    ) -> Result<VerificationOutcome<Receipt>, TransportError> {
        ProductVerification::new(&self.client, package, product_id, token)
            .call()
            .await
    }

    /// Looks up a subscription purchase.
    pub async fn verify_subscription(
        &self,
        package: &str,
        subscription_id: &str,
        token: &str,
    ) -> Result<VerificationOutcome<Subscription>, TransportError> {
        SubscriptionVerification::new(&self.client, package, subscription_id, token)
            .call()
            .await
    }
}

impl Verifier<GooglePlayDeveloperApiDatasourceImpl> {
    pub async fn new(config: &Config) -> Result<Self, PlayStoreError> {
        let credentials = config.resolve()?;
        Ok(Self::with_client(
            GooglePlayDeveloperApiDatasourceImpl::new(&credentials).await?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        data::models::google_play_developer_api::{
            product_purchase_model::{ConsumptionState, ProductPurchaseModel, PurchaseState},
            publisher_response::PublisherResponse,
            subscription_purchase_model::SubscriptionPurchaseModel,
        },
        domain::entities::verification_failure::VerificationFailure,
    };

    const INSUFFICIENT_PERMISSIONS: &str =
        "The current user has insufficient permissions to perform the requested operation.";

    /// Answers each token with a canned response body.
    #[derive(Default)]
    struct MockDatasource {
        bodies: HashMap<String, Value>,
    }

    impl MockDatasource {
        fn with(mut self, token: &str, body: Value) -> Self {
            self.bodies.insert(token.to_string(), body);
            self
        }

        fn body(&self, token: &str) -> Value {
            self.bodies.get(token).cloned().unwrap_or(Value::Null)
        }
    }

    #[async_trait]
    impl GooglePlayDeveloperApiDatasource for MockDatasource {
        async fn get_product_purchase(
            &self,
            _package_name: &str,
            _product_id: &str,
            token: &str,
        ) -> Result<PublisherResponse<ProductPurchaseModel>, TransportError> {
            Ok(PublisherResponse::from_body(self.body(token)))
        }

        async fn get_subscription_purchase(
            &self,
            _package_name: &str,
            _subscription_id: &str,
            token: &str,
        ) -> Result<PublisherResponse<SubscriptionPurchaseModel>, TransportError> {
            Ok(PublisherResponse::from_body(self.body(token)))
        }
    }

    fn failure_body() -> Value {
        json!({
            "error": {
                "errors": [{
                    "domain": "androidpublisher",
                    "reason": "permissionDenied",
                    "message": INSUFFICIENT_PERMISSIONS
                }],
                "code": 401,
                "message": INSUFFICIENT_PERMISSIONS
            }
        })
    }

    fn product_body() -> Value {
        json!({
            "kind": "androidpublisher#productPurchase",
            "purchaseTimeMillis": "1421676237413",
            "purchaseState": 0,
            "consumptionState": 0,
            "developerPayload": "payload that gets stored and returned"
        })
    }

    fn subscription_body() -> Value {
        json!({
            "kind": "androidpublisher#subscriptionPurchase",
            "startTimeMillis": "1459540113244",
            "expiryTimeMillis": "1462132088610",
            "autoRenewing": false,
            "developerPayload": "payload that gets stored and returned",
            "cancelReason": 0,
            "paymentState": 1
        })
    }

    fn assert_permission_failure(failure: &VerificationFailure) {
        assert_eq!(failure.code, 401);
        assert_eq!(failure.message, INSUFFICIENT_PERMISSIONS);
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].reason.as_deref(), Some("permissionDenied"));
    }

    #[tokio::test]
    async fn test_verify_success_mirrors_raw_response() {
        let verifier =
            Verifier::with_client(MockDatasource::default().with("token", product_body()));

        let receipt = verifier
            .verify("the_package", "the_id", "token")
            .await
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(Value::Object(receipt.raw().clone()), product_body());
        assert_eq!(receipt.kind.as_deref(), Some("androidpublisher#productPurchase"));
        assert_eq!(receipt.purchase_time_millis, Some(1421676237413));
        assert_eq!(receipt.purchase_state, Some(PurchaseState::Purchased));
        assert_eq!(receipt.consumption_state, Some(ConsumptionState::YetToBeConsumed));
        assert_eq!(
            receipt.developer_payload.as_deref(),
            Some("payload that gets stored and returned")
        );
    }

    #[tokio::test]
    async fn test_verify_unknown_purchase_type_is_success() {
        let mut body = product_body();
        body["purchaseType"] = json!(3);
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let receipt = verifier
            .verify("the_package", "the_id", "token")
            .await
            .unwrap()
            .into_result()
            .unwrap();

        assert!(receipt.is_purchased());
        assert_eq!(receipt.purchase_type, None);
        assert_eq!(receipt.raw()["purchaseType"], 3);
    }

    #[tokio::test]
    async fn test_verify_api_error() {
        let verifier =
            Verifier::with_client(MockDatasource::default().with("token", failure_body()));

        let outcome = verifier.verify("the_package", "the_id", "token").await.unwrap();

        assert_permission_failure(outcome.failure().unwrap());
    }

    #[tokio::test]
    async fn test_verify_wrong_kind_is_unknown_failure() {
        let mut body = product_body();
        body["kind"] = json!("androidpublisher#subscriptionPurchase");
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let outcome = verifier.verify("the_package", "the_id", "token").await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Failure(VerificationFailure::unknown()));
    }

    #[tokio::test]
    async fn test_verify_missing_kind_is_failure() {
        let mut body = product_body();
        body.as_object_mut().unwrap().remove("kind");
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let outcome = verifier.verify("the_package", "the_id", "token").await.unwrap();

        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_verify_unrecognized_payload_is_unknown_failure() {
        let verifier = Verifier::with_client(
            MockDatasource::default().with("token", json!({ "error": "invalid_grant" })),
        );

        let failure = verifier
            .verify("the_package", "the_id", "token")
            .await
            .unwrap()
            .into_result()
            .unwrap_err();

        assert_eq!(failure.code, -1);
        assert_eq!(failure.message, "Unknown error");
        assert!(failure.errors.is_empty());
    }

    #[tokio::test]
    async fn test_verify_subscription_success() {
        let verifier =
            Verifier::with_client(MockDatasource::default().with("token", subscription_body()));

        let subscription = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(Value::Object(subscription.raw().clone()), subscription_body());
        assert_eq!(subscription.expiry_time_millis, 1462132088610);
        assert!(subscription.is_payment_received());
        assert!(subscription.is_canceled_by_user());
        assert!(!subscription.is_auto_renewing());
    }

    #[tokio::test]
    async fn test_verify_subscription_unknown_states_are_success() {
        let mut body = subscription_body();
        body["paymentState"] = json!(4);
        body["cancelReason"] = json!(7);
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let subscription = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(subscription.payment_state, None);
        assert_eq!(subscription.cancel_reason, None);
        assert!(!subscription.is_payment_received());
    }

    #[tokio::test]
    async fn test_verify_subscription_api_error() {
        let verifier =
            Verifier::with_client(MockDatasource::default().with("token", failure_body()));

        let outcome = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap();

        assert_permission_failure(outcome.failure().unwrap());
    }

    #[tokio::test]
    async fn test_verify_subscription_without_expiry_is_failure() {
        let mut body = subscription_body();
        body.as_object_mut().unwrap().remove("expiryTimeMillis");
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let outcome = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::Failure(VerificationFailure::unknown()));
    }

    #[tokio::test]
    async fn test_verify_subscription_null_expiry_is_failure() {
        let mut body = subscription_body();
        body["expiryTimeMillis"] = Value::Null;
        let verifier = Verifier::with_client(MockDatasource::default().with("token", body));

        let outcome = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap();

        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_verify_subscription_rejects_product_kind() {
        let verifier =
            Verifier::with_client(MockDatasource::default().with("token", product_body()));

        let outcome = verifier
            .verify_subscription("the_package", "the_id", "token")
            .await
            .unwrap();

        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_calls_do_not_share_state() {
        let verifier = Verifier::with_client(
            MockDatasource::default()
                .with("good", product_body())
                .with("bad", failure_body()),
        );

        let first = verifier.verify("the_package", "the_id", "good").await.unwrap();
        let second = verifier.verify("the_package", "the_id", "bad").await.unwrap();
        let third = verifier.verify("the_package", "the_id", "good").await.unwrap();

        assert!(first.is_success());
        assert!(!second.is_success());
        assert_eq!(first, third);
    }
}
