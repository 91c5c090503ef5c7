use tracing::debug;

use crate::{
    constants::SUBSCRIPTION_PURCHASE_KIND,
    data::{
        datasources::google_play_developer_api_datasource::GooglePlayDeveloperApiDatasource,
        models::google_play_developer_api::publisher_response::PublisherResponse,
    },
    domain::entities::{
        subscription::Subscription, verification_failure::VerificationFailure,
        verification_outcome::VerificationOutcome,
    },
    errors::TransportError,
};

/// Verifies a single subscription purchase token. A subscription is only valid
/// if it carries an expiry time.
pub(crate) struct SubscriptionVerification<'a, C: GooglePlayDeveloperApiDatasource + ?Sized> {
    client: &'a C,
    package: &'a str,
    subscription_id: &'a str,
    token: &'a str,
}

impl<'a, C: GooglePlayDeveloperApiDatasource + ?Sized> SubscriptionVerification<'a, C> {
    pub(crate) fn new(
        client: &'a C,
        package: &'a str,
        subscription_id: &'a str,
        token: &'a str,
    ) -> Self {
        Self {
            client,
            package,
            subscription_id,
            token,
        }
    }

    pub(crate) async fn call(self) -> Result<VerificationOutcome<Subscription>, TransportError> {
        let response = self
            .client
            .get_subscription_purchase(self.package, self.subscription_id, self.token)
            .await?;
        let outcome = match response {
            PublisherResponse::Purchase { purchase, raw }
                if purchase.kind.as_deref() == Some(SUBSCRIPTION_PURCHASE_KIND) =>
            {
                match Subscription::from_google_subscription_purchase(purchase, raw) {
                    Some(subscription) => VerificationOutcome::Success(subscription),
                    None => VerificationOutcome::Failure(VerificationFailure::unknown()),
                }
            }
            PublisherResponse::ApiError(error) => {
                VerificationOutcome::Failure(VerificationFailure::from_google_api_error(error))
            }
            PublisherResponse::Purchase { .. } | PublisherResponse::Unrecognized(_) => {
                VerificationOutcome::Failure(VerificationFailure::unknown())
            }
        };
        debug!(
            package = self.package,
            subscription_id = self.subscription_id,
            success = outcome.is_success(),
            "subscription verification finished"
        );
        Ok(outcome)
    }
}
