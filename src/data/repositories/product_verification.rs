use tracing::debug;

use crate::{
    constants::PRODUCT_PURCHASE_KIND,
    data::{
        datasources::google_play_developer_api_datasource::GooglePlayDeveloperApiDatasource,
        models::google_play_developer_api::publisher_response::PublisherResponse,
    },
    domain::entities::{
        receipt::Receipt, verification_failure::VerificationFailure,
        verification_outcome::VerificationOutcome,
    },
    errors::TransportError,
};

/// Verifies a single product purchase token.
pub(crate) struct ProductVerification<'a, C: GooglePlayDeveloperApiDatasource + ?Sized> {
    client: &'a C,
    package: &'a str,
    product_id: &'a str,
    token: &'a str,
}

impl<'a, C: GooglePlayDeveloperApiDatasource + ?Sized> ProductVerification<'a, C> {
    pub(crate) fn new(client: &'a C, package: &'a str, product_id: &'a str, token: &'a str) -> Self {
        Self {
            client,
            package,
            product_id,
            token,
        }
    }

    pub(crate) async fn call(self) -> Result<VerificationOutcome<Receipt>, TransportError> {
        let response = self
            .client
            .get_product_purchase(self.package, self.product_id, self.token)
            .await?;
        let outcome = match response {
            PublisherResponse::Purchase { purchase, raw }
                if purchase.kind.as_deref() == Some(PRODUCT_PURCHASE_KIND) =>
            {
                VerificationOutcome::Success(Receipt::from_google_product_purchase(purchase, raw))
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
            product_id = self.product_id,
            success = outcome.is_success(),
            "product verification finished"
        );
        Ok(outcome)
    }
}
