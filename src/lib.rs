pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod google_play_developer_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod google_play_developer_api {
            pub(crate) mod api_error_model;
            pub(crate) mod product_purchase_model;
            pub(crate) mod publisher_response;
            pub(crate) mod subscription_purchase_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod product_verification;
        pub(crate) mod subscription_verification;
    }
}

pub mod domain {
    pub mod entities {
        pub mod receipt;
        pub mod subscription;
        pub mod verification_failure;
        pub mod verification_outcome;
    }
}

pub mod config;
mod constants;
pub mod errors;
pub mod verifier;

pub use config::{Config, Credentials};
pub use data::{
    datasources::google_play_developer_api_datasource::{
        GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
    },
    models::google_play_developer_api::{
        api_error_model::{ApiErrorDetailModel, ApiErrorModel},
        product_purchase_model::{
            AcknowledgementState, ConsumptionState, ProductPurchaseModel, PurchaseState,
            PurchaseType,
        },
        publisher_response::PublisherResponse,
        subscription_purchase_model::{CancelReason, PaymentState, SubscriptionPurchaseModel},
    },
};
pub use domain::entities::{
    receipt::Receipt,
    subscription::Subscription,
    verification_failure::{VerificationFailure, VerificationFailureDetail},
    verification_outcome::VerificationOutcome,
};
pub use errors::{AuthError, ConfigError, PlayStoreError, TransportError};
pub use verifier::Verifier;
