use serde::Deserialize;
use serde_repr::Deserialize_repr;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

use super::product_purchase_model::{AcknowledgementState, PurchaseType};

/// Data structure returned by the Google Play Developer API when querying for a
/// subscription purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v2/purchases.subscriptions#SubscriptionPurchase
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchaseModel {
    /// This kind represents a subscriptionPurchase object in the
    /// androidpublisher service.
    pub(crate) kind: Option<String>,
    /// Time at which the subscription was granted, in milliseconds since the
    /// Epoch.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) start_time_millis: Option<i64>,
    /// Time at which the subscription will expire, in milliseconds since the
    /// Epoch.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) expiry_time_millis: Option<i64>,
    /// Whether the subscription will automatically be renewed when it reaches
    /// its current expiry time.
    pub(crate) auto_renewing: Option<bool>,
    /// ISO 4217 currency code for the subscription price.
    pub(crate) price_currency_code: Option<String>,
    /// Price of the subscription, not including tax. Price is expressed in
    /// micro-units, where 1,000,000 micro-units represents one unit of the
    /// currency.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) price_amount_micros: Option<i64>,
    /// ISO 3166-1 alpha-2 billing country/region code of the user at the time
    /// the subscription was granted.
    pub(crate) country_code: Option<String>,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    pub(crate) developer_payload: Option<String>,
    /// The payment state of the subscription. Not present for canceled,
    /// expired subscriptions.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) payment_state: Option<PaymentState>,
    /// The reason why a subscription was canceled or is not auto-renewing.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) cancel_reason: Option<CancelReason>,
    /// The time at which the subscription was canceled by the user, in
    /// milliseconds since the epoch. Only present if cancelReason is 0.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) user_cancellation_time_millis: Option<i64>,
    /// The order id of the latest recurring order associated with the purchase
    /// of the subscription.
    pub(crate) order_id: Option<String>,
    /// The purchase token of the originating purchase if this subscription is
    /// an upgrade, downgrade or re-signup.
    pub(crate) linked_purchase_token: Option<String>,
    /// The type of purchase of the subscription. This field is only set if
    /// this purchase was not made using the standard in-app billing flow.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) purchase_type: Option<PurchaseType>,
    /// The acknowledgement state of the subscription product.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) acknowledgement_state: Option<AcknowledgementState>,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum PaymentState {
    PaymentPending = 0,
    PaymentReceived = 1,
    FreeTrial = 2,
    PendingDeferredUpgradeDowngrade = 3,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum CancelReason {
    CanceledByUser = 0,
    CanceledBySystem = 1,
    Replaced = 2,
    CanceledByDeveloper = 3,
}
