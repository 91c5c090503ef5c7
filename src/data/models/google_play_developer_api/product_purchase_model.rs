use serde::Deserialize;
use serde_repr::Deserialize_repr;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

/// Data structure returned by the Google Play Developer API when querying for a
/// product purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v2/purchases.products#ProductPurchase
///
/// Whether fields are nullable is not documented explicitly in the API
/// reference, so every field is treated as optional. int64 values are sent as
/// JSON strings. Enum values this crate does not know about decode as `None`
/// instead of rejecting the whole purchase.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchaseModel {
    /// This kind represents an inappPurchase object in the androidpublisher
    /// service.
    pub(crate) kind: Option<String>,
    /// The time the product was purchased, in milliseconds since the epoch (Jan
    /// 1, 1970).
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) purchase_time_millis: Option<i64>,
    /// The purchase state of the order.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) purchase_state: Option<PurchaseState>,
    /// The consumption state of the inapp product.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) consumption_state: Option<ConsumptionState>,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    pub(crate) developer_payload: Option<String>,
    /// The order id associated with the purchase of the inapp product.
    pub(crate) order_id: Option<String>,
    /// The acknowledgement state of the inapp product.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) acknowledgement_state: Option<AcknowledgementState>,
    /// The type of purchase of the inapp product. This field is only set if
    /// this purchase was not made using the standard in-app billing flow.
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub(crate) purchase_type: Option<PurchaseType>,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum PurchaseState {
    Purchased = 0,
    Canceled = 1,
    Pending = 2,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum ConsumptionState {
    YetToBeConsumed = 0,
    Consumed = 1,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum PurchaseType {
    Test = 0,
    Promo = 1,
    Rewarded = 2,
}

#[derive(Debug, Clone, Copy, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum AcknowledgementState {
    YetToBeAcknowledged = 0,
    Acknowledged = 1,
}
