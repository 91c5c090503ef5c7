use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::data::models::google_play_developer_api::{
    product_purchase_model::{AcknowledgementState, PurchaseType},
    subscription_purchase_model::{CancelReason, PaymentState, SubscriptionPurchaseModel},
};

/// A verified subscription purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub kind: Option<String>,
    pub start_time_millis: Option<i64>,
    pub expiry_time_millis: i64,
    pub auto_renewing: Option<bool>,
    pub price_currency_code: Option<String>,
    pub price_amount_micros: Option<i64>,
    pub country_code: Option<String>,
    pub developer_payload: Option<String>,
    pub payment_state: Option<PaymentState>,
    pub cancel_reason: Option<CancelReason>,
    pub user_cancellation_time_millis: Option<i64>,
    pub order_id: Option<String>,
    pub linked_purchase_token: Option<String>,
    pub purchase_type: Option<PurchaseType>,
    pub acknowledgement_state: Option<AcknowledgementState>,
    raw: Map<String, Value>,
}

impl Subscription {
    /// Returns `None` if the purchase carries no expiry time, which never
    /// counts as a valid subscription.
    pub(crate) fn from_google_subscription_purchase(
        m: SubscriptionPurchaseModel,
        raw: Map<String, Value>,
    ) -> Option<Self> {
        Some(Self {
            kind: m.kind,
            start_time_millis: m.start_time_millis,
            expiry_time_millis: m.expiry_time_millis?,
            auto_renewing: m.auto_renewing,
            price_currency_code: m.price_currency_code,
            price_amount_micros: m.price_amount_micros,
            country_code: m.country_code,
            developer_payload: m.developer_payload,
            payment_state: m.payment_state,
            cancel_reason: m.cancel_reason,
            user_cancellation_time_millis: m.user_cancellation_time_millis,
            order_id: m.order_id,
            linked_purchase_token: m.linked_purchase_token,
            purchase_type: m.purchase_type,
            acknowledgement_state: m.acknowledgement_state,
            raw,
        })
    }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.start_time_millis
            .and_then(DateTime::from_timestamp_millis)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expiry_time_millis)
    }

    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.user_cancellation_time_millis
            .and_then(DateTime::from_timestamp_millis)
    }

    pub fn is_auto_renewing(&self) -> bool {
        self.auto_renewing.unwrap_or(false)
    }

    pub fn is_payment_pending(&self) -> bool {
        self.payment_state == Some(PaymentState::PaymentPending)
    }

    pub fn is_payment_received(&self) -> bool {
        self.payment_state == Some(PaymentState::PaymentReceived)
    }

    pub fn is_trial(&self) -> bool {
        self.payment_state == Some(PaymentState::FreeTrial)
    }

    pub fn is_deferred(&self) -> bool {
        self.payment_state == Some(PaymentState::PendingDeferredUpgradeDowngrade)
    }

    pub fn is_canceled_by_user(&self) -> bool {
        self.cancel_reason == Some(CancelReason::CanceledByUser)
    }

    pub fn is_canceled_by_system(&self) -> bool {
        self.cancel_reason == Some(CancelReason::CanceledBySystem)
    }

    pub fn is_replaced(&self) -> bool {
        self.cancel_reason == Some(CancelReason::Replaced)
    }

    pub fn is_canceled_by_developer(&self) -> bool {
        self.cancel_reason == Some(CancelReason::CanceledByDeveloper)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_time_millis <= now.timestamp_millis()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whole days elapsed since expiry; 0 while the subscription is running.
    pub fn overdue_days(&self, now: DateTime<Utc>) -> i64 {
        let overdue_millis = now.timestamp_millis().saturating_sub(self.expiry_time_millis);
        (overdue_millis / 86_400_000).max(0)
    }

    /// Price in currency units, not including tax.
    pub fn price_amount(&self) -> Option<f64> {
        self.price_amount_micros
            .map(|micros| micros as f64 / 1_000_000.0)
    }

    /// The response body exactly as returned by the API.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}
