use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::data::models::google_play_developer_api::product_purchase_model::{
    AcknowledgementState, ConsumptionState, ProductPurchaseModel, PurchaseState, PurchaseType,
};

/// A verified one-time product purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub kind: Option<String>,
    pub purchase_time_millis: Option<i64>,
    pub purchase_state: Option<PurchaseState>,
    pub consumption_state: Option<ConsumptionState>,
    pub developer_payload: Option<String>,
    pub order_id: Option<String>,
    pub acknowledgement_state: Option<AcknowledgementState>,
    pub purchase_type: Option<PurchaseType>,
    raw: Map<String, Value>,
}

impl Receipt {
    pub(crate) fn from_google_product_purchase(
        m: ProductPurchaseModel,
        raw: Map<String, Value>,
    ) -> Self {
        Self {
            kind: m.kind,
            purchase_time_millis: m.purchase_time_millis,
            purchase_state: m.purchase_state,
            consumption_state: m.consumption_state,
            developer_payload: m.developer_payload,
            order_id: m.order_id,
            acknowledgement_state: m.acknowledgement_state,
            purchase_type: m.purchase_type,
            raw,
        }
    }

    pub fn is_purchased(&self) -> bool {
        self.purchase_state == Some(PurchaseState::Purchased)
    }

    pub fn is_canceled(&self) -> bool {
        self.purchase_state == Some(PurchaseState::Canceled)
    }

    pub fn is_pending(&self) -> bool {
        self.purchase_state == Some(PurchaseState::Pending)
    }

    pub fn is_consumed(&self) -> bool {
        self.consumption_state == Some(ConsumptionState::Consumed)
    }

    pub fn purchased_at(&self) -> Option<DateTime<Utc>> {
        self.purchase_time_millis
            .and_then(DateTime::from_timestamp_millis)
    }

    /// The response body exactly as returned by the API.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}
