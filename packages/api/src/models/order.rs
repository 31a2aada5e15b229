use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::Id;

/// An order, optionally expanded with its user and items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Id,
    #[serde(rename = "estado", alias = "status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "repartidorId", alias = "driverId", default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<Id>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of `POST /orders/:id/rate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRating {
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}
