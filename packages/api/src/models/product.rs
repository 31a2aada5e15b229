use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::Id;

/// A menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    #[serde(rename = "nombre", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "precio", alias = "price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Field names the backend has used for a product's restaurant.
pub(crate) const RESTAURANT_ID_FIELDS: [&str; 3] = ["restaurantId", "idRestaurante", "restaurant_id"];

impl Product {
    /// The owning restaurant, under whichever spelling the backend used.
    pub fn restaurant_id(&self) -> Option<Id> {
        RESTAURANT_ID_FIELDS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Whether a raw product names `restaurant` under any known spelling.
pub(crate) fn belongs_to(product: &Value, restaurant: &Id) -> bool {
    RESTAURANT_ID_FIELDS
        .iter()
        .filter_map(|key| product.get(*key))
        .any(|value| restaurant.matches(value))
}
