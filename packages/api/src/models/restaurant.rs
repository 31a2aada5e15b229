use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::Id;

/// A vendor's restaurant. One per vendor as far as the client is concerned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Id,
    #[serde(rename = "nombre", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
