use serde_json::Value;

use crate::client::ApiClient;
use crate::envelope::{decode, unwrap_body};
use crate::error::{ApiError, ApiResultExt};
use crate::models::{Id, Order, OrderRating};

/// Relations expanded when fetching a single order.
const ORDER_EXPAND: &str = "usuario,orderItems.producto";

/// Order detail and rating.
#[derive(Clone, Copy)]
pub struct Orders<'a> {
    client: &'a ApiClient,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /orders/:id` with the user and ordered products expanded.
    pub async fn get(&self, id: &Id) -> Result<Order, ApiError> {
        let body = self
            .client
            .get(&["orders", &id.to_string()], &[("_expand", ORDER_EXPAND)])
            .await
            .or_message("Failed to load order")?;
        decode(unwrap_body(body).or_message("Failed to load order")?)
    }

    /// `POST /orders/:id/rate`. Ratings run from 1 to 5.
    pub async fn rate(&self, id: &Id, rating: u8, comment: &str) -> Result<Value, ApiError> {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::InvalidRequest(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }
        let payload = OrderRating {
            rating,
            comment: comment.to_string(),
        };
        let body = self
            .client
            .post(&["orders", &id.to_string(), "rate"], &payload)
            .await
            .or_message("Failed to rate order")?;
        unwrap_body(body).or_message("Failed to rate order")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_order_expands_relations() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/orders/10")
                .query_param("_expand", "usuario,orderItems.producto");
            then.status(200).json_body(json!({
                "id": 10,
                "estado": "entregado",
                "usuario": {"id": 1}
            }));
        });

        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();
        let order = client.orders().get(&Id::from(10)).await.unwrap();
        m.assert();
        assert_eq!(order.id, Id::from(10));
        assert!(order.fields.contains_key("usuario"));
    }

    #[tokio::test]
    async fn test_rate_order() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST)
                .path("/orders/10/rate")
                .json_body(json!({"rating": 5, "comment": ""}));
            then.status(201).json_body(json!({"success": true, "data": {"ok": true}}));
        });

        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();
        let body = client.orders().rate(&Id::from(10), 5, "").await.unwrap();
        m.assert();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_rate_out_of_range_sends_nothing() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/orders/10/rate");
            then.status(201);
        });

        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();
        let err = client.orders().rate(&Id::from(10), 0, "meh").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        m.assert_calls(0);
    }
}
