use serde_json::json;

use crate::client::ApiClient;
use crate::envelope::{decode, unwrap_body};
use crate::error::{ApiError, ApiResultExt};
use crate::models::{Id, Order, Role, UserRecord};

/// Drivers (users with the `repartidor` role) and their deliveries.
#[derive(Clone, Copy)]
pub struct Drivers<'a> {
    client: &'a ApiClient,
}

impl<'a> Drivers<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /users?rol=repartidor`.
    pub async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        let body = self
            .client
            .get(&["users"], &[("rol", Role::Driver.as_str())])
            .await
            .or_message("Failed to load drivers")?;
        decode(unwrap_body(body).or_message("Failed to load drivers")?)
    }

    /// `GET /users/:id?rol=repartidor`.
    pub async fn get(&self, id: &Id) -> Result<UserRecord, ApiError> {
        let body = self
            .client
            .get(&["users", &id.to_string()], &[("rol", Role::Driver.as_str())])
            .await
            .or_message("Failed to load driver")?;
        decode(unwrap_body(body).or_message("Failed to load driver")?)
    }

    /// `GET /orders?repartidorId=:id`: orders assigned to a driver.
    pub async fn orders(&self, driver_id: &Id) -> Result<Vec<Order>, ApiError> {
        let driver_id = driver_id.to_string();
        let body = self
            .client
            .get(&["orders"], &[("repartidorId", driver_id.as_str())])
            .await
            .or_message("Failed to load driver orders")?;
        decode(unwrap_body(body).or_message("Failed to load driver orders")?)
    }

    /// `PATCH /orders/:id` with `{ "estado": status }`.
    pub async fn update_order_status(&self, order_id: &Id, status: &str) -> Result<Order, ApiError> {
        let body = self
            .client
            .patch(&["orders", &order_id.to_string()], &json!({ "estado": status }))
            .await
            .or_message("Failed to update order status")?;
        decode(unwrap_body(body).or_message("Failed to update order status")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_list_drivers_raw_body() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/users").query_param("rol", "repartidor");
            then.status(200).json_body(json!([
                {"id": 3, "nombre": "Rita", "email": "rita@b.com", "rol": "repartidor"}
            ]));
        });

        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();
        let drivers = client.drivers().list().await.unwrap();
        m.assert();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].role, Role::Driver);
    }

    #[tokio::test]
    async fn test_driver_orders_and_status_update() {
        let server = MockServer::start();
        let _orders = server.mock(|when, then| {
            when.method(GET).path("/orders").query_param("repartidorId", "3");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{"id": 10, "estado": "pendiente", "repartidorId": 3}]
            }));
        });
        let update = server.mock(|when, then| {
            when.method(PATCH)
                .path("/orders/10")
                .json_body(json!({"estado": "entregado"}));
            then.status(200)
                .json_body(json!({"id": 10, "estado": "entregado", "repartidorId": 3}));
        });
        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();

        let orders = client.drivers().orders(&Id::from(3)).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status.as_deref(), Some("pendiente"));

        let order = client
            .drivers()
            .update_order_status(&Id::from(10), "entregado")
            .await
            .unwrap();
        update.assert();
        assert_eq!(order.status.as_deref(), Some("entregado"));
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_fallback() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/users/99");
            then.status(404);
        });

        let client = ApiClient::new(&ApiConfig::new(server.base_url())).unwrap();
        let err = client.drivers().get(&Id::from(99)).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load driver");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }
}
