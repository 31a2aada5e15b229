use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::envelope::{decode, unwrap_body, Envelope};
use crate::error::{ApiError, ApiResultExt};
use crate::models::{belongs_to, Id, Product};

/// Menu items.
#[derive(Clone, Copy)]
pub struct Products<'a> {
    client: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Products of one restaurant.
    ///
    /// Asks `GET /products/restaurant/:id` first. When that endpoint fails or
    /// does not report success, falls back to
    /// [`legacy_filter_by_restaurant`](Self::legacy_filter_by_restaurant).
    pub async fn by_restaurant(&self, restaurant_id: &Id) -> Result<Vec<Product>, ApiError> {
        let dedicated = self
            .client
            .get(&["products", "restaurant", &restaurant_id.to_string()], &[])
            .await
            .and_then(Envelope::require);

        match dedicated {
            Ok(envelope) if envelope.success => {
                let data = envelope
                    .data
                    .filter(|d| !d.is_null())
                    .unwrap_or(Value::Array(Vec::new()));
                return decode(data);
            }
            Ok(_) => debug!("/products/restaurant/{} reported failure", restaurant_id),
            Err(e) => info!("/products/restaurant/{} unavailable: {}", restaurant_id, e),
        }

        self.legacy_filter_by_restaurant(restaurant_id).await
    }

    /// Compatibility shim: fetch every product and keep those whose
    /// restaurant id, under any of the spellings the backend has used
    /// (`restaurantId`, `idRestaurante`, `restaurant_id`), matches.
    pub async fn legacy_filter_by_restaurant(
        &self,
        restaurant_id: &Id,
    ) -> Result<Vec<Product>, ApiError> {
        let body = self
            .client
            .get(&["products"], &[])
            .await
            .or_message("Failed to load products")?;

        let Value::Array(all) = unwrap_body(body).or_message("Failed to load products")? else {
            return Err(ApiError::Decode("expected a list of products".into()));
        };

        let matching: Vec<Value> = all
            .into_iter()
            .filter(|p| belongs_to(p, restaurant_id))
            .collect();
        debug!(
            "{} products matched restaurant {}",
            matching.len(),
            restaurant_id
        );
        decode(Value::Array(matching))
    }

    /// `POST /products`.
    pub async fn create<P: Serialize + ?Sized>(&self, product: &P) -> Result<Product, ApiError> {
        let body = self
            .client
            .post(&["products"], product)
            .await
            .or_message("Failed to create product")?;
        decode(unwrap_body(body).or_message("Failed to create product")?)
    }

    /// `PATCH /products/:id` with the changed fields only.
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        id: &Id,
        changes: &P,
    ) -> Result<Product, ApiError> {
        let body = self
            .client
            .patch(&["products", &id.to_string()], changes)
            .await
            .or_message("Failed to update product")?;
        decode(unwrap_body(body).or_message("Failed to update product")?)
    }

    /// `DELETE /products/:id`. Returns whatever the backend answered with.
    pub async fn delete(&self, id: &Id) -> Result<Value, ApiError> {
        let body = self
            .client
            .delete(&["products", &id.to_string()])
            .await
            .or_message("Failed to delete product")?;
        unwrap_body(body).or_message("Failed to delete product")
    }

    /// `GET /products/:id`.
    pub async fn get(&self, id: &Id) -> Result<Product, ApiError> {
        let body = self
            .client
            .get(&["products", &id.to_string()], &[])
            .await
            .or_message("Failed to load product")?;
        decode(unwrap_body(body).or_message("Failed to load product")?)
    }
}
