use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::envelope::{decode, unwrap_body, Envelope};
use crate::error::{ApiError, ApiResultExt};
use crate::models::{AuthGrant, Credentials, Id, NewUser, Restaurant, Role, UserRecord};

/// `/users` and the login endpoint.
#[derive(Clone, Copy)]
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /users`. Success is only signalled by the envelope flag; the
    /// envelope's `data` comes back untouched (`Null` when absent) because its
    /// shape varies by role, e.g. vendors get `{ usuario, restaurante }`.
    pub async fn create(&self, user: &NewUser) -> Result<Value, ApiError> {
        let body = self
            .client
            .post(&["users"], user)
            .await
            .or_message("Registration failed")?;
        let data = Envelope::require(body)?
            .into_result()
            .or_message("Registration failed")?;
        Ok(data.unwrap_or(Value::Null))
    }

    /// `GET /users`.
    pub async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        let body = self
            .client
            .get(&["users"], &[])
            .await
            .or_message("Failed to load users")?;
        decode(unwrap_body(body).or_message("Failed to load users")?)
    }

    /// `GET /users?rol=<role>`.
    pub async fn by_role(&self, role: Role) -> Result<Vec<UserRecord>, ApiError> {
        let body = self
            .client
            .get(&["users"], &[("rol", role.as_str())])
            .await
            .or_message("Failed to load users")?;
        decode(unwrap_body(body).or_message("Failed to load users")?)
    }

    /// `GET /users/:id`.
    pub async fn get(&self, id: &Id) -> Result<UserRecord, ApiError> {
        let body = self
            .client
            .get(&["users", &id.to_string()], &[])
            .await
            .or_message("Failed to load user")?;
        decode(unwrap_body(body).or_message("Failed to load user")?)
    }

    /// `GET /users/:id/restaurant`. `Ok(None)` when the user has no restaurant
    /// or the envelope reports failure.
    pub async fn restaurant_of(&self, user_id: &Id) -> Result<Option<Restaurant>, ApiError> {
        let body = self
            .client
            .get(&["users", &user_id.to_string(), "restaurant"], &[])
            .await?;
        Envelope::require(body)?
            .into_data()
            .map(decode)
            .transpose()
    }

    /// `POST /auth/login`: the backend verifies the password and issues the token.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthGrant, ApiError> {
        let body = self
            .client
            .post(&["auth", "login"], credentials)
            .await
            .or_message("Invalid email or password")?;
        decode(unwrap_body(body).or_message("Invalid email or password")?)
    }

    /// Compatibility path for backends without a login endpoint: fetch every
    /// user and compare email and password exactly on the client.
    ///
    /// The whole user collection, passwords included, crosses the wire. Prefer
    /// [`Users::authenticate`] wherever the backend supports it.
    pub async fn legacy_find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserRecord>, ApiError> {
        let body = self
            .client
            .get(&["users"], &[])
            .await
            .or_message("Failed to load users")?;
        let data = Envelope::require(body)?
            .into_result()
            .or_message("Failed to load users")?
            .unwrap_or(Value::Null);

        let Value::Array(users) = data else {
            return Err(ApiError::Decode("expected a list of users".into()));
        };
        debug!("Scanning {} users for a credential match", users.len());

        let found = users.into_iter().find(|u| {
            u.get("email").and_then(Value::as_str) == Some(credentials.email.as_str())
                && u.get("password").and_then(Value::as_str)
                    == Some(credentials.password.as_str())
        });

        match found {
            Some(raw) => decode(raw).map(Some).map_err(|e| {
                warn!("Matched user record could not be read: {}", e);
                e
            }),
            None => Ok(None),
        }
    }
}

/// `/restaurants`.
#[derive(Clone, Copy)]
pub struct Restaurants<'a> {
    client: &'a ApiClient,
}

impl<'a> Restaurants<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `PATCH /restaurants/:id` with the changed fields only.
    pub async fn update<U: Serialize + ?Sized>(
        &self,
        id: &Id,
        changes: &U,
    ) -> Result<Restaurant, ApiError> {
        let body = self
            .client
            .patch(&["restaurants", &id.to_string()], changes)
            .await
            .or_message("Failed to update restaurant")?;
        let data = Envelope::require(body)?
            .into_result()
            .or_message("Failed to update restaurant")?
            .ok_or_else(|| ApiError::Decode("updated restaurant missing from response".into()))?;
        decode(data)
    }
}
