//! # Session store
//!
//! [`SessionStore`] owns the current sign-in: an opaque token, the cached
//! [`UserRecord`] and, for vendors, their [`Restaurant`]. Every change is
//! mirrored into the injected [`KeyValueStore`] under [`TOKEN_KEY`],
//! [`USER_KEY`] and [`RESTAURANT_KEY`] so [`SessionStore::check_auth`] can
//! restore it after a restart.
//!
//! ## Lifecycle
//!
//! | Step | Operation |
//! |------|-----------|
//! | startup | [`check_auth`](SessionStore::check_auth) rehydrates from storage |
//! | sign-in | [`login`](SessionStore::login), chaining a restaurant load for vendors |
//! | while signed in | [`refresh_user`](SessionStore::refresh_user), [`update_restaurant`](SessionStore::update_restaurant) |
//! | sign-out | [`logout`](SessionStore::logout) clears memory and storage together |
//!
//! ## Login modes
//!
//! With [`LoginMode::Credentials`] the backend checks the password and issues
//! the token. [`LoginMode::Directory`] is the compatibility path for backends
//! without a login endpoint: the user list is fetched, matched on the client,
//! and a local `token-<uuid>` is minted. Either way the password never enters
//! the session or storage.
//!
//! Restaurant loading and user refresh are best effort: failures are logged
//! and come back as `None` rather than errors.

use api::{
    ApiClient, ApiConfig, ApiError, Credentials, Id, LoginMode, NewUser, Restaurant, Role,
    UserRecord,
};
use serde::Serialize;
use serde_json::Value;
use store::KeyValueStore;
use tracing::{error, info, warn};

use crate::error::SessionError;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const RESTAURANT_KEY: &str = "restaurant";
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, RESTAURANT_KEY];

/// The in-memory session triple.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    /// Only meaningful when the user is a vendor.
    pub restaurant: Option<Restaurant>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// The user's display name, or an empty string when signed out.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(UserRecord::display_name).unwrap_or("")
    }

    pub fn user_id(&self) -> Option<&Id> {
        self.user.as_ref().map(|u| &u.id)
    }
}

/// Session state plus the storage it is mirrored into.
pub struct SessionStore<S: KeyValueStore> {
    api: ApiClient,
    storage: S,
    login_mode: LoginMode,
    state: SessionState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// An empty session. Call [`check_auth`](Self::check_auth) to restore a
    /// persisted one.
    pub fn new(api: ApiClient, storage: S) -> Self {
        Self {
            api,
            storage,
            login_mode: LoginMode::default(),
            state: SessionState::default(),
        }
    }

    /// Build the API client from configuration and adopt its login mode.
    pub fn from_config(config: &ApiConfig, storage: S) -> Result<Self, SessionError> {
        let api = ApiClient::new(config)?;
        Ok(Self::new(api, storage).with_login_mode(config.login_mode))
    }

    /// Builder method to set the login mode.
    pub fn with_login_mode(mut self, mode: LoginMode) -> Self {
        self.login_mode = mode;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.role()
    }

    pub fn display_name(&self) -> &str {
        self.state.display_name()
    }

    pub fn user_id(&self) -> Option<&Id> {
        self.state.user_id()
    }

    /// Create an account. Does not sign in. Returns the backend's `data`
    /// as sent.
    pub async fn register(&self, user: &NewUser) -> Result<Value, SessionError> {
        info!("Registering {} as {}", user.email, user.role);
        match self.api.users().create(user).await {
            Ok(created) => {
                info!("Registration accepted for {}", user.email);
                Ok(created)
            }
            Err(e) => {
                error!("Registration failed for {}: {}", user.email, e);
                Err(e.into())
            }
        }
    }

    /// Sign in and persist the session. Vendors also get their restaurant loaded.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<UserRecord, SessionError> {
        info!("Login attempt for {}", credentials.email);

        let (token, user) = match self.login_mode {
            LoginMode::Credentials => {
                let grant = self
                    .api
                    .users()
                    .authenticate(credentials)
                    .await
                    .map_err(credential_failure)?;
                (grant.token, grant.user)
            }
            LoginMode::Directory => {
                let user = self
                    .api
                    .users()
                    .legacy_find_by_credentials(credentials)
                    .await?
                    .ok_or(SessionError::InvalidCredentials)?;
                (mint_token(), user)
            }
        };
        let user = user.without_password();

        self.storage.set(TOKEN_KEY, &token);
        self.persist(USER_KEY, &user);
        self.state.token = Some(token);
        self.state.user = Some(user.clone());
        info!("Login succeeded for user {} ({})", user.id, user.role);

        if user.role == Role::Vendor {
            self.load_user_restaurant(&user.id).await;
        } else {
            self.clear_restaurant();
        }

        Ok(user)
    }

    /// Load and cache the restaurant owned by `user_id`. Any failure clears the
    /// cached restaurant and yields `None`.
    pub async fn load_user_restaurant(&mut self, user_id: &Id) -> Option<Restaurant> {
        match self.api.users().restaurant_of(user_id).await {
            Ok(Some(restaurant)) => {
                info!("Loaded restaurant {} for user {}", restaurant.id, user_id);
                self.persist(RESTAURANT_KEY, &restaurant);
                self.state.restaurant = Some(restaurant.clone());
                Some(restaurant)
            }
            Ok(None) => {
                info!("User {} has no restaurant", user_id);
                self.clear_restaurant();
                None
            }
            Err(e) => {
                error!("Failed to load restaurant for user {}: {}", user_id, e);
                self.clear_restaurant();
                None
            }
        }
    }

    /// Apply a partial update to a restaurant and cache the result.
    pub async fn update_restaurant<U: Serialize + ?Sized>(
        &mut self,
        restaurant_id: &Id,
        changes: &U,
    ) -> Result<Restaurant, SessionError> {
        if !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }
        let restaurant = self
            .api
            .restaurants()
            .update(restaurant_id, changes)
            .await
            .map_err(|e| {
                error!("Failed to update restaurant {}: {}", restaurant_id, e);
                e
            })?;

        info!("Updated restaurant {}", restaurant.id);
        self.persist(RESTAURANT_KEY, &restaurant);
        self.state.restaurant = Some(restaurant.clone());
        Ok(restaurant)
    }

    /// Drop the session from memory and storage. No network call.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.state = SessionState::default();
        self.storage.clear(&SESSION_KEYS);
    }

    /// Restore a persisted session. Returns whether one was restored.
    pub fn check_auth(&mut self) -> bool {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self.storage.get(USER_KEY).filter(|u| !u.is_empty());

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            info!("No active session");
            return false;
        };

        let user: UserRecord = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                warn!("Stored user is unreadable, discarding session: {}", e);
                self.logout();
                return false;
            }
        };

        let restaurant = self
            .storage
            .get(RESTAURANT_KEY)
            .and_then(|raw| match serde_json::from_str::<Restaurant>(&raw) {
                Ok(restaurant) => Some(restaurant),
                Err(e) => {
                    warn!("Stored restaurant is unreadable, ignoring it: {}", e);
                    None
                }
            });

        info!("Session restored for user {}", user.id);
        self.state = SessionState {
            token: Some(token),
            user: Some(user),
            restaurant,
        };
        true
    }

    /// Re-fetch the signed-in user (and a vendor's restaurant). `None` when
    /// nobody is signed in or the fetch fails.
    pub async fn refresh_user(&mut self) -> Option<UserRecord> {
        let user_id = self.state.user_id()?.clone();

        let user = match self.api.users().get(&user_id).await {
            Ok(user) => user.without_password(),
            Err(e) => {
                error!("Failed to refresh user {}: {}", user_id, e);
                return None;
            }
        };

        self.persist(USER_KEY, &user);
        self.state.user = Some(user.clone());

        if user.role == Role::Vendor {
            self.load_user_restaurant(&user_id).await;
        } else {
            self.clear_restaurant();
        }

        Some(user)
    }

    fn clear_restaurant(&mut self) {
        self.state.restaurant = None;
        self.storage.remove(RESTAURANT_KEY);
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.storage.set(key, &json),
            Err(e) => warn!("Failed to serialise {}: {}", key, e),
        }
    }
}

/// Locally minted session token for directory logins.
fn mint_token() -> String {
    format!("token-{}", uuid::Uuid::new_v4())
}

/// A 401/403 from the login endpoint means wrong credentials, not an outage.
fn credential_failure(e: ApiError) -> SessionError {
    match e.status().map(|s| s.as_u16()) {
        Some(401) | Some(403) => SessionError::InvalidCredentials,
        _ => SessionError::Api(e),
    }
}
