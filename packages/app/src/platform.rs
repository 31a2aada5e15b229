//! Startup wiring shared by every platform.
//!
//! Picks the session storage backend:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Desktop / Mobile** (native): one file per key under `<data_dir>/food-delivery/`
//! - anything else: in-memory, so the session lasts until exit

use api::ApiConfig;
use store::KeyValueStore;
use tracing::info;

use crate::error::SessionError;
use crate::session::SessionStore;

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "food-delivery";

/// Create the platform-appropriate session storage.
pub fn platform_store() -> impl KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::in_data_dir(APP_DIR)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Build the client from `config`, open platform storage and restore any
/// persisted session.
pub fn open_session(
    config: &ApiConfig,
) -> Result<SessionStore<impl KeyValueStore>, SessionError> {
    info!("Using API at {} ({:?} login)", config.base_url, config.login_mode);
    let mut session = SessionStore::from_config(config, platform_store())?;
    if session.check_auth() {
        info!("Resumed session for {}", session.display_name());
    }
    Ok(session)
}
