//! Key-value persistence for client-side session state.
//!
//! Everything the client keeps between restarts goes through the
//! [`KeyValueStore`] port. Backends:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`MemoryStore`] | everywhere; tests and headless use |
//! | [`FileStore`] | native, one file per key under a data directory |
//! | `LocalStorageStore` | wasm32 with the `web` feature, `window.localStorage` |

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;
