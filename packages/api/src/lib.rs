//! # API crate: typed access to the food-delivery REST backend
//!
//! Every network call the client makes goes through [`ApiClient`]. The backend
//! is a plain REST service that usually wraps bodies in a
//! `{ success, data, message }` [`Envelope`]; this crate unwraps that
//! convention, classifies failures into [`ApiError`], and decodes payloads into
//! the records in [`models`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and login mode, from defaults, environment or TOML |
//! | [`envelope`] | Detecting and unwrapping the response envelope |
//! | [`error`] | Transport / server / decode error taxonomy |
//! | [`models`] | Users, restaurants, products, orders and the loose [`Id`] type |
//! | [`services`] | One handle per resource family, borrowed from the client |
//!
//! ## Services
//!
//! - [`ApiClient::users`]: registration, lookup, credential checks, a user's restaurant
//! - [`ApiClient::restaurants`]: partial restaurant updates
//! - [`ApiClient::drivers`]: driver listing and their assigned orders
//! - [`ApiClient::orders`]: order detail and rating
//! - [`ApiClient::products`]: product CRUD and per-restaurant listing

pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod services;

mod client;

pub use client::ApiClient;
pub use config::{ApiConfig, LoginMode, DEFAULT_API_URL};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResultExt};
pub use models::{
    AuthGrant, Credentials, Id, NewUser, Order, OrderRating, Product, Restaurant, Role,
    UserRecord,
};
