//! Resource service handles.
//!
//! Each handle borrows an [`ApiClient`](crate::ApiClient) and every method
//! issues exactly one request (the product fallback issues a second only when
//! the first fails). Failures surface as [`ApiError`](crate::ApiError) carrying
//! the server message or an operation-specific fallback.

mod drivers;
mod orders;
mod products;
mod users;

pub use drivers::Drivers;
pub use orders::Orders;
pub use products::Products;
pub use users::{Restaurants, Users};
