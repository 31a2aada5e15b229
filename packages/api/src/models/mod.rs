//! # Records exchanged with the backend
//!
//! The backend speaks Spanish field names (`nombre`, `rol`, `estado`,
//! `repartidorId`); the records here rename them to English Rust fields and
//! keep any field they do not model in a flattened `fields` map so nothing is
//! lost when a record is cached and written back.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Id`] | A record id, numeric or string on the wire, compared loosely |
//! | [`Role`] | `cliente` / `vendedor` / `repartidor` |
//! | [`UserRecord`] | A user; the password is only present on records fetched in bulk |
//! | [`NewUser`] | Registration payload, optionally with restaurant details |
//! | [`Credentials`] / [`AuthGrant`] | Login request and server-issued grant |
//! | [`Restaurant`] | A vendor's restaurant |
//! | [`Product`] | A menu item |
//! | [`Order`] / [`OrderRating`] | An order and its rating payload |

mod id;
mod order;
mod product;
pub(crate) use product::belongs_to;
mod restaurant;
mod user;

pub use id::Id;
pub use order::{Order, OrderRating};
pub use product::Product;
pub use restaurant::Restaurant;
pub use user::{AuthGrant, Credentials, NewUser, Role, UserRecord};
