//! Indonesian province (provinsi) synchronization feature.
//!
//! Every request to `/` pulls the public province list, rewrites the local
//! `provinces` table with it and answers with the table's contents.
//!
//! ## Flow
//!
//! 1. [`clients::ProvinceSourceClient`] fetches `[{id, name}]` from the remote source
//! 2. [`models::Province`] parses each string id into an integer, keeping it as `code`
//! 3. [`repositories::ProvinceStore`] deletes all rows and inserts the new batch
//! 4. The handler reads the table back and wraps it in the JSON envelope

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use clients::ProvinceSourceClient;
pub use repositories::PgProvinceStore;
pub use services::ProvinceSyncService;
