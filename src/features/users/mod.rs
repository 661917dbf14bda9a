//! Backend user accounts.
//!
//! Only the listing endpoint is used, to build the pool of owner ids that
//! seeded warehouses are assigned to.

pub mod clients;
pub mod models;
pub mod services;

pub use clients::BackendUsersClient;
pub use services::OwnerService;
