//! Warehouse records: synthesis of drafts from candidate places and
//! submission to the backend.

pub mod clients;
pub mod models;
pub mod services;

pub use clients::{BackendWarehousesClient, CreateOutcome};
