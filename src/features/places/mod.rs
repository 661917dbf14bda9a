//! Candidate discovery through the Google Places web service.
//!
//! A text search for cold storage warehouses near a location, followed by
//! one details lookup per match.

pub mod clients;
pub mod models;
pub mod services;

pub use clients::GooglePlacesClient;
pub use services::CandidateService;
