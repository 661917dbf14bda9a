//! The seeding pipeline that ties places, warehouses and users together.

pub mod services;

pub use services::SeedingService;
