mod backend_warehouses;

pub use backend_warehouses::{BackendWarehousesClient, CreateOutcome};
