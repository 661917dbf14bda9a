mod storage_unit;
mod warehouse;

pub use storage_unit::{StorageUnit, StorageUnitStatus};
pub use warehouse::{
    Amenity, CreateWarehouseRequest, DailyHours, OperatingHours, WarehouseDraft,
    WarehouseStatus,
};
