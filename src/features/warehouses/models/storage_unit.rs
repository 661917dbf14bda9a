use serde::{Deserialize, Serialize};

/// Occupancy state of a storage unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageUnitStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl StorageUnitStatus {
    pub const ALL: [StorageUnitStatus; 4] = [
        StorageUnitStatus::Available,
        StorageUnitStatus::Occupied,
        StorageUnitStatus::Maintenance,
        StorageUnitStatus::Reserved,
    ];
}

/// Rentable compartment inside a warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnit {
    /// 1-based position within the warehouse
    pub unit_id: u32,
    /// Always the unassigned sentinel; the backend links the unit on create
    pub warehouse_id: i64,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub cost_per_hour: f64,
    pub min_temp: i32,
    pub max_temp: i32,
    pub min_humidity: i32,
    pub max_humidity: i32,
    pub status: StorageUnitStatus,
}
