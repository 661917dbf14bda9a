use serde::{Deserialize, Serialize};
use validator::Validate;

use super::StorageUnit;
use crate::features::places::models::Coordinate;

/// Operational status of a warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseStatus {
    Active,
    Maintenance,
    Closed,
}

impl WarehouseStatus {
    pub const ALL: [WarehouseStatus; 3] = [
        WarehouseStatus::Active,
        WarehouseStatus::Maintenance,
        WarehouseStatus::Closed,
    ];
}

impl std::fmt::Display for WarehouseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarehouseStatus::Active => write!(f, "active"),
            WarehouseStatus::Maintenance => write!(f, "maintenance"),
            WarehouseStatus::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(rename = "type")]
    pub amenity_type: String,
    pub available: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    pub day: String,
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub weekdays: Vec<DailyHours>,
}

/// Backend location shape: `x` is longitude, `y` is latitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Coordinate> for GeoPoint {
    fn from(c: Coordinate) -> Self {
        Self {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

/// Synthesized warehouse, not yet assigned to an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDraft {
    pub name: String,
    pub address: String,
    pub status: WarehouseStatus,
    #[validate(length(min = 1))]
    pub amenities: Vec<Amenity>,
    pub operating_hours: OperatingHours,
    pub location: GeoPoint,
    #[validate(length(min = 5, max = 20))]
    pub storage_units: Vec<StorageUnit>,
}

/// Body of `POST /warehouses`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub warehouse: WarehouseDraft,
    pub owner_id: i64,
}

impl CreateWarehouseRequest {
    pub fn new(warehouse: WarehouseDraft, owner_id: i64) -> Self {
        Self {
            warehouse,
            owner_id,
        }
    }
}
