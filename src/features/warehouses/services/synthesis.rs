use rand::seq::IndexedRandom;
use rand::Rng;

use crate::features::places::models::CandidatePlace;
use crate::features::warehouses::models::{
    Amenity, DailyHours, OperatingHours, StorageUnit, StorageUnitStatus, WarehouseDraft,
    WarehouseStatus,
};
use crate::shared::constants::{
    AMENITY_CATALOG, CLOSING_TIME, MAX_STORAGE_UNITS, MIN_AMENITIES, MIN_STORAGE_UNITS,
    OPENING_TIME, OPERATING_DAYS, UNASSIGNED_WAREHOUSE_ID, UNIT_COST_PER_HOUR_RANGE,
    UNIT_DEPTH_RANGE, UNIT_HEIGHT_RANGE, UNIT_MAX_HUMIDITY_RANGE, UNIT_MAX_TEMP_RANGE,
    UNIT_MIN_HUMIDITY_RANGE, UNIT_MIN_TEMP_RANGE, UNIT_WIDTH_RANGE,
};

/// Compose a warehouse draft from a candidate place with random operational data
pub fn synthesize_warehouse<R: Rng + ?Sized>(
    candidate: &CandidatePlace,
    rng: &mut R,
) -> WarehouseDraft {
    let draft = WarehouseDraft {
        name: candidate.name.clone(),
        address: candidate.address.clone(),
        status: random_status(rng),
        amenities: random_amenities(rng),
        operating_hours: weekday_schedule(),
        location: candidate.coordinate.into(),
        storage_units: generate_storage_units(rng),
    };

    tracing::debug!(
        "Synthesized {} ({}) with {} amenities and {} units",
        draft.name,
        draft.status,
        draft.amenities.len(),
        draft.storage_units.len()
    );

    draft
}

/// Generate between 5 and 20 storage units, numbered from 1.
///
/// Every attribute is an independent uniform draw. Min and max temperature
/// (and humidity) come from adjacent ranges that share an endpoint, so a unit
/// may end up with `min == max`.
pub fn generate_storage_units<R: Rng + ?Sized>(rng: &mut R) -> Vec<StorageUnit> {
    let count = rng.random_range(MIN_STORAGE_UNITS..=MAX_STORAGE_UNITS);

    (1..=count as u32)
        .map(|unit_id| StorageUnit {
            unit_id,
            warehouse_id: UNASSIGNED_WAREHOUSE_ID,
            name: format!("Unidad {}", unit_id),
            width: draw(rng, UNIT_WIDTH_RANGE),
            height: draw(rng, UNIT_HEIGHT_RANGE),
            depth: draw(rng, UNIT_DEPTH_RANGE),
            cost_per_hour: rng.random_range(UNIT_COST_PER_HOUR_RANGE.0..UNIT_COST_PER_HOUR_RANGE.1),
            min_temp: draw(rng, UNIT_MIN_TEMP_RANGE),
            max_temp: draw(rng, UNIT_MAX_TEMP_RANGE),
            min_humidity: draw(rng, UNIT_MIN_HUMIDITY_RANGE),
            max_humidity: draw(rng, UNIT_MAX_HUMIDITY_RANGE),
            status: StorageUnitStatus::ALL[rng.random_range(0..StorageUnitStatus::ALL.len())],
        })
        .collect()
}

fn draw<R: Rng + ?Sized>(rng: &mut R, (low, high): (i32, i32)) -> i32 {
    rng.random_range(low..=high)
}

fn random_status<R: Rng + ?Sized>(rng: &mut R) -> WarehouseStatus {
    WarehouseStatus::ALL[rng.random_range(0..WarehouseStatus::ALL.len())]
}

pub fn amenity_catalog() -> Vec<Amenity> {
    AMENITY_CATALOG
        .iter()
        .map(|(amenity_type, description)| Amenity {
            amenity_type: amenity_type.to_string(),
            available: true,
            description: description.to_string(),
        })
        .collect()
}

/// Distinct amenities in random order, at least two and at most the whole catalog
fn random_amenities<R: Rng + ?Sized>(rng: &mut R) -> Vec<Amenity> {
    let catalog = amenity_catalog();
    let count = rng.random_range(MIN_AMENITIES..=catalog.len());

    catalog.choose_multiple(rng, count).cloned().collect()
}

/// Monday to Friday, same hours every day
pub fn weekday_schedule() -> OperatingHours {
    OperatingHours {
        weekdays: OPERATING_DAYS
            .iter()
            .map(|day| DailyHours {
                day: day.to_string(),
                open: OPENING_TIME.to_string(),
                close: CLOSING_TIME.to_string(),
            })
            .collect(),
    }
}
