// =============================================================================
// PLACES SEARCH
// =============================================================================

/// Text query sent to the places search, followed by the location
pub const SEARCH_QUERY_PREFIX: &str = "cold storage warehouse";

/// Fields requested from the place details lookup
pub const PLACE_DETAILS_FIELDS: &str =
    "name,formatted_address,geometry,opening_hours,formatted_phone_number";

// =============================================================================
// WAREHOUSE SYNTHESIS
// =============================================================================

/// Name used when the details payload carries none
pub const FALLBACK_WAREHOUSE_NAME: &str = "Almacén sin nombre";

/// Days covered by the fixed operating schedule
pub const OPERATING_DAYS: [&str; 5] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"];

pub const OPENING_TIME: &str = "08:00";
pub const CLOSING_TIME: &str = "18:00";

/// Amenity catalog as (type, description) pairs
pub const AMENITY_CATALOG: [(&str, &str); 5] = [
    ("24/7 Access", "Acceso 24/7"),
    ("Security Cameras", "Cámaras de seguridad"),
    ("Climate Control", "Control de clima"),
    ("Loading Dock", "Muelle de carga"),
    ("Forklift", "Montacargas"),
];

/// Minimum number of amenities attached to a warehouse
pub const MIN_AMENITIES: usize = 2;

// =============================================================================
// STORAGE UNITS (all integer ranges inclusive)
// =============================================================================

pub const MIN_STORAGE_UNITS: usize = 5;
pub const MAX_STORAGE_UNITS: usize = 20;

/// Parent reference sent before the backend assigns the real warehouse
pub const UNASSIGNED_WAREHOUSE_ID: i64 = 0;

pub const UNIT_WIDTH_RANGE: (i32, i32) = (2, 5);
pub const UNIT_HEIGHT_RANGE: (i32, i32) = (2, 4);
pub const UNIT_DEPTH_RANGE: (i32, i32) = (2, 5);

/// Half-open range for the hourly cost
pub const UNIT_COST_PER_HOUR_RANGE: (f64, f64) = (10.0, 50.0);

pub const UNIT_MIN_TEMP_RANGE: (i32, i32) = (-20, 0);
pub const UNIT_MAX_TEMP_RANGE: (i32, i32) = (0, 10);
pub const UNIT_MIN_HUMIDITY_RANGE: (i32, i32) = (30, 50);
pub const UNIT_MAX_HUMIDITY_RANGE: (i32, i32) = (50, 70);
