/// Geographic point as returned by the places service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// A place search match enriched with its details lookup
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePlace {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}
