use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;

use crate::features::places::models::{CandidatePlace, Coordinate};

/// Text search body listing the given place ids
pub fn search_body(place_ids: &[&str]) -> String {
    let results: Vec<_> = place_ids
        .iter()
        .map(|id| json!({ "place_id": id, "name": format!("Place {}", id) }))
        .collect();
    json!({ "status": "OK", "results": results }).to_string()
}

/// Details body for a place with name and coordinates
pub fn details_body(name: &str, lat: f64, lng: f64) -> String {
    json!({
        "status": "OK",
        "result": {
            "name": name,
            "formatted_address": format!("{}, Osaka, Japan", name),
            "geometry": { "location": { "lat": lat, "lng": lng } }
        }
    })
    .to_string()
}

/// Details body without a `result` payload
pub fn empty_details_body() -> String {
    json!({ "status": "NOT_FOUND" }).to_string()
}

/// A backend user JSON object with generated name and email
pub fn backend_user(user_id: i64, role: &str) -> serde_json::Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({
        "userId": user_id,
        "name": name,
        "email": email,
        "role": role,
        "status": "active"
    })
}

pub fn candidate(place_id: &str, name: &str) -> CandidatePlace {
    CandidatePlace {
        place_id: place_id.to_string(),
        name: name.to_string(),
        address: format!("{}, Osaka, Japan", name),
        coordinate: Coordinate {
            longitude: 135.5023,
            latitude: 34.6937,
        },
    }
}
