mod candidate_place;

pub use candidate_place::{CandidatePlace, Coordinate};
