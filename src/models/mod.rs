// Model exports
pub mod domain;

pub use domain::{GeoPoint, RankedShelter, Shelter};
