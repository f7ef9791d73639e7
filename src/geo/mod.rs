//! Geographic helpers.

mod distance;

pub use distance::{haversine_km, EARTH_RADIUS_KM};
