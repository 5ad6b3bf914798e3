use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance in kilometres on a spherical Earth.
#[inline(always)]
pub fn great_circle_distance(from: &Location, to: &Location) -> f64 {
    let lat1 = to_radians(from.latitude);
    let lon1 = to_radians(from.longitude);
    let lat2 = to_radians(to.latitude);
    let lon2 = to_radians(to.longitude);

    let val = (lat1.sin() * lat2.sin()) + (lat1.cos() * lat2.cos() * (lon1 - lon2).cos());

    val.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}
