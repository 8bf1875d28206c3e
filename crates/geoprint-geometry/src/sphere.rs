//! Spherical-earth primitives over plain coordinates.
//!
//! Every function here takes and returns **radians**.  The earth is a sphere
//! of radius [`EARTH_RADIUS_M`]; no ellipsoid correction is applied, so
//! results drift by up to ~0.5 % from WGS-84 geodesics.  That is well inside
//! the cell error of any geoprint short enough to be useful as an index key.

use std::f64::consts::{PI, TAU};

/// Sphere radius used for every meters ↔ radians conversion, meters.
///
/// Equatorial rather than mean radius; existing `size()` and `distance()`
/// figures were computed with it.
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Great-circle angle between two `(lat, lon)` points (haversine formula).
///
/// ```
/// use geoprint_geometry::sphere::haversine;
///
/// let quarter = haversine((0.0, 0.0), (0.0, std::f64::consts::FRAC_PI_2));
/// assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn haversine((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing (forward azimuth) from `start` towards `end`.
///
/// Clockwise from north, in `(-π, π]` exactly as `atan2` yields it.  West is
/// negative; callers wanting `[0, 2π)` must normalize themselves.
pub fn initial_bearing((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let d_lon = lon2 - lon1;
    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x)
}

/// Point reached by travelling `angular_distance` along the great circle
/// leaving `origin` at `bearing` (spherical direct problem).
///
/// Longitude of the result is wrapped into `[-π, π)`.
pub fn destination((lat, lon): (f64, f64), bearing: f64, angular_distance: f64) -> (f64, f64) {
    let d = angular_distance;
    let lat2 = (lat.sin() * d.cos() + lat.cos() * d.sin() * bearing.cos()).asin();
    let d_lon = (bearing.sin() * d.sin() * lat.cos()).atan2(d.cos() - lat.sin() * lat2.sin());
    let lon2 = (lon + d_lon + PI).rem_euclid(TAU) - PI;
    (lat2, lon2)
}
