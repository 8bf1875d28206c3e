//! Distance and bearing between two geoprints.
//!
//! Both operate on the decoded cell centers, so the answer carries the decode
//! error of both inputs on top of the spherical approximation.

use geoprint_core::{decode, AngleUnit, DistanceUnit, GeoprintResult};

use crate::sphere::{haversine, initial_bearing, EARTH_RADIUS_M};

/// Approximate great-circle distance between the centers of `start` and
/// `end`.
///
/// `DistanceUnit::Radians` returns the central angle; `DistanceUnit::Meters`
/// scales it by [`EARTH_RADIUS_M`].
pub fn distance(start: &str, end: &str, unit: DistanceUnit) -> GeoprintResult<f64> {
    let a = decode(start, AngleUnit::Radians)?;
    let b = decode(end, AngleUnit::Radians)?;
    let c = haversine(a, b);
    Ok(match unit {
        DistanceUnit::Radians => c,
        DistanceUnit::Meters => EARTH_RADIUS_M * c,
    })
}

/// Approximate initial bearing from the center of `start` to the center of
/// `end`, in `(-180, 180]` degrees or `(-π, π]` radians.
pub fn bearing(start: &str, end: &str, unit: AngleUnit) -> GeoprintResult<f64> {
    let a = decode(start, AngleUnit::Radians)?;
    let b = decode(end, AngleUnit::Radians)?;
    let theta = initial_bearing(a, b);
    Ok(match unit {
        AngleUnit::Radians => theta,
        AngleUnit::Degrees => theta.to_degrees(),
    })
}
