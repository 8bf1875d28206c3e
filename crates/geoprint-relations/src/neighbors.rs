//! The cells surrounding a geoprint.
//!
//! # Method
//!
//! From the center of the input cell, step one cell side (`size / R`, as an
//! angle) along each of the eight compass bearings on the sphere, and
//! re-encode the landing point at the input's precision.
//!
//! Results are sets.  Near the poles, across the antimeridian, or at very
//! low precision several bearings can land in the same cell; those collapse.
//! The input cell itself can also appear when a step is too short to leave
//! it.  Both are expected.

use rustc_hash::FxHashSet;

use geoprint_core::{decode, encode, size, AngleUnit, Geoprint, GeoprintResult};
use geoprint_geometry::{destination, EARTH_RADIUS_M};

use crate::compass::Compass;

/// Neighbor cells of `geoprint`, each tagged with the bearing that reached
/// it.  At most eight entries.
pub fn neighbors(geoprint: &str) -> GeoprintResult<FxHashSet<(Compass, Geoprint)>> {
    let precision = geoprint.chars().count();
    let origin = decode(geoprint, AngleUnit::Radians)?;
    let step = size(geoprint) / EARTH_RADIUS_M;

    let mut out = FxHashSet::default();
    for dir in Compass::ALL {
        let (lat, lon) = destination(origin, dir.radians(), step);
        let cell = encode(lat, lon, precision, AngleUnit::Radians)?;
        log::trace!("neighbor of {geoprint} towards {dir}: {cell}");
        out.insert((dir, cell));
    }
    Ok(out)
}

/// Distinct neighbor cells of `geoprint`, bearings dropped.
pub fn neighbor_prints(geoprint: &str) -> GeoprintResult<FxHashSet<Geoprint>> {
    Ok(neighbors(geoprint)?.into_iter().map(|(_, cell)| cell).collect())
}
