//! Heuristic adjacency between two geoprints.
//!
//! Each cell's worst-case center-to-corner offset is approximated as half
//! its error on both axes.  Summing the two half-errors into `maxe` and
//! taking the diagonal gives the tolerance:
//!
//! ```text
//! maxe = error(a)/2 + error(b)/2          (radians)
//! h    = sqrt(2 * maxe²)
//! adjacent  ⇔  distance(a, b) <= h
//! ```
//!
//! This is a proximity test on cell centers, not a walk of the hash grid.
//! It can answer wrongly near cell boundaries in both directions; callers
//! that need exact grid adjacency should compare against
//! [`neighbors`](crate::neighbors) instead.

use geoprint_core::{error, AngleUnit, DistanceUnit, DomainError, GeoprintResult};
use geoprint_geometry::distance;

/// Shortest geoprint, in characters, accepted by [`adjacent`].
pub const MIN_ADJACENCY_PRECISION: usize = 3;

/// `true` when the centers of `first` and `second` lie within the combined
/// half-error diagonal of the two cells.
///
/// Fails with [`DomainError::Adjacency`] if either input is shorter than
/// [`MIN_ADJACENCY_PRECISION`], before the contents are looked at.
pub fn adjacent(first: &str, second: &str) -> GeoprintResult<bool> {
    let len = first.chars().count().min(second.chars().count());
    if len < MIN_ADJACENCY_PRECISION {
        return Err(DomainError::Adjacency { len }.into());
    }

    let maxe = error(first, AngleUnit::Radians) / 2.0 + error(second, AngleUnit::Radians) / 2.0;
    let h = (2.0 * maxe * maxe).sqrt();
    let d = distance(first, second, DistanceUnit::Radians)?;
    Ok(d <= h)
}
