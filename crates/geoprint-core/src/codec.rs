//! Encode coordinates into geoprints and back.
//!
//! # Precision and error
//!
//! A geoprint of `n` characters has gone through `n - 1` bisection steps on
//! each axis.  Both axes start 180° wide, so after `n - 1` steps the cell is
//! `180 / 2^(n-1)` degrees on a side and the decoded center is at most
//!
//! ```text
//! error(n) = 90 * 2^-(n-1)   degrees
//! ```
//!
//! away from any point inside it.  `size(n)` is the matching (rough) side
//! length in meters.  Both depend on the length only.

use crate::bisect::Bisector;
use crate::config::CodecConfig;
use crate::error::{DomainError, FormatError, GeoprintResult};
use crate::geo::Coordinate;
use crate::geoprint::Geoprint;
use crate::symbol::{Base, Hemisphere};
use crate::unit::AngleUnit;

/// Characters produced by [`encode`] when the caller has no preference.
pub const DEFAULT_PRECISION: usize = 22;

/// Approximate side of a one-character cell, meters.
const HEMISPHERE_SIZE_M: f64 = 20_000_000.0;

/// Error of a one-character geoprint, degrees.
const HEMISPHERE_ERROR_DEG: f64 = 90.0;

/// Upfront allocation cap for [`encode`]; longer output grows on demand.
const ENCODE_RESERVE: usize = 64;

// ── Encode ────────────────────────────────────────────────────────────────────

/// Encode `(latitude, longitude)` into a geoprint of `precision` characters.
///
/// `unit` is the unit of the inputs.  Fails with [`DomainError::Precision`]
/// for `precision < 1` and [`DomainError::NonFinite`] for NaN or infinite
/// inputs.  Finite values outside the usual ranges are accepted and end up
/// in the edge cells.
pub fn encode(
    latitude: f64,
    longitude: f64,
    precision: usize,
    unit: AngleUnit,
) -> GeoprintResult<Geoprint> {
    if precision < 1 {
        return Err(DomainError::Precision { requested: precision }.into());
    }
    let lat = unit.to_degrees(latitude);
    let lon = unit.to_degrees(longitude);
    if !lat.is_finite() || !lon.is_finite() {
        log::warn!("Rejecting non-finite coordinate ({latitude}, {longitude}) for encoding");
        return Err(DomainError::NonFinite { lat: latitude, lon: longitude }.into());
    }

    let hemisphere = Hemisphere::of_longitude(lon);
    let mut bisector = Bisector::new(hemisphere);

    let mut out = String::with_capacity(precision.min(ENCODE_RESERVE));
    out.push(hemisphere.as_char());
    while out.len() < precision {
        out.push(bisector.encode_step(lat, lon).as_char());
    }
    Ok(Geoprint::from_validated(out))
}

/// [`encode`] with precision and unit taken from `config`.
pub fn encode_with(config: &CodecConfig, latitude: f64, longitude: f64) -> GeoprintResult<Geoprint> {
    config.validate()?;
    encode(latitude, longitude, config.precision, config.unit)
}

/// Encode many coordinates (degrees) at `config.precision`, preserving input
/// order.  The first failure aborts the batch.
///
/// With the `parallel` feature the work is spread over Rayon's thread pool.
pub fn encode_many(coords: &[Coordinate], config: &CodecConfig) -> GeoprintResult<Vec<Geoprint>> {
    config.validate()?;
    let precision = config.precision;

    #[cfg(not(feature = "parallel"))]
    {
        coords
            .iter()
            .map(|c| encode(c.lat, c.lon, precision, AngleUnit::Degrees))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        coords
            .par_iter()
            .map(|c| encode(c.lat, c.lon, precision, AngleUnit::Degrees))
            .collect()
    }
}

// ── Decode ────────────────────────────────────────────────────────────────────

/// Walk `geoprint`, validating every character, and return the final cell.
pub(crate) fn bisect(geoprint: &str) -> Result<Bisector, FormatError> {
    let scan = || -> Result<Bisector, FormatError> {
        let mut chars = geoprint.chars();
        let first = chars.next().ok_or(FormatError::Empty)?;
        let mut bisector = Bisector::new(Hemisphere::from_char(first)?);
        for (i, c) in chars.enumerate() {
            bisector.decode_step(Base::from_char(c, i + 1)?);
        }
        Ok(bisector)
    };
    scan().inspect_err(|e: &FormatError| log::debug!("Rejecting geoprint {geoprint:?}: {e}"))
}

/// Decode `geoprint` into the center of its cell, `(lat, lon)` in `unit`.
///
/// The result is within [`error`] of every point that encodes to
/// `geoprint`.  A bare hemisphere decodes to `(0, -90)` or `(0, 90)`.
pub fn decode(geoprint: &str, unit: AngleUnit) -> GeoprintResult<(f64, f64)> {
    let (lat, lon) = bisect(geoprint)?.center();
    Ok((unit.from_degrees(lat), unit.from_degrees(lon)))
}

/// [`decode`] with the unit taken from `config`.
pub fn decode_with(config: &CodecConfig, geoprint: &str) -> GeoprintResult<(f64, f64)> {
    decode(geoprint, config.unit)
}

/// Bounding box of the cell `geoprint` names.
pub fn bounds(geoprint: &str) -> GeoprintResult<Bounds> {
    Ok(Bounds::from_bisector(bisect(geoprint)?))
}

// ── Error and size ────────────────────────────────────────────────────────────

/// `2^-(len-1)` as a float; `len == 0` gives 2.
#[inline]
fn halvings(geoprint: &str) -> f64 {
    let steps = geoprint.chars().count() as i32 - 1;
    2f64.powi(-steps)
}

/// Maximum decode error of `geoprint` on either axis, in `unit`.
///
/// Depends on the length only; the characters themselves are not inspected.
pub fn error(geoprint: &str, unit: AngleUnit) -> f64 {
    unit.from_degrees(HEMISPHERE_ERROR_DEG * halvings(geoprint))
}

/// Approximate side length in meters of the cell `geoprint` names.
///
/// Depends on the length only.
pub fn size(geoprint: &str) -> f64 {
    HEMISPHERE_SIZE_M * halvings(geoprint)
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Latitude/longitude box of a geoprint cell, degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Same point [`decode`] returns.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.lat)
            && (self.min_lon..=self.max_lon).contains(&c.lon)
    }

    pub(crate) fn from_bisector(b: Bisector) -> Self {
        Self {
            min_lat: b.lat.min,
            max_lat: b.lat.max,
            min_lon: b.lon.min,
            max_lon: b.lon.max,
        }
    }
}

impl Coordinate {
    /// Encode this coordinate at `precision` characters.
    pub fn encode(self, precision: usize) -> GeoprintResult<Geoprint> {
        encode(self.lat, self.lon, precision, AngleUnit::Degrees)
    }
}
