//! Geographic coordinate type.
//!
//! `Coordinate` uses `f64` latitude/longitude.  A 22-character geoprint
//! resolves to ~4e-5 degrees, well below what `f32` could carry, so single
//! precision is not an option here.

use crate::error::DomainError;
use crate::unit::AngleUnit;

/// A latitude/longitude pair, stored in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Construct without validation.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct from values expressed in `unit`, without validation.
    #[inline]
    pub fn from_unit(lat: f64, lon: f64, unit: AngleUnit) -> Self {
        Self::new(unit.to_degrees(lat), unit.to_degrees(lon))
    }

    /// Construct and check that both values are finite and within
    /// latitude [-90, 90] / longitude [-180, 180].
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(DomainError::NonFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// `(lat, lon)` expressed in `unit`.
    #[inline]
    pub fn in_unit(self, unit: AngleUnit) -> (f64, f64) {
        (unit.from_degrees(self.lat), unit.from_degrees(self.lon))
    }

    /// `(lat, lon)` in radians — the form every spherical formula wants.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        self.in_unit(AngleUnit::Radians)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lon)` in degrees.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
