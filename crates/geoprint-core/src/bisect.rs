//! Interval bisection — the primitive under both encode and decode.
//!
//! Latitude and longitude each keep an independent `[min, max]` interval.
//! Every base halves both:
//!
//! ```text
//!   encode:  value >  mid  → upper half, bit set
//!            value <= mid  → lower half, bit clear
//!   decode:  bit set       → upper half
//!            bit clear     → lower half
//! ```
//!
//! The comparison is strict, so a value sitting exactly on a midpoint goes
//! to the lower half at every level.  Existing geoprints depend on this.

use crate::symbol::{Base, Hemisphere};

const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// A closed numeric interval narrowed one half at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[inline]
    fn new((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn mid(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    fn halve(self, upper: bool) -> Self {
        let mid = self.mid();
        if upper {
            Self { min: mid, max: self.max }
        } else {
            Self { min: self.min, max: mid }
        }
    }

    /// Narrow towards `value`; returns whether the upper half was taken.
    #[inline]
    fn narrow_towards(&mut self, value: f64) -> bool {
        let upper = value > self.mid();
        *self = self.halve(upper);
        upper
    }
}

/// Running latitude/longitude intervals for one geoprint.
///
/// Lives on the stack for the duration of a single encode or decode call.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Bisector {
    pub lat: Interval,
    pub lon: Interval,
}

impl Bisector {
    pub fn new(hemisphere: Hemisphere) -> Self {
        Self {
            lat: Interval::new(LAT_RANGE),
            lon: Interval::new(hemisphere.longitude_range()),
        }
    }

    /// Encoding step: narrow both intervals towards `(lat, lon)` (degrees)
    /// and report the base describing the halves taken.
    #[inline]
    pub fn encode_step(&mut self, lat: f64, lon: f64) -> Base {
        let lon_upper = self.lon.narrow_towards(lon);
        let lat_upper = self.lat.narrow_towards(lat);
        Base::from_halves(lon_upper, lat_upper)
    }

    /// Decoding step: narrow both intervals to the halves `base` names.
    #[inline]
    pub fn decode_step(&mut self, base: Base) {
        self.lon = self.lon.halve(base.lon_upper());
        self.lat = self.lat.halve(base.lat_upper());
    }

    /// Midpoint of the current cell as `(lat, lon)` in degrees.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.lat.mid(), self.lon.mid())
    }
}
