//! Human-readable rendering of a geoprint's center.
//!
//! The number of decimals shown tracks the geoprint's error, so a coarse
//! geoprint does not pretend to more precision than it has:
//!
//! ```text
//! places = max(1, round(-log10(error))) - 1
//! ```
//!
//! After fixed-point formatting, trailing zeros are stripped from any string
//! containing a decimal point.  The point itself is never stripped, so
//! `-95.0` at one place renders as `"-95."`.  Stored display strings rely on
//! this exact shape.

use geoprint_core::{decode, error, AngleUnit, DomainError, GeoprintResult};

/// `(latitude, longitude)` of `geoprint`'s center as display strings.
///
/// Fails with [`DomainError::Unresolvable`] once the geoprint is long enough
/// that its error underflows to zero.
pub fn format(geoprint: &str) -> GeoprintResult<(String, String)> {
    let (lat, lon) = decode(geoprint, AngleUnit::Degrees)?;
    let places = decimal_places(error(geoprint, AngleUnit::Degrees)).ok_or_else(|| {
        DomainError::Unresolvable {
            len: geoprint.chars().count(),
        }
    })?;
    Ok((format_fixed(lat, places), format_fixed(lon, places)))
}

/// Decimal places justified by an error of `err` degrees.
///
/// `None` unless `err` is positive and finite.
pub fn decimal_places(err: f64) -> Option<usize> {
    if !(err > 0.0 && err.is_finite()) {
        return None;
    }
    let magnitude = (-err.log10()).round_ties_even();
    Some((magnitude.max(1.0) - 1.0) as usize)
}

/// `value` to `places` decimals, trailing zeros dropped if a point is
/// present.
pub fn format_fixed(value: f64, places: usize) -> String {
    let s = format!("{value:.places$}");
    if s.contains('.') {
        s.trim_end_matches('0').to_owned()
    } else {
        s
    }
}
