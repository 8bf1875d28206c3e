//! Validated geoprint string.
//!
//! A `Geoprint` can only be obtained by encoding a coordinate or by parsing a
//! string that passes the same checks `decode` performs, so every method on
//! it is infallible.  Ordering and hashing are those of the underlying
//! string, which keeps prefix-sharing cells adjacent in sorted collections.

use std::fmt;
use std::str::FromStr;

use crate::bisect::Bisector;
use crate::codec::{self, Bounds};
use crate::error::{DomainError, FormatError, GeoprintError};
use crate::geo::Coordinate;
use crate::symbol::{Base, Hemisphere};
use crate::unit::AngleUnit;

/// An immutable, structurally valid geoprint.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Geoprint(String);

impl Geoprint {
    /// Parse and validate `s`.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        codec::bisect(s)?;
        Ok(Geoprint(s.to_owned()))
    }

    /// Wrap a string the caller has just built from valid symbols.
    pub(crate) fn from_validated(s: String) -> Self {
        debug_assert!(codec::bisect(&s).is_ok(), "invalid geoprint {s:?}");
        Geoprint(s)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of characters, hemisphere included.  Always ≥ 1.
    #[inline]
    pub fn precision(&self) -> usize {
        self.0.len()
    }

    pub fn hemisphere(&self) -> Hemisphere {
        match self.0.as_bytes().first() {
            Some(b'w') => Hemisphere::West,
            _ => Hemisphere::East,
        }
    }

    /// The bases after the hemisphere character, in order.
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        self.0
            .chars()
            .enumerate()
            .skip(1)
            .filter_map(|(i, c)| Base::from_char(c, i).ok())
    }

    /// The enclosing cell one level up, or `None` for a bare hemisphere.
    pub fn parent(&self) -> Option<Geoprint> {
        (self.precision() > 1).then(|| Geoprint(self.0[..self.0.len() - 1].to_owned()))
    }

    /// The first `precision` characters.  Returns `self` unchanged when it is
    /// already that short.
    pub fn truncate(&self, precision: usize) -> Result<Geoprint, DomainError> {
        if precision < 1 {
            return Err(DomainError::Precision { requested: precision });
        }
        let end = precision.min(self.precision());
        Ok(Geoprint(self.0[..end].to_owned()))
    }

    /// `true` if `other` lies inside this cell (or is this cell).
    #[inline]
    pub fn is_prefix_of(&self, other: &Geoprint) -> bool {
        other.0.starts_with(&self.0)
    }

    fn bisector(&self) -> Bisector {
        let mut b = Bisector::new(self.hemisphere());
        for base in self.bases() {
            b.decode_step(base);
        }
        b
    }

    /// Cell center as `(lat, lon)` in `unit`.
    pub fn decode(&self, unit: AngleUnit) -> (f64, f64) {
        let (lat, lon) = self.bisector().center();
        (unit.from_degrees(lat), unit.from_degrees(lon))
    }

    /// Cell center in degrees.
    pub fn center(&self) -> Coordinate {
        let (lat, lon) = self.bisector().center();
        Coordinate::new(lat, lon)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_bisector(self.bisector())
    }

    #[inline]
    pub fn error(&self, unit: AngleUnit) -> f64 {
        codec::error(&self.0, unit)
    }

    #[inline]
    pub fn size(&self) -> f64 {
        codec::size(&self.0)
    }
}

impl fmt::Display for Geoprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Geoprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Geoprint {
    type Err = GeoprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Geoprint::parse(s)?)
    }
}

impl TryFrom<&str> for Geoprint {
    type Error = GeoprintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Geoprint {
    type Error = GeoprintError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        codec::bisect(&s)?;
        Ok(Geoprint(s))
    }
}

impl From<Geoprint> for String {
    fn from(g: Geoprint) -> String {
        g.0
    }
}

impl PartialEq<str> for Geoprint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Geoprint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
