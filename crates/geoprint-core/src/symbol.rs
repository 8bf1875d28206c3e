//! The geoprint alphabet.
//!
//! A geoprint is one [`Hemisphere`] character followed by any number of
//! [`Base`] characters.  Each base carries two bits:
//!
//! ```text
//!   bit 1 (value 2) — longitude in the upper half of its interval
//!   bit 0 (value 1) — latitude in the upper half of its interval
//!
//!   value:  0    1    2    3
//!   base:   g    a    t    c
//! ```

use crate::error::FormatError;

/// Longitude sign, fixed by the first character of every geoprint.
///
/// West covers `[-180, 0)`, east covers `[0, 180]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    West,
    East,
}

impl Hemisphere {
    /// Hemisphere containing `lon` (degrees).  Zero is east.
    #[inline]
    pub fn of_longitude(lon: f64) -> Self {
        if lon < 0.0 { Hemisphere::West } else { Hemisphere::East }
    }

    pub fn from_char(c: char) -> Result<Self, FormatError> {
        match c {
            'w' => Ok(Hemisphere::West),
            'e' => Ok(Hemisphere::East),
            found => Err(FormatError::Hemisphere { found }),
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Hemisphere::West => 'w',
            Hemisphere::East => 'e',
        }
    }

    /// Initial `(min, max)` longitude interval for bisection.
    #[inline]
    pub fn longitude_range(self) -> (f64, f64) {
        match self {
            Hemisphere::West => (-180.0, 0.0),
            Hemisphere::East => (0.0, 180.0),
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Hemisphere::West => "west",
            Hemisphere::East => "east",
        })
    }
}

/// One bisection step: which half of the longitude and latitude intervals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Base {
    /// Lower longitude, lower latitude.
    G = 0,
    /// Lower longitude, upper latitude.
    A = 1,
    /// Upper longitude, lower latitude.
    T = 2,
    /// Upper longitude, upper latitude.
    C = 3,
}

impl Base {
    pub const ALPHABET: [Base; 4] = [Base::G, Base::A, Base::T, Base::C];

    const LON_BIT: u8 = 2;
    const LAT_BIT: u8 = 1;

    /// Base for a 2-bit value; only the low two bits of `bits` are used.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self::ALPHABET[(bits & 0b11) as usize]
    }

    #[inline]
    pub fn from_halves(lon_upper: bool, lat_upper: bool) -> Self {
        let mut bits = 0;
        if lon_upper {
            bits |= Self::LON_BIT;
        }
        if lat_upper {
            bits |= Self::LAT_BIT;
        }
        Self::from_bits(bits)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn lon_upper(self) -> bool {
        self.bits() & Self::LON_BIT != 0
    }

    #[inline]
    pub fn lat_upper(self) -> bool {
        self.bits() & Self::LAT_BIT != 0
    }

    /// Parse a base character found at `index` within a geoprint.
    pub fn from_char(c: char, index: usize) -> Result<Self, FormatError> {
        match c {
            'g' => Ok(Base::G),
            'a' => Ok(Base::A),
            't' => Ok(Base::T),
            'c' => Ok(Base::C),
            found => Err(FormatError::Base { index, found }),
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Base::G => 'g',
            Base::A => 'a',
            Base::T => 't',
            Base::C => 'c',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
