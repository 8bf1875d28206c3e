//! The eight compass points used to label neighbors.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// A principal or intercardinal direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// All eight points, clockwise from north.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// Bearing clockwise from north in `[0, 2π)`.
    pub fn radians(self) -> f64 {
        match self {
            Compass::N => 0.0,
            Compass::NE => FRAC_PI_4,
            Compass::E => FRAC_PI_2,
            Compass::SE => 3.0 * PI / 4.0,
            Compass::S => PI,
            Compass::SW => 5.0 * PI / 4.0,
            Compass::W => 3.0 * PI / 2.0,
            Compass::NW => 7.0 * PI / 4.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NE => "NE",
            Compass::E => "E",
            Compass::SE => "SE",
            Compass::S => "S",
            Compass::SW => "SW",
            Compass::W => "W",
            Compass::NW => "NW",
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
