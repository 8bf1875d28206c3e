//! Angle and distance units.
//!
//! Geoprint operations work in degrees unless told otherwise.  The unit is a
//! parameter rather than a boolean flag so call sites read unambiguously:
//! `decode(g, AngleUnit::Radians)` instead of `decode(g, true)`.

/// Unit of an angular value (coordinates, errors, bearings).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert `value`, expressed in `self`, into degrees.
    #[inline]
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => value.to_degrees(),
        }
    }

    /// Convert `degrees` into `self`.
    #[inline]
    pub fn from_degrees(self, degrees: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees,
            AngleUnit::Radians => degrees.to_radians(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }
}

impl std::fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of a distance between two geoprints.
///
/// `Radians` is the angular great-circle distance; `Meters` scales it by the
/// spherical earth radius used throughout the workspace.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    #[default]
    Meters,
    Radians,
}

impl DistanceUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "meters",
            DistanceUnit::Radians => "radians",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
