//! Codec configuration.

use crate::codec::DEFAULT_PRECISION;
use crate::error::DomainError;
use crate::unit::AngleUnit;

/// Precision and unit settings shared by a batch of encode/decode calls.
///
/// Typically built once by the application (or deserialized from its own
/// config file with the `serde` feature) and passed by reference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Characters per geoprint, hemisphere included.  Must be ≥ 1.
    /// Default: 22.
    pub precision: usize,

    /// Unit of coordinates passed to `encode_with` and returned by
    /// `decode_with`.  Default: degrees.
    pub unit: AngleUnit,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            unit: AngleUnit::Degrees,
        }
    }
}

impl CodecConfig {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.precision < 1 {
            return Err(DomainError::Precision { requested: self.precision });
        }
        Ok(())
    }
}
