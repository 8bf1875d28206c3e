//! `geoprint-geometry` — spherical measurements over geoprints.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`sphere`]  | `haversine`, `initial_bearing`, `destination`, `EARTH_RADIUS_M` (radians in, radians out) |
//! | [`measure`] | `distance`, `bearing` between two geoprints                |
//! | [`format`]  | `format` — error-aware display strings                     |
//!
//! Errors are the shared [`geoprint_core::GeoprintError`]; every operation
//! here fails only when one of its geoprints does not decode.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `geoprint-core` types.  |

pub mod format;
pub mod measure;
pub mod sphere;

#[cfg(test)]
mod tests;

pub use format::format;
pub use measure::{bearing, distance};
pub use sphere::{destination, haversine, initial_bearing, EARTH_RADIUS_M};
