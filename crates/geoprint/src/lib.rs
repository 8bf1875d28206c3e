//! `geoprint` — a base-4 geohash with a hemisphere prefix.
//!
//! A geoprint is `w` or `e` (sign of longitude) followed by characters from
//! `g a t c`, each halving the current latitude and longitude intervals.
//! Sharing a prefix means sharing a cell, so geoprints work as index keys
//! for proximity lookups in an external store.
//!
//! This crate only re-exports the `geoprint-*` crates under one name.
//!
//! | Re-exported from       | Items                                                       |
//! |------------------------|-------------------------------------------------------------|
//! | `geoprint-core`        | `encode`, `decode`, `error`, `size`, `bounds`, `encode_many`, `Geoprint`, `Coordinate`, units, errors, `CodecConfig` |
//! | `geoprint-geometry`    | `distance`, `bearing`, `format`, spherical primitives       |
//! | `geoprint-relations`   | `neighbors`, `neighbor_prints`, `adjacent`, `Compass`       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on all public types.          |
//! | `parallel` | `encode_many` runs on Rayon's thread pool.              |
//!
//! # Example
//!
//! ```
//! use geoprint::{distance, encode, format, AngleUnit, DistanceUnit};
//!
//! let here = encode(7.0625, -95.677068, 22, AngleUnit::Degrees)?;
//! assert_eq!(here.as_str(), "watttatcttttgctacgaagt");
//! assert_eq!(format(here.as_str())?, ("7.063".to_owned(), "-95.677".to_owned()));
//!
//! let there = encode(7.0625, -95.0, 22, AngleUnit::Degrees)?;
//! let m = distance(here.as_str(), there.as_str(), DistanceUnit::Meters)?;
//! assert!((m - 74_800.0).abs() < 500.0);
//! # Ok::<(), geoprint::GeoprintError>(())
//! ```

pub use geoprint_core::{
    bounds, decode, decode_with, encode, encode_many, encode_with, error, size, AngleUnit, Base,
    Bounds, CodecConfig, Coordinate, DistanceUnit, DomainError, FormatError, Geoprint,
    GeoprintError, GeoprintResult, Hemisphere, DEFAULT_PRECISION,
};
pub use geoprint_geometry::{
    bearing, destination, distance, format, haversine, initial_bearing, EARTH_RADIUS_M,
};
pub use geoprint_relations::{
    adjacent, neighbor_prints, neighbors, Compass, FxHashSet, MIN_ADJACENCY_PRECISION,
};
