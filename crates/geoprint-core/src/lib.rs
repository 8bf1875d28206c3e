//! `geoprint-core` — coordinates, the geoprint alphabet, and the codec.
//!
//! A geoprint is a base-4 geohash: one hemisphere character (`w`/`e`)
//! followed by bases from `g a t c`, each halving the latitude and longitude
//! intervals once.  Sharing a prefix means sharing a cell.
//!
//! This crate is a dependency of every other `geoprint-*` crate.  It has no
//! `geoprint-*` dependencies and minimal external ones (`thiserror` and
//! `log`, plus optional `serde` and `rayon`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `Coordinate`                                              |
//! | [`unit`]     | `AngleUnit`, `DistanceUnit`                               |
//! | [`symbol`]   | `Hemisphere`, `Base`                                      |
//! | [`geoprint`] | `Geoprint` (validated string)                             |
//! | [`codec`]    | `encode`, `decode`, `error`, `size`, `bounds`, `Bounds`   |
//! | [`config`]   | `CodecConfig`                                             |
//! | [`error`]    | `FormatError`, `DomainError`, `GeoprintError`, `GeoprintResult` |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Adds `Serialize`/`Deserialize` to all public types.     |
//! | `parallel` | `encode_many` runs on Rayon's thread pool.              |
//!
//! # Example
//!
//! ```
//! use geoprint_core::{decode, encode, error, AngleUnit};
//!
//! let g = encode(7.0625, -95.677068, 22, AngleUnit::Degrees).unwrap();
//! assert_eq!(g.as_str(), "watttatcttttgctacgaagt");
//!
//! let (lat, lon) = decode(g.as_str(), AngleUnit::Degrees).unwrap();
//! let e = error(g.as_str(), AngleUnit::Degrees);
//! assert!((lat - 7.0625).abs() <= e);
//! assert!((lon + 95.677068).abs() <= e);
//! ```

mod bisect;

pub mod codec;
pub mod config;
pub mod error;
pub mod geo;
pub mod geoprint;
pub mod symbol;
pub mod unit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use codec::{
    bounds, decode, decode_with, encode, encode_many, encode_with, error, size, Bounds,
    DEFAULT_PRECISION,
};
pub use config::CodecConfig;
pub use error::{DomainError, FormatError, GeoprintError, GeoprintResult};
pub use geo::Coordinate;
pub use geoprint::Geoprint;
pub use symbol::{Base, Hemisphere};
pub use unit::{AngleUnit, DistanceUnit};
