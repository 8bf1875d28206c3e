//! `geoprint-relations` — spatial queries combining the codec and geometry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`compass`]   | `Compass` — the eight bearings neighbors are tagged with |
//! | [`neighbors`] | `neighbors`, `neighbor_prints`                        |
//! | [`adjacent`]  | `adjacent`, `MIN_ADJACENCY_PRECISION`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Compass` and propagates to `geoprint-core`. |
//!
//! # Quick-start
//!
//! ```
//! use geoprint_relations::{adjacent, neighbor_prints};
//!
//! let cells = neighbor_prints("watttatctt").unwrap();
//! assert_eq!(cells.len(), 8);
//! assert!(adjacent("watttatctt", "watttatctt").unwrap());
//! ```

pub mod adjacent;
pub mod compass;
pub mod neighbors;

#[cfg(test)]
mod tests;

pub use adjacent::{adjacent, MIN_ADJACENCY_PRECISION};
pub use compass::Compass;
pub use neighbors::{neighbor_prints, neighbors};

/// Set type returned by the neighbor queries.
pub use rustc_hash::FxHashSet;
