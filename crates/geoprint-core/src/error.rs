//! Geoprint error types.
//!
//! Two failure families exist and callers usually care which one they hit:
//!
//! - [`FormatError`] — the input string is not a geoprint.
//! - [`DomainError`] — the input is well-formed but outside what the
//!   operation accepts (precision below 1, non-finite coordinates, too few
//!   characters for an adjacency test, more
//!   characters than an `f64` can resolve).
//!
//! Both convert into [`GeoprintError`] via `From`, so `?` works across them.

use thiserror::Error;

/// A string that does not satisfy the geoprint structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("geoprint is empty")]
    Empty,

    #[error("invalid hemisphere character {found:?} (expected 'w' or 'e')")]
    Hemisphere { found: char },

    #[error("invalid character {found:?} at index {index} (expected one of g, a, t, c)")]
    Base { index: usize, found: char },
}

/// A well-formed input the operation cannot work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("precision must be at least 1, got {requested}")]
    Precision { requested: usize },

    #[error("coordinate must be finite, got ({lat}, {lon})")]
    NonFinite { lat: f64, lon: f64 },

    #[error("coordinate out of range, got ({lat}, {lon})")]
    OutOfRange { lat: f64, lon: f64 },

    #[error("adjacency requires at least 3 characters of precision, got {len}")]
    Adjacency { len: usize },

    #[error("a {len}-character geoprint is finer than f64 can resolve")]
    Unresolvable { len: usize },
}

/// The top-level error type shared by every `geoprint-*` crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoprintError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl GeoprintError {
    pub fn is_format(&self) -> bool {
        matches!(self, GeoprintError::Format(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, GeoprintError::Domain(_))
    }
}

/// Shorthand result type for all `geoprint-*` crates.
pub type GeoprintResult<T> = Result<T, GeoprintError>;
