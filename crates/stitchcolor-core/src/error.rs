//! Error types for name parsing at the crate boundary.
//!
//! Every numeric operation in this crate is total; the only fallible calls are
//! the ones that turn host-supplied strings into closed enums.

/// Result alias for fallible stitchcolor operations.
pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unknown color matching algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("unknown thread brand: {0}")]
    UnknownThreadBrand(String),
}
