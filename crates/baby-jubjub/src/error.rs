//! Error types for the baby-jubjub library

use thiserror::Error;

/// Reasons a packed point fails to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BabyJubjubError {
    #[error("Invalid point: packed value exceeds 32 bytes")]
    PackedPointTooLarge,

    #[error("Invalid point: y coordinate out of range")]
    YCoordinateOutOfRange,

    #[error("Invalid point: denominator is zero")]
    DenominatorZero,

    #[error("Invalid point: no x coordinate exists for y = {0}")]
    NotQuadraticResidue(String),

    #[error("Unpacked point is not on curve")]
    PointNotOnCurve,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BabyJubjubError>;
