//! Error types for EdDSA-Poseidon operations.

use baby_jubjub::BabyJubjubError;
use thiserror::Error;

/// Failure kinds of key derivation, signing and public-key packing.
///
/// Verification never surfaces these: it reports `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdDSAError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Hash function error: {0}")]
    HashError(String),
}

impl From<BabyJubjubError> for EdDSAError {
    fn from(err: BabyJubjubError) -> Self {
        EdDSAError::InvalidPublicKey(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EdDSAError>;
