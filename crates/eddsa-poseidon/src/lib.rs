//! # EdDSA-Poseidon
//!
//! EdDSA signatures over the Baby Jubjub curve with a Poseidon challenge hash, so that
//! signatures can be checked cheaply inside a zero-knowledge circuit.
//!
//! ## Features
//!
//! - Key derivation with BLAKE-512 (default) or BLAKE2b
//! - Deterministic signing and a verifier that never errors
//! - Public-key packing into a single field-sized integer
//! - Keys, messages, points and signatures accepted as native values, decimal or hex text,
//!   or JSON
//! - Compatible with circomlib and zk-kit EdDSA-Poseidon
//!
//! ```no_run
//! use eddsa_poseidon::{derive_public_key, sign_message, verify_signature, HashingAlgorithm};
//!
//! let public_key = derive_public_key(b"secret", HashingAlgorithm::Blake512)?;
//! let signature = sign_message(b"secret", 2u64, HashingAlgorithm::Blake512)?;
//! assert!(verify_signature(2u64, &signature, public_key));
//! # Ok::<(), eddsa_poseidon::EdDSAError>(())
//! ```

mod eddsa;
mod error;
mod identity;
mod input;
mod types;
mod utils;

pub use eddsa::{
    derive_public_key, derive_secret_scalar, pack_public_key, sign_message, unpack_public_key,
    verify_signature,
};
pub use error::{EdDSAError, Result};
pub use identity::EdDSAPoseidon;
pub use input::{BigNumberish, PointLike, PrivateKey, SignatureLike, PRIVATE_KEY_MAX_LEN};
pub use types::{point_to_decimal, HashingAlgorithm, SerializedPoint, SerializedSignature, Signature};

// Re-export commonly used types from dependencies
pub use baby_jubjub::{base8, EdwardsAffine};
pub use num_bigint::BigUint;
