//! Baby Jubjub Elliptic Curve
//!
//! Baby Jubjub curve operations compatible with EIP-2494 and circomlib.
//! Baby Jubjub is a twisted Edwards elliptic curve defined over the BN254 scalar field,
//! with cofactor 8. Keys and signatures live in the prime-order subgroup generated by
//! [`base8`].

mod constants;
mod curve;
mod error;
mod ops;
mod pack;

pub use constants::{biguint_to_fr, fr_to_biguint, SNARK_FIELD_SIZE, SUB_ORDER};
pub use curve::{
    base8, BabyJubjubConfig, EdwardsAffine, EdwardsProjective, BASE_X, BASE_Y, GENERATOR_X,
    GENERATOR_Y,
};
pub use error::{BabyJubjubError, Result};
pub use ops::{add_point, in_curve, mul_point_biguint, mul_point_escalar};
pub use pack::{pack_point, unpack_point};

// Field types of the curve: `Fq` holds coordinates, `EdFr` holds subgroup scalars.
pub use ark_ed_on_bn254::{Fq, Fr as EdFr};
