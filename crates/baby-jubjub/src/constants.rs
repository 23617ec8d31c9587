//! Numeric constants of the curve and conversions between `BigUint` and base-field elements.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Modulus of the Baby Jubjub base field.
/// This is the scalar field order r of BN254, so it is also the Poseidon field.
pub static SNARK_FIELD_SIZE: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("Failed to parse SNARK_FIELD_SIZE")
});

/// Order `l` of the subgroup generated by Base8 (the full curve order divided by 8).
pub static SUB_ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"2736030358979909402780800718157159386076813972158567259200215660948447373041",
        10,
    )
    .expect("Failed to parse SUB_ORDER")
});

/// Convert a `BigUint` into a base-field element.
///
/// Only the low 32 bytes are read, and the result is reduced modulo the field size.
/// Callers that need a range check must compare against [`SNARK_FIELD_SIZE`] first.
pub fn biguint_to_fr(value: &BigUint) -> Fr {
    let bytes = value.to_bytes_le();
    let mut padded = [0u8; 32];
    let len = bytes.len().min(32);
    padded[..len].copy_from_slice(&bytes[..len]);
    Fr::from_le_bytes_mod_order(&padded)
}

/// Convert a base-field element into its canonical `BigUint` value.
pub fn fr_to_biguint(fr: &Fr) -> BigUint {
    BigUint::from_bytes_le(&fr.into_bigint().to_bytes_le())
}
