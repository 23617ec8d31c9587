//! Compressed point encoding.
//!
//! A packed point is the 32-byte little-endian y-coordinate with the sign of x stored in
//! the most significant bit of the last byte. x counts as negative when it is greater than
//! (p - 1) / 2.

use crate::constants::SNARK_FIELD_SIZE;
use crate::curve::{BabyJubjubConfig, EdwardsAffine};
use crate::error::{BabyJubjubError, Result};
use ark_ec::twisted_edwards::TECurveConfig;
use ark_ed_on_bn254::Fq;
use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

const SIGN_BIT: u8 = 0x80;

fn is_negative(value: &Fq) -> bool {
    value.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// Packs a point into its compressed integer form.
///
/// The point is not validated; callers that accept untrusted points check [`crate::in_curve`].
pub fn pack_point(point: &EdwardsAffine) -> BigUint {
    let mut packed = [0u8; 32];
    let y_bytes = point.y.into_bigint().to_bytes_le();
    packed[..y_bytes.len()].copy_from_slice(&y_bytes);

    if is_negative(&point.x) {
        packed[31] |= SIGN_BIT;
    }

    BigUint::from_bytes_le(&packed)
}

/// Recovers a point from its compressed form by solving the curve equation for x:
/// x^2 = (1 - y^2) / (a - d*y^2)
pub fn unpack_point(packed: &BigUint) -> Result<EdwardsAffine> {
    let bytes = packed.to_bytes_le();
    if bytes.len() > 32 {
        return Err(BabyJubjubError::PackedPointTooLarge);
    }

    let mut buffer = [0u8; 32];
    buffer[..bytes.len()].copy_from_slice(&bytes);

    let x_negative = buffer[31] & SIGN_BIT != 0;
    buffer[31] &= !SIGN_BIT;

    if BigUint::from_bytes_le(&buffer) >= *SNARK_FIELD_SIZE {
        return Err(BabyJubjubError::YCoordinateOutOfRange);
    }
    let y = Fq::from_le_bytes_mod_order(&buffer);

    let a = <BabyJubjubConfig as TECurveConfig>::COEFF_A;
    let d = <BabyJubjubConfig as TECurveConfig>::COEFF_D;
    let y2 = y.square();

    let denominator_inv = (a - d * y2)
        .inverse()
        .ok_or(BabyJubjubError::DenominatorZero)?;
    let x2 = (Fq::ONE - y2) * denominator_inv;

    let mut x = x2
        .sqrt()
        .ok_or_else(|| BabyJubjubError::NotQuadraticResidue(y.to_string()))?;
    if is_negative(&x) != x_negative {
        x = -x;
    }

    let point = EdwardsAffine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(BabyJubjubError::PointNotOnCurve);
    }

    Ok(point)
}
