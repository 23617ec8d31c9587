//! Curve parameters in the EIP-2494 twisted Edwards form `a x^2 + y^2 = 1 + d x^2 y^2`.

use ark_ec::{
    models::CurveConfig,
    twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig},
};
use ark_ed_on_bn254::{Fq, Fr as EdFr};
use ark_ff::{Field, MontFp};

pub type EdwardsAffine = Affine<BabyJubjubConfig>;
pub type EdwardsProjective = Projective<BabyJubjubConfig>;

/// Baby Jubjub with a = 168700, d = 168696.
///
/// `ark-ed-on-bn254` ships the same curve in a reduced (a = 1) form whose coordinates are
/// not compatible with circomlib, so the parameters are restated here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BabyJubjubConfig;

impl CurveConfig for BabyJubjubConfig {
    type BaseField = Fq;
    type ScalarField = EdFr;

    const COFACTOR: &'static [u64] = &[8];

    // 8^(-1) mod l
    const COFACTOR_INV: EdFr =
        MontFp!("2394026564107420727433200628387514462817212225638746351800188703329891451411");
}

impl TECurveConfig for BabyJubjubConfig {
    const COEFF_A: Fq = MontFp!("168700");

    #[inline(always)]
    fn mul_by_a(elem: Self::BaseField) -> Self::BaseField {
        elem * <BabyJubjubConfig as TECurveConfig>::COEFF_A
    }

    const COEFF_D: Fq = MontFp!("168696");

    // Arithmetic stays inside the prime-order subgroup, so Base8 is the generator.
    const GENERATOR: EdwardsAffine = EdwardsAffine::new_unchecked(BASE_X, BASE_Y);

    type MontCurveConfig = BabyJubjubConfig;
}

// Montgomery form B y^2 = x^3 + A x^2 + x
impl MontCurveConfig for BabyJubjubConfig {
    const COEFF_A: Fq = MontFp!("168698");
    const COEFF_B: Fq = Fq::ONE;

    type TECurveConfig = BabyJubjubConfig;
}

/// x-coordinate of the full-group generator G
pub const GENERATOR_X: Fq =
    MontFp!("995203441582195749578291179787384436505546430278305826713579947235728471134");
/// y-coordinate of the full-group generator G
pub const GENERATOR_Y: Fq =
    MontFp!("5472060717959818805561601436314318772137091100104008585924551046643952123905");

/// x-coordinate of Base8 = 8 * G
pub const BASE_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
/// y-coordinate of Base8 = 8 * G
pub const BASE_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

/// Base8, the generator of the prime-order subgroup used for keys and signatures.
pub fn base8() -> EdwardsAffine {
    EdwardsAffine::new_unchecked(BASE_X, BASE_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;
    use ark_ff::{PrimeField, Zero};

    #[test]
    fn test_base8_is_eight_times_generator() {
        let g = EdwardsAffine::new_unchecked(GENERATOR_X, GENERATOR_Y);
        let cofactor = EdFr::from_be_bytes_mod_order(&[BabyJubjubConfig::COFACTOR[0] as u8]);

        assert_eq!(g * cofactor, EdwardsProjective::from(base8()));
    }

    #[test]
    fn test_generator_times_subgroup_order_is_not_identity() {
        // G generates the full group of order 8l, so l * G is a point of order 8.
        let g = EdwardsAffine::new_unchecked(GENERATOR_X, GENERATOR_Y);
        let identity = EdwardsProjective::new(Fq::zero(), Fq::ONE, Fq::zero(), Fq::ONE);

        let l_times_g = g.mul_bigint(EdFr::MODULUS);
        assert_ne!(l_times_g, identity);
        assert_eq!(l_times_g * EdFr::from(8u64), identity);
    }

    #[test]
    fn test_base8_on_curve_and_in_subgroup() {
        let b8 = base8();
        assert!(b8.is_on_curve());
        assert!(b8.is_in_correct_subgroup_assuming_on_curve());
    }
}
