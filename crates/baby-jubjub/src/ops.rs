//! Point arithmetic.

use crate::curve::{EdwardsAffine, EdwardsProjective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bn254::Fr as EdFr;
use num_bigint::BigUint;

/// Adds two points with the twisted Edwards addition law
/// x3 = (x1*y2 + y1*x2)/(1 + d*x1*x2*y1*y2)
/// y3 = (y1*y2 - a*x1*x2)/(1 - d*x1*x2*y1*y2)
pub fn add_point(p1: &EdwardsAffine, p2: &EdwardsAffine) -> EdwardsAffine {
    (*p1 + *p2).into_affine()
}

/// Multiplies `base` by a scalar-field element, i.e. by `e mod l`.
///
/// Only equivalent to integer multiplication when `base` lies in the prime-order subgroup.
pub fn mul_point_escalar(base: &EdwardsAffine, e: EdFr) -> EdwardsAffine {
    let projective: EdwardsProjective = (*base).into();
    (projective * e).into_affine()
}

/// Multiplies `base` by an arbitrary non-negative integer without reducing it first.
pub fn mul_point_biguint(base: &EdwardsAffine, e: &BigUint) -> EdwardsAffine {
    base.mul_bigint(e.to_u64_digits()).into_affine()
}

/// Checks the curve equation `a x^2 + y^2 = 1 + d x^2 y^2`.
///
/// This is not a subgroup check: the eight small-order points also pass.
pub fn in_curve(point: &EdwardsAffine) -> bool {
    point.is_on_curve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUB_ORDER;
    use crate::curve::{base8, BASE_X, BASE_Y};
    use ark_ed_on_bn254::Fq;
    use ark_ff::{BigInteger, Field, MontFp, PrimeField, Zero};

    fn coords(point: &EdwardsAffine) -> (BigUint, BigUint) {
        (
            BigUint::from_bytes_le(&point.x.into_bigint().to_bytes_le()),
            BigUint::from_bytes_le(&point.y.into_bigint().to_bytes_le()),
        )
    }

    #[test]
    fn test_add_point() {
        let p1 = EdwardsAffine::new_unchecked(
            MontFp!(
                "17777552123799933955779906779655732241715742912184938656739573121738514868268"
            ),
            MontFp!("2626589144620713026669568689430873010625803728049924121243784502389097019475"),
        );
        let p2 = EdwardsAffine::new_unchecked(
            MontFp!(
                "16540640123574156134436876038791482806971768689494387082833631921987005038935"
            ),
            MontFp!(
                "20819045374670962167435360035096875258406992893633759881276124905556507972311"
            ),
        );

        let result = add_point(&p1, &p2);

        assert_eq!(EdwardsProjective::from(result), p1 + p2);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_add_identity() {
        let identity = EdwardsAffine::new_unchecked(Fq::zero(), Fq::ONE);
        let sum = add_point(&identity, &base8());
        assert_eq!(coords(&sum), coords(&base8()));
    }

    #[test]
    fn test_mul_point_escalar_fixed_scalar() {
        let public_key = mul_point_escalar(&base8(), EdFr::from(111111u64));
        let (x, y) = coords(&public_key);

        assert_eq!(
            x.to_string(),
            "9221645876368174110961758157755419489792970878899130950662684756868821534630"
        );
        assert_eq!(
            y.to_string(),
            "21677522106472114192907581749333412416696788200272735806441075884691267290092"
        );
        assert!(in_curve(&public_key));
    }

    #[test]
    fn test_mul_point_biguint_agrees_in_subgroup() {
        let scalar = BigUint::from(324u64);
        let via_field = mul_point_escalar(&base8(), EdFr::from(324u64));
        let via_integer = mul_point_biguint(&base8(), &scalar);
        assert_eq!(coords(&via_field), coords(&via_integer));

        // l + 324 wraps around in the subgroup
        let wrapped = mul_point_biguint(&base8(), &(&*SUB_ORDER + 324u32));
        assert_eq!(coords(&wrapped), coords(&via_field));
    }

    #[test]
    fn test_mul_point_biguint_zero_is_identity() {
        let result = mul_point_biguint(&base8(), &BigUint::from(0u32));
        assert_eq!(result.x, Fq::zero());
        assert_eq!(result.y, Fq::ONE);
    }

    #[test]
    fn test_in_curve() {
        assert!(in_curve(&EdwardsAffine::new_unchecked(BASE_X, BASE_Y)));
        assert!(!in_curve(&EdwardsAffine::new_unchecked(Fq::ONE, Fq::zero())));
        assert!(!in_curve(&EdwardsAffine::new_unchecked(BASE_X, BASE_X)));
    }
}
