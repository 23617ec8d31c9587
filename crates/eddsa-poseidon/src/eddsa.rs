use crate::error::{EdDSAError, Result};
use crate::input::{normalize_message, BigNumberish, PointLike, PrivateKey, SignatureLike};
use crate::types::{HashingAlgorithm, Signature};
use crate::utils::{
    biguint_to_bytes_le, biguint_to_edfr, edfr_to_biguint, hash_input, poseidon5, prune_buffer,
    DIGEST_LEN,
};
use baby_jubjub::{
    add_point, base8, biguint_to_fr, fr_to_biguint, in_curve, mul_point_biguint,
    mul_point_escalar, pack_point, unpack_point, EdwardsAffine, SUB_ORDER,
};
use num_bigint::BigUint;

/// Hashes the normalized private key and returns the digest together with the pruned,
/// unshifted scalar read from its low half.
fn expand_private_key(
    private_key: &PrivateKey,
    algorithm: HashingAlgorithm,
) -> Result<([u8; DIGEST_LEN], BigUint)> {
    let bytes = private_key.to_bytes()?;
    let digest = hash_input(&bytes, algorithm)?;

    let mut low = [0u8; 32];
    low.copy_from_slice(&digest[..32]);
    prune_buffer(&mut low);

    Ok((digest, BigUint::from_bytes_le(&low)))
}

/// Derives a secret scalar from a given private key.
///
/// Process:
/// 1. hash(privateKey) -> 64 bytes
/// 2. Take first 32 bytes
/// 3. prune_buffer()
/// 4. Convert to BigUint (little-endian)
/// 5. Shift right by 3
///
/// The result is not reduced modulo the subgroup order.
pub fn derive_secret_scalar(
    private_key: impl Into<PrivateKey>,
    algorithm: HashingAlgorithm,
) -> Result<BigUint> {
    let (_, s) = expand_private_key(&private_key.into(), algorithm)?;
    Ok(s >> 3)
}

/// Derives a public key from a given private key: `Base8 * secret_scalar`.
pub fn derive_public_key(
    private_key: impl Into<PrivateKey>,
    algorithm: HashingAlgorithm,
) -> Result<EdwardsAffine> {
    let s = derive_secret_scalar(private_key, algorithm)?;
    Ok(mul_point_escalar(&base8(), biguint_to_edfr(&s)))
}

/// Signs a message using the provided private key.
///
/// Process:
/// 1. hash = hash_input(privateKey), s = prune(hash[..32])
/// 2. A = Base8 * (s >> 3)
/// 3. r = hash_input(hash[32..64] || le32(message)) mod l
/// 4. R8 = Base8 * r
/// 5. hm = poseidon5([R8.x, R8.y, A.x, A.y, message])
/// 6. S = r + hm * s (mod l)
pub fn sign_message(
    private_key: impl Into<PrivateKey>,
    message: impl Into<BigNumberish>,
    algorithm: HashingAlgorithm,
) -> Result<Signature> {
    let (digest, s) = expand_private_key(&private_key.into(), algorithm)?;
    let message = normalize_message(&message.into())?;

    let public_key = mul_point_escalar(&base8(), biguint_to_edfr(&(&s >> 3)));

    let mut r_input = digest[32..].to_vec();
    r_input.extend_from_slice(&biguint_to_bytes_le(&message, 32));
    let r_digest = hash_input(&r_input, algorithm)?;
    let r = biguint_to_edfr(&BigUint::from_bytes_le(&r_digest));

    let r8 = mul_point_escalar(&base8(), r);

    let hm = poseidon5(&[
        r8.x,
        r8.y,
        public_key.x,
        public_key.y,
        biguint_to_fr(&message),
    ])?;

    // S uses the unshifted s
    let response = r + biguint_to_edfr(&fr_to_biguint(&hm)) * biguint_to_edfr(&s);

    Ok(Signature {
        r8,
        s: edfr_to_biguint(&response),
    })
}

fn check_signature(
    message: BigNumberish,
    signature: SignatureLike,
    public_key: PointLike,
) -> Result<bool> {
    let public_key = public_key.to_point()?;
    if !in_curve(&public_key) {
        return Ok(false);
    }

    let signature = signature.to_signature()?;
    if !in_curve(&signature.r8) || signature.s >= *SUB_ORDER {
        return Ok(false);
    }

    let message = normalize_message(&message)?;

    let hm = poseidon5(&[
        signature.r8.x,
        signature.r8.y,
        public_key.x,
        public_key.y,
        biguint_to_fr(&message),
    ])?;

    let left = mul_point_escalar(&base8(), biguint_to_edfr(&signature.s));

    // 8 * hm is applied as a plain integer so small-order components of A are cleared
    let challenge = fr_to_biguint(&hm) * 8u32;
    let right = add_point(&signature.r8, &mul_point_biguint(&public_key, &challenge));

    Ok(left == right)
}

/// Verifies an EdDSA signature.
///
/// Verification:
/// 1. Check the public key is well-formed and on the curve
/// 2. Check the signature shape, R8 on the curve and S < subOrder
/// 3. h = poseidon5([R8.x, R8.y, pubKey.x, pubKey.y, message])
/// 4. Verify: Base8 * S == R8 + pubKey * (h * 8)
///
/// Malformed input of any kind yields `false`.
pub fn verify_signature(
    message: impl Into<BigNumberish>,
    signature: impl Into<SignatureLike>,
    public_key: impl Into<PointLike>,
) -> bool {
    check_signature(message.into(), signature.into(), public_key.into()).unwrap_or(false)
}

/// Packs a public key into a BigUint.
pub fn pack_public_key(public_key: impl Into<PointLike>) -> Result<BigUint> {
    let point = public_key.into().to_point()?;
    if !in_curve(&point) {
        return Err(EdDSAError::InvalidPublicKey(
            "point is not on the curve".to_string(),
        ));
    }
    Ok(pack_point(&point))
}

/// Unpacks a public key from its packed integer, decimal or `0x` hex form.
pub fn unpack_public_key(packed: impl Into<BigNumberish>) -> Result<EdwardsAffine> {
    let packed = packed.into();
    let value = packed.to_biguint().ok_or_else(|| {
        EdDSAError::InvalidType(format!("{:?} is not a packed public key", packed))
    })?;
    Ok(unpack_point(&value)?)
}
