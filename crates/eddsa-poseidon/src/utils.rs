use crate::error::{EdDSAError, Result};
use crate::types::HashingAlgorithm;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use baby_jubjub::EdFr;
use blake::Blake;
use blake2::{Blake2b512, Digest};
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::BigUint;

/// Length in bytes of both supported digests.
pub const DIGEST_LEN: usize = 64;

/// Clamps the low half of a digest into a valid EdDSA scalar buffer:
///
/// ```text
/// buff[0]  &= 0xf8   clear the three lowest bits
/// buff[31] &= 0x7f   clear the highest bit
/// buff[31] |= 0x40   set the second-highest bit
/// ```
pub fn prune_buffer(buff: &mut [u8; 32]) {
    buff[0] &= 0xf8;
    buff[31] &= 0x7f;
    buff[31] |= 0x40;
}

/// Hashes input data with the selected algorithm into a 64-byte digest.
pub fn hash_input(data: &[u8], algorithm: HashingAlgorithm) -> Result<[u8; DIGEST_LEN]> {
    let mut output = [0u8; DIGEST_LEN];
    match algorithm {
        HashingAlgorithm::Blake512 => {
            let mut hasher = Blake::new(512)
                .map_err(|e| EdDSAError::HashError(format!("Blake-512 init failed: {:?}", e)))?;
            hasher.update(data);
            hasher.finalise(&mut output);
        }
        HashingAlgorithm::Blake2b => {
            let mut hasher = Blake2b512::new();
            hasher.update(data);
            output.copy_from_slice(&hasher.finalize());
        }
    }
    Ok(output)
}

/// Poseidon hash with 5 inputs, circomlib parameters.
/// Curve coordinates are BN254 scalar-field elements, so they are passed as is.
pub fn poseidon5(inputs: &[Fr; 5]) -> Result<Fr> {
    let mut poseidon = Poseidon::<Fr>::new_circom(5)
        .map_err(|e| EdDSAError::HashError(format!("Failed to create Poseidon hasher: {:?}", e)))?;

    poseidon
        .hash(inputs)
        .map_err(|e| EdDSAError::HashError(format!("Poseidon hash failed: {:?}", e)))
}

/// Convert BigUint to EdFr, reducing modulo the subgroup order
pub fn biguint_to_edfr(value: &BigUint) -> EdFr {
    EdFr::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Convert EdFr to BigUint
pub fn edfr_to_biguint(value: &EdFr) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Little-endian bytes of `value`, zero-padded to `len`.
///
/// Callers guarantee `value` fits in `len` bytes.
pub fn biguint_to_bytes_le(value: &BigUint, len: usize) -> Vec<u8> {
    let mut bytes = value.to_bytes_le();
    bytes.resize(len, 0);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use baby_jubjub::{biguint_to_fr, fr_to_biguint, SUB_ORDER};

    #[test]
    fn test_prune_buffer() {
        let mut buff = [0xFFu8; 32];
        prune_buffer(&mut buff);

        assert_eq!(buff[0], 0xF8);
        assert_eq!(buff[31], 0x7F);

        let mut buff = [0u8; 32];
        prune_buffer(&mut buff);
        assert_eq!(buff[0], 0x00);
        assert_eq!(buff[31], 0x40);
    }

    #[test]
    fn test_hash_input_blake512_known_digest() {
        // BLAKE-512 of the empty message
        let hash = hash_input(b"", HashingAlgorithm::Blake512).unwrap();
        assert_eq!(
            hex::encode(hash),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
    }

    #[test]
    fn test_hash_input_blake2b_known_digest() {
        // BLAKE2b-512 of "abc" (RFC 7693, Appendix A)
        let hash = hash_input(b"abc", HashingAlgorithm::Blake2b).unwrap();
        assert_eq!(
            hex::encode(hash),
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        );
    }

    #[test]
    fn test_hash_algorithms_differ() {
        let blake512 = hash_input(b"secret", HashingAlgorithm::Blake512).unwrap();
        let blake2b = hash_input(b"secret", HashingAlgorithm::Blake2b).unwrap();
        assert_ne!(blake512, blake2b);
    }

    #[test]
    fn test_poseidon5() {
        let inputs = [1u64, 2, 3, 4, 5].map(Fr::from);
        let hash = poseidon5(&inputs).unwrap();
        assert_eq!(
            fr_to_biguint(&hash).to_string(),
            "6183221330272524995739186171720101788151706631170188140075976616310159254464"
        );
    }

    #[test]
    fn test_edfr_conversion_reduces() {
        let value = &*SUB_ORDER + 5u32;
        assert_eq!(edfr_to_biguint(&biguint_to_edfr(&value)), BigUint::from(5u32));

        let small = BigUint::from(123456789u64);
        assert_eq!(edfr_to_biguint(&biguint_to_edfr(&small)), small);
    }

    #[test]
    fn test_biguint_to_bytes_le_pads() {
        assert_eq!(biguint_to_bytes_le(&BigUint::from(1234u32), 4), vec![0xd2, 0x04, 0, 0]);
        assert_eq!(biguint_to_bytes_le(&BigUint::from(0u32), 32), vec![0u8; 32]);

        let fq = biguint_to_fr(&BigUint::from(9u32));
        assert_eq!(biguint_to_bytes_le(&fr_to_biguint(&fq), 32)[0], 9);
    }
}
