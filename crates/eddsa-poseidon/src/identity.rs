use crate::eddsa::{
    derive_public_key, derive_secret_scalar, pack_public_key, sign_message, verify_signature,
};
use crate::error::Result;
use crate::input::{BigNumberish, PrivateKey, SignatureLike};
use crate::types::{HashingAlgorithm, Signature};
use baby_jubjub::EdwardsAffine;
use num_bigint::BigUint;
use rand::Rng;
use std::fmt;

/// A private key bundled with everything derived from it.
///
/// Derivations run once in the constructor; the value is immutable afterwards and can be
/// shared across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct EdDSAPoseidon {
    private_key: Vec<u8>,
    secret_scalar: BigUint,
    public_key: EdwardsAffine,
    packed_public_key: BigUint,
    algorithm: HashingAlgorithm,
}

impl EdDSAPoseidon {
    /// Creates a new identity from a private key.
    pub fn new(private_key: impl Into<PrivateKey>, algorithm: HashingAlgorithm) -> Result<Self> {
        let private_key = private_key.into().to_bytes()?;

        let secret_scalar = derive_secret_scalar(private_key.as_slice(), algorithm)?;
        let public_key = derive_public_key(private_key.as_slice(), algorithm)?;
        let packed_public_key = pack_public_key(&public_key)?;

        Ok(EdDSAPoseidon {
            private_key,
            secret_scalar,
            public_key,
            packed_public_key,
            algorithm,
        })
    }

    /// Creates an identity from 32 random bytes.
    pub fn random(algorithm: HashingAlgorithm) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let mut key = [0u8; 32];
        rng.fill(&mut key[..]);
        Self::new(key, algorithm)
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    pub fn public_key(&self) -> &EdwardsAffine {
        &self.public_key
    }

    pub fn packed_public_key(&self) -> &BigUint {
        &self.packed_public_key
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    /// Signs a message using the private key.
    pub fn sign(&self, message: impl Into<BigNumberish>) -> Result<Signature> {
        sign_message(self.private_key.as_slice(), message, self.algorithm)
    }

    /// Verifies a signature against a message using the public key.
    pub fn verify(
        &self,
        message: impl Into<BigNumberish>,
        signature: impl Into<SignatureLike>,
    ) -> bool {
        verify_signature(message, signature, &self.public_key)
    }
}

impl fmt::Debug for EdDSAPoseidon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdDSAPoseidon")
            .field("public_key", &self.public_key)
            .field("packed_public_key", &self.packed_public_key)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_eddsa_poseidon_struct() {
        let eddsa = EdDSAPoseidon::new(b"secret", HashingAlgorithm::Blake512).unwrap();

        assert_eq!(eddsa.private_key(), b"secret");
        assert_eq!(
            *eddsa.secret_scalar(),
            derive_secret_scalar(b"secret", HashingAlgorithm::Blake512).unwrap()
        );
        assert_eq!(
            *eddsa.public_key(),
            derive_public_key(b"secret", HashingAlgorithm::Blake512).unwrap()
        );
        assert_eq!(
            *eddsa.packed_public_key(),
            pack_public_key(eddsa.public_key()).unwrap()
        );
        assert_eq!(
            eddsa.packed_public_key().to_string(),
            "71647762580453188026411273540262989000109300460636685930164030286654463054111"
        );
        assert_eq!(eddsa.algorithm(), HashingAlgorithm::Blake512);
    }

    #[test]
    fn test_cached_values_match_free_functions() {
        let key = "0x0001020304050607080900010203040506070809000102030405060708090001";
        for algorithm in [HashingAlgorithm::Blake512, HashingAlgorithm::Blake2b] {
            let eddsa = EdDSAPoseidon::new(key, algorithm).unwrap();

            assert_eq!(*eddsa.public_key(), derive_public_key(key, algorithm).unwrap());
            assert_eq!(*eddsa.secret_scalar(), derive_secret_scalar(key, algorithm).unwrap());
            assert_eq!(
                *eddsa.packed_public_key(),
                pack_public_key(derive_public_key(key, algorithm).unwrap()).unwrap()
            );
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let eddsa = EdDSAPoseidon::new(b"secret", HashingAlgorithm::Blake512).unwrap();

        let signature = eddsa.sign(2u64).unwrap();
        assert_eq!(
            signature.s.to_string(),
            "748801147641622845252929577587733662985434924064971204447962797530500910400"
        );
        assert!(eddsa.verify(2u64, &signature));
        assert!(!eddsa.verify(3u64, &signature));
    }

    #[test]
    fn test_blake2b_identity() {
        let eddsa = EdDSAPoseidon::new("0x736563726574", HashingAlgorithm::Blake2b).unwrap();
        assert_eq!(
            eddsa.packed_public_key().to_string(),
            "10645470191020419557690687325712534989121808812858523172351115113114214534646"
        );

        let signature = eddsa.sign("2").unwrap();
        assert!(eddsa.verify(2u64, signature));
    }

    #[test]
    fn test_rejects_other_identity_signature() {
        let alice = EdDSAPoseidon::new(b"alice", HashingAlgorithm::Blake512).unwrap();
        let bob = EdDSAPoseidon::new(b"bob", HashingAlgorithm::Blake512).unwrap();

        let signature = alice.sign(42u64).unwrap();
        assert!(alice.verify(42u64, &signature));
        assert!(!bob.verify(42u64, &signature));
    }

    #[test]
    fn test_construction_fails_for_invalid_key() {
        assert!(EdDSAPoseidon::new(Vec::new(), HashingAlgorithm::Blake512).is_err());
        assert!(EdDSAPoseidon::new("not a key", HashingAlgorithm::Blake512).is_err());
    }

    #[test]
    fn test_random_identity() {
        let a = EdDSAPoseidon::random(HashingAlgorithm::Blake512).unwrap();
        let b = EdDSAPoseidon::random(HashingAlgorithm::Blake512).unwrap();

        assert_eq!(a.private_key().len(), 32);
        assert_ne!(a.public_key(), b.public_key());

        let signature = a.sign(7u64).unwrap();
        assert!(a.verify(7u64, &signature));
    }

    #[test]
    fn test_debug_redacts_private_material() {
        let eddsa = EdDSAPoseidon::new(b"secret", HashingAlgorithm::Blake512).unwrap();
        let debug = format!("{:?}", eddsa);

        assert!(debug.contains("packed_public_key"));
        assert!(!debug.contains("private_key:"));
        assert!(!debug.contains(&eddsa.secret_scalar().to_string()));
    }

    #[test]
    fn test_shared_across_threads() {
        let eddsa = Arc::new(EdDSAPoseidon::new(b"secret", HashingAlgorithm::Blake512).unwrap());

        let handles: Vec<_> = (0u64..4)
            .map(|message| {
                let eddsa = Arc::clone(&eddsa);
                thread::spawn(move || {
                    let signature = eddsa.sign(message).unwrap();
                    eddsa.verify(message, &signature)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
