//! Test vector generator for EdDSA-Poseidon
//!
//! Vectors are written as JSON with every number as a decimal string, so they can be
//! compared against other implementations byte for byte.

use baby_jubjub::{fr_to_biguint, EdwardsAffine};
use eddsa_poseidon::{HashingAlgorithm, Signature};
use serde::{Deserialize, Serialize};

/// Point on the Baby Jubjub curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointJson {
    pub x: String,
    pub y: String,
}

impl From<&EdwardsAffine> for PointJson {
    fn from(point: &EdwardsAffine) -> Self {
        PointJson {
            x: fr_to_biguint(&point.x).to_string(),
            y: fr_to_biguint(&point.y).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureJson {
    pub r8: PointJson,
    pub s: String,
}

impl From<&Signature> for SignatureJson {
    fn from(signature: &Signature) -> Self {
        SignatureJson {
            r8: PointJson::from(&signature.r8),
            s: signature.s.to_string(),
        }
    }
}

/// EdDSA-Poseidon test vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdDSAPoseidonTestVector {
    pub name: String,
    pub description: String,
    pub vector_type: String,
    pub data: EdDSAData,
}

// Untagged: the variant with more fields goes first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdDSAData {
    SignVerify {
        private_key: String,
        private_key_bytes: String,
        algorithm: HashingAlgorithm,
        message: String,
        public_key: PointJson,
        signature: SignatureJson,
        valid: bool,
    },
    DerivePublicKey {
        private_key: String,
        private_key_bytes: String,
        algorithm: HashingAlgorithm,
        secret_scalar: String,
        public_key: PointJson,
        packed_public_key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use baby_jubjub::base8;

    #[test]
    fn test_point_json_uses_decimal_coordinates() {
        let point = PointJson::from(&base8());
        assert_eq!(
            point.x,
            "5299619240641551281634865583518297030282874472190772894086521144482721001553"
        );
        assert_eq!(
            point.y,
            "16950150798460657717958625567821834550301663161624707787222815936182638968203"
        );
    }

    #[test]
    fn test_untagged_data_picks_variant() {
        let json = serde_json::json!({
            "private_key": "secret",
            "private_key_bytes": "736563726574",
            "algorithm": "blake2b",
            "secret_scalar": "1",
            "public_key": { "x": "0", "y": "1" },
            "packed_public_key": "1"
        });
        let data: EdDSAData = serde_json::from_value(json).unwrap();
        assert!(matches!(
            data,
            EdDSAData::DerivePublicKey {
                algorithm: HashingAlgorithm::Blake2b,
                ..
            }
        ));
    }
}
