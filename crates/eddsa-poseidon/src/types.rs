use crate::error::EdDSAError;
use crate::input::{point_from_coordinates, BigNumberish};
use baby_jubjub::{fr_to_biguint, EdwardsAffine};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Signature structure for EdDSA-Poseidon
///
/// Serializes as `{"R8": [x, y], "S": s}` with every number as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SerializedSignature", try_from = "SerializedSignature")]
pub struct Signature {
    /// Commitment point R8 = r * Base8
    pub r8: EdwardsAffine,
    /// Response scalar S = r + hm * s (mod l)
    pub s: BigUint,
}

/// A curve point as `[x, y]` decimal strings.
pub type SerializedPoint = [String; 2];

/// JSON-safe form of a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedSignature {
    #[serde(rename = "R8")]
    pub r8: SerializedPoint,
    #[serde(rename = "S")]
    pub s: String,
}

/// Supported hashing algorithms for key derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    /// BLAKE-512, the original SHA-3 finalist; matches circomlib and zk-kit
    #[default]
    Blake512,
    /// BLAKE2b-512
    Blake2b,
}

/// Coordinates of a point as decimal strings.
pub fn point_to_decimal(point: &EdwardsAffine) -> SerializedPoint {
    [
        fr_to_biguint(&point.x).to_string(),
        fr_to_biguint(&point.y).to_string(),
    ]
}

impl Signature {
    pub fn to_serialized(&self) -> SerializedSignature {
        SerializedSignature {
            r8: point_to_decimal(&self.r8),
            s: self.s.to_string(),
        }
    }
}

impl From<Signature> for SerializedSignature {
    fn from(signature: Signature) -> Self {
        signature.to_serialized()
    }
}

impl From<&Signature> for SerializedSignature {
    fn from(signature: &Signature) -> Self {
        signature.to_serialized()
    }
}

impl TryFrom<SerializedSignature> for Signature {
    type Error = EdDSAError;

    fn try_from(serialized: SerializedSignature) -> Result<Self, Self::Error> {
        Signature::try_from(&serialized)
    }
}

impl TryFrom<&SerializedSignature> for Signature {
    type Error = EdDSAError;

    /// Parses the numbers; curve membership and the range of `S` are left to verification.
    fn try_from(serialized: &SerializedSignature) -> Result<Self, Self::Error> {
        let [x, y] = &serialized.r8;
        let r8 = point_from_coordinates(
            &BigNumberish::from(x.as_str()),
            &BigNumberish::from(y.as_str()),
        )
        .ok_or_else(|| EdDSAError::InvalidSignature(format!("malformed R8 [{}, {}]", x, y)))?;

        let s = BigNumberish::from(serialized.s.as_str())
            .to_biguint()
            .ok_or_else(|| EdDSAError::InvalidSignature(format!("malformed S {}", serialized.s)))?;

        Ok(Signature { r8, s })
    }
}
