//! Input normalization.
//!
//! Every public entry point converts its arguments through one of these types.

use crate::error::{EdDSAError, Result};
use crate::types::{SerializedPoint, SerializedSignature, Signature};
use baby_jubjub::{biguint_to_fr, EdwardsAffine, SNARK_FIELD_SIZE};
use num_bigint::BigUint;
use num_traits::Num;
use serde_json::Value;

/// Longest private key accepted, in bytes.
pub const PRIVATE_KEY_MAX_LEN: usize = 32;

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

/// Parses decimal digits or `0x`-prefixed hex digits. Signs, whitespace and `_` are rejected.
fn parse_big_number(text: &str) -> Option<BigUint> {
    let (digits, radix) = match strip_hex_prefix(text) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::from_str_radix(digits, radix).ok()
}

/// An integer given natively or as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumberish {
    Integer(BigUint),
    /// Decimal, or hexadecimal with a `0x` prefix
    Text(String),
}

impl BigNumberish {
    /// The integer value, or `None` if the text is not a decimal or `0x` hex number.
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self {
            BigNumberish::Integer(value) => Some(value.clone()),
            BigNumberish::Text(text) => parse_big_number(text),
        }
    }
}

impl From<BigUint> for BigNumberish {
    fn from(value: BigUint) -> Self {
        BigNumberish::Integer(value)
    }
}

impl From<&BigUint> for BigNumberish {
    fn from(value: &BigUint) -> Self {
        BigNumberish::Integer(value.clone())
    }
}

impl From<u64> for BigNumberish {
    fn from(value: u64) -> Self {
        BigNumberish::Integer(BigUint::from(value))
    }
}

impl From<u32> for BigNumberish {
    fn from(value: u32) -> Self {
        BigNumberish::Integer(BigUint::from(value))
    }
}

impl From<&str> for BigNumberish {
    fn from(value: &str) -> Self {
        BigNumberish::Text(value.to_string())
    }
}

impl From<String> for BigNumberish {
    fn from(value: String) -> Self {
        BigNumberish::Text(value)
    }
}

impl From<&BigNumberish> for BigNumberish {
    fn from(value: &BigNumberish) -> Self {
        value.clone()
    }
}

impl TryFrom<&Value> for BigNumberish {
    type Error = EdDSAError;

    /// Accepts JSON strings and unsigned integers.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(BigNumberish::Text(text.clone())),
            Value::Number(number) => number
                .as_u64()
                .map(BigNumberish::from)
                .ok_or_else(|| EdDSAError::InvalidType(format!("{} is not an unsigned integer", number))),
            other => Err(EdDSAError::InvalidType(format!(
                "expected a number or a numeric string, got {}",
                other
            ))),
        }
    }
}

/// Normalizes a message to an integer below the Poseidon field modulus.
pub(crate) fn normalize_message(message: &BigNumberish) -> Result<BigUint> {
    let value = message
        .to_biguint()
        .ok_or_else(|| EdDSAError::InvalidMessage(format!("{:?} is not a number", message)))?;
    if value >= *SNARK_FIELD_SIZE {
        return Err(EdDSAError::InvalidMessage(
            "message must be smaller than the SNARK field size".to_string(),
        ));
    }
    Ok(value)
}

/// Builds a point from two coordinates, each of which must be a canonical field element.
pub(crate) fn point_from_coordinates(x: &BigNumberish, y: &BigNumberish) -> Option<EdwardsAffine> {
    let x = x.to_biguint().filter(|v| *v < *SNARK_FIELD_SIZE)?;
    let y = y.to_biguint().filter(|v| *v < *SNARK_FIELD_SIZE)?;
    Some(EdwardsAffine::new_unchecked(
        biguint_to_fr(&x),
        biguint_to_fr(&y),
    ))
}

/// A private key in one of its accepted encodings.
#[derive(Clone, PartialEq, Eq)]
pub enum PrivateKey {
    /// Raw bytes, hashed as given
    Bytes(Vec<u8>),
    /// Encoded as its minimal big-endian bytes
    Integer(BigUint),
    /// `0x`-prefixed hex bytes, or a decimal integer
    Text(String),
}

impl PrivateKey {
    /// The byte buffer fed to the key-derivation hash.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            PrivateKey::Bytes(bytes) => bytes.clone(),
            PrivateKey::Integer(value) => value.to_bytes_be(),
            PrivateKey::Text(text) => match strip_hex_prefix(text) {
                Some(hex_digits) => hex::decode(hex_digits).map_err(|e| {
                    EdDSAError::InvalidPrivateKey(format!("invalid hex encoding: {}", e))
                })?,
                None => parse_big_number(text)
                    .ok_or_else(|| {
                        EdDSAError::InvalidPrivateKey(
                            "text must be 0x-prefixed hex or a decimal integer".to_string(),
                        )
                    })?
                    .to_bytes_be(),
            },
        };

        if bytes.is_empty() || bytes.len() > PRIVATE_KEY_MAX_LEN {
            return Err(EdDSAError::InvalidPrivateKey(format!(
                "expected 1 to {} bytes, got {}",
                PRIVATE_KEY_MAX_LEN,
                bytes.len()
            )));
        }
        Ok(bytes)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl From<&[u8]> for PrivateKey {
    fn from(bytes: &[u8]) -> Self {
        PrivateKey::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for PrivateKey {
    fn from(bytes: &[u8; N]) -> Self {
        PrivateKey::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for PrivateKey {
    fn from(bytes: [u8; N]) -> Self {
        PrivateKey::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for PrivateKey {
    fn from(bytes: Vec<u8>) -> Self {
        PrivateKey::Bytes(bytes)
    }
}

impl From<&Vec<u8>> for PrivateKey {
    fn from(bytes: &Vec<u8>) -> Self {
        PrivateKey::Bytes(bytes.clone())
    }
}

impl From<BigUint> for PrivateKey {
    fn from(value: BigUint) -> Self {
        PrivateKey::Integer(value)
    }
}

impl From<&str> for PrivateKey {
    fn from(text: &str) -> Self {
        PrivateKey::Text(text.to_string())
    }
}

impl From<String> for PrivateKey {
    fn from(text: String) -> Self {
        PrivateKey::Text(text)
    }
}

/// A curve point in one of its accepted representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointLike {
    Affine(EdwardsAffine),
    Coordinates([BigNumberish; 2]),
    /// A JSON array `[x, y]` of numbers or numeric strings
    Json(Value),
}

impl PointLike {
    /// Parses the representation. Curve membership is not checked here.
    pub fn to_point(&self) -> Result<EdwardsAffine> {
        match self {
            PointLike::Affine(point) => Ok(*point),
            PointLike::Coordinates([x, y]) => point_from_coordinates(x, y).ok_or_else(|| {
                EdDSAError::InvalidPublicKey(
                    "coordinates must be field elements".to_string(),
                )
            }),
            PointLike::Json(value) => {
                let coordinates = value
                    .as_array()
                    .filter(|items| items.len() == 2)
                    .ok_or_else(|| {
                        EdDSAError::InvalidPublicKey(format!("expected [x, y], got {}", value))
                    })?;
                let coordinate = |value: &Value| {
                    BigNumberish::try_from(value)
                        .map_err(|e| EdDSAError::InvalidPublicKey(e.to_string()))
                };
                PointLike::Coordinates([coordinate(&coordinates[0])?, coordinate(&coordinates[1])?])
                    .to_point()
            }
        }
    }
}

impl From<EdwardsAffine> for PointLike {
    fn from(point: EdwardsAffine) -> Self {
        PointLike::Affine(point)
    }
}

impl From<&EdwardsAffine> for PointLike {
    fn from(point: &EdwardsAffine) -> Self {
        PointLike::Affine(*point)
    }
}

impl From<SerializedPoint> for PointLike {
    fn from([x, y]: SerializedPoint) -> Self {
        PointLike::Coordinates([BigNumberish::Text(x), BigNumberish::Text(y)])
    }
}

impl From<&SerializedPoint> for PointLike {
    fn from(point: &SerializedPoint) -> Self {
        PointLike::from(point.clone())
    }
}

impl From<[BigUint; 2]> for PointLike {
    fn from([x, y]: [BigUint; 2]) -> Self {
        PointLike::Coordinates([BigNumberish::Integer(x), BigNumberish::Integer(y)])
    }
}

impl From<(BigUint, BigUint)> for PointLike {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        PointLike::from([x, y])
    }
}

impl From<Value> for PointLike {
    fn from(value: Value) -> Self {
        PointLike::Json(value)
    }
}

/// A signature in one of its accepted representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureLike {
    Native(Signature),
    Serialized(SerializedSignature),
    /// A JSON object `{"R8": [x, y], "S": s}`
    Json(Value),
}

impl SignatureLike {
    /// Parses the representation. `R8` membership and the range of `S` are not checked here.
    pub fn to_signature(&self) -> Result<Signature> {
        match self {
            SignatureLike::Native(signature) => Ok(signature.clone()),
            SignatureLike::Serialized(serialized) => Signature::try_from(serialized),
            SignatureLike::Json(value) => {
                let object = value.as_object().ok_or_else(|| {
                    EdDSAError::InvalidSignature(format!("expected an object, got {}", value))
                })?;
                let (r8, s) = match (object.get("R8"), object.get("S")) {
                    (Some(r8), Some(s)) => (r8, s),
                    _ => {
                        return Err(EdDSAError::InvalidSignature(
                            "missing R8 or S".to_string(),
                        ))
                    }
                };

                let r8 = PointLike::Json(r8.clone())
                    .to_point()
                    .map_err(|e| EdDSAError::InvalidSignature(e.to_string()))?;
                let s = BigNumberish::try_from(s)
                    .ok()
                    .and_then(|s| s.to_biguint())
                    .ok_or_else(|| EdDSAError::InvalidSignature(format!("malformed S {}", s)))?;

                Ok(Signature { r8, s })
            }
        }
    }
}

impl From<Signature> for SignatureLike {
    fn from(signature: Signature) -> Self {
        SignatureLike::Native(signature)
    }
}

impl From<&Signature> for SignatureLike {
    fn from(signature: &Signature) -> Self {
        SignatureLike::Native(signature.clone())
    }
}

impl From<SerializedSignature> for SignatureLike {
    fn from(serialized: SerializedSignature) -> Self {
        SignatureLike::Serialized(serialized)
    }
}

impl From<Value> for SignatureLike {
    fn from(value: Value) -> Self {
        SignatureLike::Json(value)
    }
}
