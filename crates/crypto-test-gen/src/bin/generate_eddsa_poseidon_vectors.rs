use anyhow::{ensure, Result};
use crypto_test_gen::{EdDSAData, EdDSAPoseidonTestVector, PointJson, SignatureJson};
use eddsa_poseidon::{
    derive_public_key, derive_secret_scalar, pack_public_key, sign_message, verify_signature,
    HashingAlgorithm, PrivateKey,
};
use num_bigint::BigUint;
use std::fs;
use std::path::Path;

/// A private key as shown in the vector (`label`) and the bytes it normalizes to.
struct Key {
    label: String,
    bytes: Vec<u8>,
}

impl Key {
    fn new(label: impl Into<String>, key: impl Into<PrivateKey>) -> Result<Self> {
        Ok(Key {
            label: label.into(),
            bytes: key.into().to_bytes()?,
        })
    }
}

fn derive_vector(
    name: &str,
    description: &str,
    key: &Key,
    algorithm: HashingAlgorithm,
) -> Result<EdDSAPoseidonTestVector> {
    let secret_scalar = derive_secret_scalar(key.bytes.as_slice(), algorithm)?;
    let public_key = derive_public_key(key.bytes.as_slice(), algorithm)?;
    let packed_public_key = pack_public_key(&public_key)?;

    Ok(EdDSAPoseidonTestVector {
        name: name.to_string(),
        description: description.to_string(),
        vector_type: "derivePublicKey".to_string(),
        data: EdDSAData::DerivePublicKey {
            private_key: key.label.clone(),
            private_key_bytes: hex::encode(&key.bytes),
            algorithm,
            secret_scalar: secret_scalar.to_string(),
            public_key: PointJson::from(&public_key),
            packed_public_key: packed_public_key.to_string(),
        },
    })
}

/// Signs `message` and records the verification result against `verify_message`.
fn sign_verify_vector(
    name: &str,
    description: &str,
    key: &Key,
    algorithm: HashingAlgorithm,
    message: &BigUint,
    verify_message: &BigUint,
) -> Result<EdDSAPoseidonTestVector> {
    let public_key = derive_public_key(key.bytes.as_slice(), algorithm)?;
    let signature = sign_message(key.bytes.as_slice(), message, algorithm)?;
    let valid = verify_signature(verify_message, &signature, public_key);

    ensure!(
        valid == (message == verify_message),
        "unexpected verification result for {}",
        name
    );

    Ok(EdDSAPoseidonTestVector {
        name: name.to_string(),
        description: description.to_string(),
        vector_type: "signVerify".to_string(),
        data: EdDSAData::SignVerify {
            private_key: key.label.clone(),
            private_key_bytes: hex::encode(&key.bytes),
            algorithm,
            message: verify_message.to_string(),
            public_key: PointJson::from(&public_key),
            signature: SignatureJson::from(&signature),
            valid,
        },
    })
}

fn generate_vectors() -> Result<Vec<EdDSAPoseidonTestVector>> {
    let mut vectors = Vec::new();

    let blake512 = HashingAlgorithm::Blake512;
    let blake2b = HashingAlgorithm::Blake2b;

    let circomlib_hex = "0x0001020304050607080900010203040506070809000102030405060708090001";
    let circomlib = Key::new(circomlib_hex, circomlib_hex)?;
    let secret = Key::new("secret", b"secret")?;
    let short = Key::new("[3, 2]", [3u8, 2])?;
    let high_bit_value: BigUint = BigUint::from(1u32) << 255;
    let high_bit = Key::new(high_bit_value.to_string(), high_bit_value)?;

    let msg = |value: u64| BigUint::from(value);

    vectors.push(derive_vector(
        "derivePublicKey_circomlib_key",
        "Derive public key from the 32-byte circomlib test key",
        &circomlib,
        blake512,
    )?);
    vectors.push(sign_verify_vector(
        "signVerify_circomlib_key_message_1234",
        "Sign and verify message 1234 with the circomlib test key",
        &circomlib,
        blake512,
        &msg(1234),
        &msg(1234),
    )?);

    vectors.push(derive_vector(
        "derivePublicKey_string_secret",
        "Derive public key from private key string 'secret'",
        &secret,
        blake512,
    )?);
    for (name, description, message) in [
        (
            "signVerify_message_2",
            "Sign and verify message value 2 with private key 'secret'",
            msg(2),
        ),
        ("signVerify_message_22", "Sign and verify message value 22", msg(22)),
        (
            "signVerify_message_hex_0x12",
            "Sign and verify message 0x12 (18 in decimal)",
            msg(0x12),
        ),
        (
            "signVerify_message_string",
            "Sign and verify message string 'message' read as a big-endian integer",
            BigUint::from_bytes_be(b"message"),
        ),
    ] {
        vectors.push(sign_verify_vector(
            name,
            description,
            &secret,
            blake512,
            &message,
            &message,
        )?);
    }
    vectors.push(sign_verify_vector(
        "signVerify_wrong_message",
        "Signature over message 2 checked against message 3",
        &secret,
        blake512,
        &msg(2),
        &msg(3),
    )?);

    vectors.push(derive_vector(
        "derivePublicKey_uint8array_input",
        "Derive public key from byte input [3, 2]",
        &short,
        blake512,
    )?);

    vectors.push(derive_vector(
        "derivePublicKey_high_bit_key",
        "Derive public key from the 32-byte key 2^255",
        &high_bit,
        blake512,
    )?);
    vectors.push(sign_verify_vector(
        "signVerify_high_bit_key_message_2",
        "Sign and verify message 2 with the 32-byte key 2^255",
        &high_bit,
        blake512,
        &msg(2),
        &msg(2),
    )?);

    vectors.push(derive_vector(
        "derivePublicKey_blake2b_secret",
        "Derive public key from 'secret' with BLAKE2b key derivation",
        &secret,
        blake2b,
    )?);
    vectors.push(sign_verify_vector(
        "signVerify_blake2b_message_2",
        "Sign and verify message 2 with 'secret' and BLAKE2b key derivation",
        &secret,
        blake2b,
        &msg(2),
        &msg(2),
    )?);

    Ok(vectors)
}

fn main() -> Result<()> {
    println!("Generating EdDSA-Poseidon test vectors...");

    let vectors = generate_vectors()?;

    println!("Generated {} test vectors", vectors.len());

    // Fixtures live next to the crate that tests against them
    let output_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../eddsa-poseidon/test-vectors");
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("eddsa-poseidon-test-vectors.json");
    let json = serde_json::to_string_pretty(&vectors)?;
    fs::write(&output_path, json)?;

    println!("✓ Saved to: {}", output_path.display());
    println!("✓ EdDSA-Poseidon test vectors generated successfully!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKED_IN: &str =
        include_str!("../../../eddsa-poseidon/test-vectors/eddsa-poseidon-test-vectors.json");

    #[test]
    fn test_generated_vectors_match_checked_in_file() {
        let vectors = generate_vectors().unwrap();
        assert_eq!(serde_json::to_string_pretty(&vectors).unwrap(), CHECKED_IN);
    }

    #[test]
    fn test_high_bit_key_label_and_bytes() {
        let vectors = generate_vectors().unwrap();
        let vector = vectors
            .iter()
            .find(|v| v.name == "derivePublicKey_high_bit_key")
            .unwrap();

        match &vector.data {
            EdDSAData::DerivePublicKey {
                private_key,
                private_key_bytes,
                ..
            } => {
                assert_eq!(
                    private_key,
                    "57896044618658097711785492504343953926634992332820282019728792003956564819968"
                );
                assert_eq!(private_key_bytes, &format!("80{}", "00".repeat(31)));
            }
            other => panic!("unexpected data {:?}", other),
        }
    }
}
