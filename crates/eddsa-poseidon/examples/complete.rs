//! EdDSA-Poseidon Complete Example
//!
//! Walks through key derivation, signing, verification, public-key packing and the
//! accepted input encodings.
//!
//! Run with: cargo run --example complete

use eddsa_poseidon::{
    derive_public_key, derive_secret_scalar, pack_public_key, point_to_decimal, sign_message,
    unpack_public_key, verify_signature, BigUint, EdDSAPoseidon, HashingAlgorithm,
    SerializedSignature,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== EdDSA-Poseidon Example ===\n");

    // 1. Basic usage with a byte-string private key
    println!("1. Basic Usage:");
    let private_key = b"my-secret-key";
    let message = BigUint::from(12345u64);

    let public_key = derive_public_key(private_key, HashingAlgorithm::Blake512)?;
    println!("Private Key: \"my-secret-key\"");
    println!("Public Key: {:?}", point_to_decimal(&public_key));
    println!("Message: {}", message);

    let signature = sign_message(private_key, &message, HashingAlgorithm::Blake512)?;
    println!("Signature: {}", serde_json::to_string(&signature)?);

    let is_valid = verify_signature(&message, &signature, public_key);
    println!("Signature Valid: {}\n", is_valid);

    // 2. Using the EdDSAPoseidon identity
    println!("2. Using EdDSAPoseidon:");
    let eddsa = EdDSAPoseidon::new(b"another-secret-key", HashingAlgorithm::Blake512)?;
    println!("Public Key: {:?}", point_to_decimal(eddsa.public_key()));
    println!("Packed Public Key: {}", eddsa.packed_public_key());

    let message2 = BigUint::from_bytes_be(b"Hello, World!");
    let signature2 = eddsa.sign(&message2)?;
    println!("Message: \"Hello, World!\"");
    println!("Signature: {}", serde_json::to_string(&signature2)?);
    println!("Signature Valid: {}\n", eddsa.verify(&message2, &signature2));

    // 3. Pack/Unpack public key
    println!("3. Pack/Unpack Public Key:");
    let packed_public_key = pack_public_key(public_key)?;
    println!("Packed Public Key: {}", packed_public_key);

    let unpacked_public_key = unpack_public_key(packed_public_key.to_string())?;
    println!("Unpacked Public Key: {:?}", point_to_decimal(&unpacked_public_key));
    println!("Keys Match: {}\n", public_key == unpacked_public_key);

    // 4. Signatures as JSON
    println!("4. Signature Transport:");
    let serialized = SerializedSignature::from(&signature);
    let json = serde_json::to_value(&serialized)?;
    println!("Serialized: {}", json);
    println!("Valid From JSON: {}\n", verify_signature(&message, json, public_key));

    // 5. Different private key formats
    println!("5. Different Private Key Formats:");
    let pk1 = derive_public_key(b"string-key".to_vec(), HashingAlgorithm::Blake512)?;
    println!("Byte key public key: {:?}", point_to_decimal(&pk1));

    let pk2 = derive_public_key("0x0102030405", HashingAlgorithm::Blake512)?;
    let pk3 = derive_public_key([1u8, 2, 3, 4, 5], HashingAlgorithm::Blake512)?;
    println!("Hex and array keys agree: {}", pk2 == pk3);

    let pk4 = derive_public_key("4328719365", HashingAlgorithm::Blake512)?;
    let pk5 = derive_public_key(BigUint::from(4328719365u64), HashingAlgorithm::Blake512)?;
    println!("Decimal and integer keys agree: {}\n", pk4 == pk5);

    // 6. Different message formats
    println!("6. Different Message Formats:");
    let test_private_key = b"test-key";
    let test_public_key = derive_public_key(test_private_key, HashingAlgorithm::Blake512)?;

    let sig1 = sign_message(test_private_key, 999u64, HashingAlgorithm::Blake512)?;
    println!(
        "Integer message Valid: {}",
        verify_signature(999u64, &sig1, test_public_key)
    );

    let sig2 = sign_message(test_private_key, "42", HashingAlgorithm::Blake512)?;
    println!(
        "Decimal message Valid: {}",
        verify_signature("42", &sig2, test_public_key)
    );

    let sig3 = sign_message(test_private_key, "0x1234", HashingAlgorithm::Blake512)?;
    println!(
        "Hex message Valid: {}\n",
        verify_signature(0x1234u64, &sig3, test_public_key)
    );

    // 7. Secret scalar derivation
    println!("7. Secret Scalar:");
    let secret_scalar = derive_secret_scalar(private_key, HashingAlgorithm::Blake512)?;
    println!("Secret Scalar: {}\n", secret_scalar);

    // 8. Random key generation
    println!("8. Random Key Generation:");
    let random_eddsa = EdDSAPoseidon::random(HashingAlgorithm::Blake512)?;
    println!("Random Identity: {:?}", random_eddsa);
    let random_sig = random_eddsa.sign(98765u64)?;
    println!(
        "Random Key Signature Valid: {}\n",
        random_eddsa.verify(98765u64, &random_sig)
    );

    // 9. Blake2b key derivation
    println!("9. Testing Blake2b Algorithm:");
    let eddsa_blake2b = EdDSAPoseidon::new(b"blake2b-test", HashingAlgorithm::Blake2b)?;
    let blake2b_sig = eddsa_blake2b.sign(54321u64)?;
    println!(
        "Blake2b Signature Valid: {}\n",
        eddsa_blake2b.verify(54321u64, &blake2b_sig)
    );

    println!("=== Example Complete ===");

    Ok(())
}
