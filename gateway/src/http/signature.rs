use ed25519_dalek::{PublicKey, Signature, Verifier};

/// Whether `signature` is a valid detached Ed25519 signature over the
/// concatenation `timestamp || body`. Verification failure is an answer,
/// not an error.
pub fn verify(public_key: &PublicKey, signature: &Signature, timestamp: &str, body: &[u8]) -> bool {
    let message: Vec<u8> = timestamp
        .as_bytes()
        .iter()
        .copied()
        .chain(body.iter().copied())
        .collect();

    public_key.verify(&message, signature).is_ok()
}
