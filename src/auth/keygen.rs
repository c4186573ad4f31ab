use rand::{rngs::OsRng, RngCore};

/// Secrets are 24 random bytes, rendered as 48 lowercase hex characters.
const SECRET_BYTES: usize = 24;

/// Number of trailing characters left visible in the masked display form.
const MASK_VISIBLE_CHARS: usize = 6;

const MASK_MARKER: &str = "***";

/// Generates a fresh key secret from the OS CSPRNG.
///
/// Uniqueness is probabilistic from the 192 bits of entropy; the store's
/// unique index turns the (practically impossible) collision into an insert
/// error rather than silently overwriting a key.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Display form of a secret: marker plus the last six characters, or the
/// marker alone when the secret is too short to keep any part hidden.
pub fn mask_secret(secret: &str) -> String {
    if secret.len() > MASK_VISIBLE_CHARS {
        format!("{}{}", MASK_MARKER, &secret[secret.len() - MASK_VISIBLE_CHARS..])
    } else {
        MASK_MARKER.to_string()
    }
}
