//! # Payload sealing
//! Password based key derivation and authenticated encryption for `pixelveil-core`.
//!
//! Keys are the SHA-256 digest of the password, so the same password always yields
//! the same key. Data is sealed with XChaCha20Poly1305. The nonce is synthesized from
//! the key and the plaintext, which makes sealing deterministic: the same password and
//! plaintext always produce the same token.
//!
//! Token layout: `ciphertext || tag (16) || nonce (24)`

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::SealError;

pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

/// Bytes a token carries on top of the plaintext: auth tag + nonce
pub const SEAL_OVERHEAD: usize = TAG_LEN + NONCE_LEN;

const NONCE_DOMAIN: &[u8] = b"pixelveil-nonce";

pub type Result<T> = std::result::Result<T, SealError>;
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// derive the symmetric key for a password, it fails for an empty password
pub fn derive_key(password: &str) -> Result<Key> {
    if password.is_empty() {
        return Err(SealError::EmptyPassword);
    }
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&Sha256::digest(password.as_bytes()));

    Ok(key)
}

/// encrypt data with password, it uses SHA-256 for key derivation and XChaCha20Poly1305 for encryption
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(password)?;
    let nonce = synthesize_nonce(&key, data);

    let encryptor = XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&key[..]));
    let mut cipher_data = encryptor
        .encrypt(XNonce::from_slice(&nonce[..]), data)
        .map_err(SealError::EncryptionError)?;
    cipher_data.extend_from_slice(&nonce[..]);

    Ok(cipher_data)
}

/// decrypt data with password, fails on a wrong password as well as on truncated or tampered data
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < SEAL_OVERHEAD {
        return Err(SealError::TruncatedData {
            len: data.len(),
            min: SEAL_OVERHEAD,
        });
    }
    let key = derive_key(password)?;
    let (cipher_data, nonce) = data.split_at(data.len() - NONCE_LEN);

    let decryptor = XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&key[..]));
    decryptor
        .decrypt(XNonce::from_slice(nonce), cipher_data)
        .map_err(SealError::DecryptionError)
}

/// size of a token sealing `plain_len` bytes
pub const fn sealed_len(plain_len: usize) -> usize {
    plain_len + SEAL_OVERHEAD
}

fn synthesize_nonce(key: &Key, data: &[u8]) -> Zeroizing<[u8; NONCE_LEN]> {
    let digest = Sha256::new()
        .chain_update(NONCE_DOMAIN)
        .chain_update(&key[..])
        .chain_update(data)
        .finalize();

    let mut nonce = Zeroizing::new([0u8; NONCE_LEN]);
    nonce.copy_from_slice(&digest[..NONCE_LEN]);
    nonce
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_is_deterministic() {
        let a = derive_key("hunter42").unwrap();
        let b = derive_key("hunter42").unwrap();
        let c = derive_key("hunter43").unwrap();

        assert_eq!(*a, *b);
        assert_ne!(*a, *c);
        assert_ne!(*a, [0u8; KEY_LEN]);
    }

    #[test]
    fn test_empty_password_is_rejected() {
        assert!(matches!(derive_key(""), Err(SealError::EmptyPassword)));
        assert!(matches!(
            encrypt_data("", b"data"),
            Err(SealError::EmptyPassword)
        ));
    }

    #[test]
    fn test_encryption_round_trip() {
        let password = "resistance is futile";
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

        let cipher_data = encrypt_data(password, data).unwrap();
        let decipher_data = decrypt_data(password, &cipher_data).unwrap();

        assert_ne!(data, cipher_data.as_slice());
        assert_eq!(cipher_data.len(), sealed_len(data.len()));
        assert_eq!(data, decipher_data.as_slice());
    }

    #[test]
    fn test_encryption_is_deterministic() {
        let first = encrypt_data("Secret42", b"Hello World$$END$$").unwrap();
        let second = encrypt_data("Secret42", b"Hello World$$END$$").unwrap();
        let other = encrypt_data("Secret42", b"Hello World!$$END$$").unwrap();

        assert_eq!(first, second);
        assert_ne!(first[first.len() - NONCE_LEN..], other[other.len() - NONCE_LEN..]);
    }

    #[test]
    fn test_wrong_password_fails() {
        let cipher_data = encrypt_data("Secret42", b"Hello World").unwrap();

        assert!(matches!(
            decrypt_data("Secret43", &cipher_data),
            Err(SealError::DecryptionError(_))
        ));
    }

    #[test]
    fn test_tampered_and_truncated_data_fails() {
        let mut cipher_data = encrypt_data("Secret42", b"Hello World").unwrap();
        cipher_data[0] ^= 0x01;
        assert!(matches!(
            decrypt_data("Secret42", &cipher_data),
            Err(SealError::DecryptionError(_))
        ));

        assert!(matches!(
            decrypt_data("Secret42", &cipher_data[..10]),
            Err(SealError::TruncatedData { len: 10, .. })
        ));
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let cipher_data = encrypt_data("Secret42", b"").unwrap();
        assert_eq!(cipher_data.len(), SEAL_OVERHEAD);
        assert!(decrypt_data("Secret42", &cipher_data).unwrap().is_empty());
    }
}
