pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    #[error("Key derivation needs a non empty password")]
    EmptyPassword,

    #[error("Sealed data is truncated: {len} bytes, at least {min} expected")]
    TruncatedData { len: usize, min: usize },

    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),
}
