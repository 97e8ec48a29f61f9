use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read};
use zeroize::Zeroizing;

use pixelveil_seal::{decrypt_data, encrypt_data, sealed_len, SEAL_OVERHEAD};

use super::{PayloadCodec, PayloadCodecFactory, PayloadDecoder, PayloadEncoder};
use crate::error::VeilError;
use crate::media::image::PolicyTag;
use crate::result::Result;
use crate::universal_encoder::lift_io_error;

/// First bytes of every encrypted envelope
pub const ENVELOPE_MAGIC: [u8; 2] = *b"PV";
/// magic + policy tag + big endian `u32` token length
pub const ENVELOPE_HEADER_LEN: usize = ENVELOPE_MAGIC.len() + 1 + 4;

#[derive(Clone, PartialEq, Eq)]
pub struct FabS {
    password: Zeroizing<String>,
}

impl FabS {
    pub fn new<I: Into<String>>(password: I) -> Self {
        FabS {
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for FabS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FabS({})", "*".repeat(self.password.len()))
    }
}

impl PayloadCodecFactory for FabS {
    fn create_codec(&self, tag: PolicyTag, delimiter: &'static str) -> Box<dyn PayloadCodec> {
        Box::new(CryptedPayloadCodec::new(
            self.password.as_str(),
            tag,
            delimiter,
        ))
    }

    fn password(&self) -> Option<&str> {
        Some(self.password.as_str())
    }
}

/// Encrypted framing, the envelope is `b"PV" || tag || len: u32 BE || token[len]`
/// where the token seals `message || delimiter`.
///
/// The delimiter is verified with an exact suffix match after decryption, so the message
/// itself may contain it.
pub struct CryptedPayloadCodec {
    password: Zeroizing<String>,
    tag: PolicyTag,
    delimiter: &'static str,
}

impl CryptedPayloadCodec {
    pub fn new(password: &str, tag: PolicyTag, delimiter: &'static str) -> Self {
        Self {
            password: Zeroizing::new(password.to_string()),
            tag,
            delimiter,
        }
    }
}

impl PayloadEncoder for CryptedPayloadCodec {
    fn encode(&self, message: &str) -> Result<Vec<u8>> {
        let mut plain = Zeroizing::new(Vec::with_capacity(message.len() + self.delimiter.len()));
        plain.extend_from_slice(message.as_bytes());
        plain.extend_from_slice(self.delimiter.as_bytes());

        let token = encrypt_data(&self.password, &plain).map_err(VeilError::EncryptionFailed)?;
        let token_len = u32::try_from(token.len()).map_err(|_| VeilError::CapacityExceeded {
            required: token.len().saturating_mul(8),
            available: u32::MAX as usize,
        })?;

        let mut buffer = Vec::with_capacity(ENVELOPE_HEADER_LEN + token.len());
        buffer.extend_from_slice(&ENVELOPE_MAGIC);
        buffer.write_u8(self.tag.into())?;
        buffer.write_u32::<BigEndian>(token_len)?;
        buffer.extend_from_slice(&token);

        Ok(buffer)
    }

    fn encoded_size(&self, message_len: usize) -> usize {
        ENVELOPE_HEADER_LEN + sealed_len(message_len + self.delimiter.len())
    }
}

impl PayloadDecoder for CryptedPayloadCodec {
    fn decode(&self, content: &mut dyn Read, capacity: usize) -> Result<String> {
        let mut magic = [0u8; 2];
        content.read_exact(&mut magic).map_err(missing_frame)?;
        if magic != ENVELOPE_MAGIC {
            return Err(VeilError::DelimiterNotFound);
        }

        let found = content.read_u8().map_err(missing_frame)?;
        let found = PolicyTag::try_from(found).map_err(|_| VeilError::DelimiterNotFound)?;
        if found != self.tag {
            return Err(VeilError::PolicyMismatch {
                expected: self.tag,
                found,
            });
        }

        let len = content.read_u32::<BigEndian>().map_err(missing_frame)? as usize;
        let remaining = capacity.saturating_sub(ENVELOPE_HEADER_LEN);
        if !(SEAL_OVERHEAD..=remaining).contains(&len) {
            log::debug!("envelope announces {len} bytes, only {remaining} can be present");
            return Err(VeilError::DelimiterNotFound);
        }

        let mut token = vec![0u8; len];
        content.read_exact(&mut token).map_err(missing_frame)?;

        let plain = Zeroizing::new(
            decrypt_data(&self.password, &token).map_err(VeilError::DecryptionFailed)?,
        );
        let message = plain
            .strip_suffix(self.delimiter.as_bytes())
            .ok_or(VeilError::DelimiterNotFound)?;

        Ok(String::from_utf8(message.to_vec())?)
    }
}

impl PayloadCodec for CryptedPayloadCodec {}

fn missing_frame(e: std::io::Error) -> VeilError {
    if e.kind() == ErrorKind::UnexpectedEof {
        VeilError::DelimiterNotFound
    } else {
        lift_io_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::payload::{DWT_DELIMITER, END_DELIMITER};
    use std::io::Cursor;

    fn decode(codec: &CryptedPayloadCodec, data: Vec<u8>) -> Result<String> {
        let capacity = data.len();
        codec.decode(&mut Cursor::new(data), capacity)
    }

    #[test]
    fn should_frame_and_unframe_a_message() {
        let codec = CryptedPayloadCodec::new("Secret42", PolicyTag::LsbV1, END_DELIMITER);
        let data = codec.encode("Hello World").unwrap();

        assert_eq!(&data[..3], b"PV\x11");
        assert_eq!(data.len(), codec.encoded_size("Hello World".len()));
        assert_eq!(decode(&codec, data).unwrap(), "Hello World");
    }

    #[test]
    fn should_allow_the_delimiter_inside_of_the_message() {
        let codec = CryptedPayloadCodec::new("Secret42", PolicyTag::DwtV1, END_DELIMITER);
        let data = codec.encode("before $$END$$ after").unwrap();

        assert_eq!(decode(&codec, data).unwrap(), "before $$END$$ after");
    }

    #[test]
    fn should_fail_with_a_wrong_password() {
        let data = CryptedPayloadCodec::new("Secret42", PolicyTag::LsbV1, END_DELIMITER)
            .encode("Hello World")
            .unwrap();
        let codec = CryptedPayloadCodec::new("Secret43", PolicyTag::LsbV1, END_DELIMITER);

        assert!(matches!(
            decode(&codec, data),
            Err(VeilError::DecryptionFailed(_))
        ));
    }

    #[test]
    fn should_detect_a_policy_mismatch() {
        let data = CryptedPayloadCodec::new("Secret42", PolicyTag::LsbV1, END_DELIMITER)
            .encode("Hello World")
            .unwrap();
        let codec = CryptedPayloadCodec::new("Secret42", PolicyTag::DwtV1, END_DELIMITER);

        assert!(matches!(
            decode(&codec, data),
            Err(VeilError::PolicyMismatch {
                expected: PolicyTag::DwtV1,
                found: PolicyTag::LsbV1
            })
        ));
    }

    #[test]
    fn should_verify_the_delimiter_after_decryption() {
        let data = CryptedPayloadCodec::new("Secret42", PolicyTag::HybridSplitV1, DWT_DELIMITER)
            .encode("first half")
            .unwrap();
        let codec = CryptedPayloadCodec::new("Secret42", PolicyTag::HybridSplitV1, END_DELIMITER);

        assert!(matches!(
            decode(&codec, data),
            Err(VeilError::DelimiterNotFound)
        ));
    }

    #[test]
    fn should_reject_garbage_and_impossible_lengths() {
        let codec = CryptedPayloadCodec::new("Secret42", PolicyTag::LsbV1, END_DELIMITER);
        assert!(matches!(
            decode(&codec, vec![0xaa; 128]),
            Err(VeilError::DelimiterNotFound)
        ));

        let mut data = codec.encode("Hello World").unwrap();
        data[3..7].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(matches!(
            decode(&codec, data),
            Err(VeilError::DelimiterNotFound)
        ));

        let data = codec.encode("Hello World").unwrap();
        assert!(matches!(
            decode(&codec, data[..20].to_vec()),
            Err(VeilError::DelimiterNotFound)
        ));
    }
}
