use byteorder::ReadBytesExt;
use std::io::{ErrorKind, Read};

use crate::error::VeilError;
use crate::result::Result;
use crate::universal_encoder::lift_io_error;

/// Marks the end of a message
pub const END_DELIMITER: &str = "$$END$$";
/// Marks the end of the transform domain half of a split hybrid message
pub const DWT_DELIMITER: &str = "$$DWT$$";
/// Marks the end of the pixel domain half of a split hybrid message
pub const LSB_DELIMITER: &str = "$$LSB$$";

pub trait PayloadEncoder {
    /// frames a message into the bytes that go into the carrier
    fn encode(&self, message: &str) -> Result<Vec<u8>>;

    /// number of bytes [`PayloadEncoder::encode`] produces for a message of `message_len` bytes
    fn encoded_size(&self, message_len: usize) -> usize;
}

pub trait PayloadDecoder {
    /// reads one framed message from a carrier that holds at most `capacity` bytes
    fn decode(&self, content: &mut dyn Read, capacity: usize) -> Result<String>;
}

pub trait PayloadCodec: PayloadEncoder + PayloadDecoder {}

/// Unencrypted framing: `message || delimiter`, no header.
///
/// Decoding scans byte by byte and stops as soon as the bytes read so far end with the
/// delimiter, hence a message must not contain the delimiter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainPayloadCodec {
    pub delimiter: &'static str,
}

impl PlainPayloadCodec {
    pub fn new(delimiter: &'static str) -> Self {
        Self { delimiter }
    }
}

impl Default for PlainPayloadCodec {
    fn default() -> Self {
        Self::new(END_DELIMITER)
    }
}

impl PayloadEncoder for PlainPayloadCodec {
    fn encode(&self, message: &str) -> Result<Vec<u8>> {
        if message.contains(self.delimiter) {
            return Err(VeilError::MessageContainsDelimiter(self.delimiter));
        }
        let mut buffer = Vec::with_capacity(self.encoded_size(message.len()));
        buffer.extend_from_slice(message.as_bytes());
        buffer.extend_from_slice(self.delimiter.as_bytes());

        Ok(buffer)
    }

    fn encoded_size(&self, message_len: usize) -> usize {
        message_len + self.delimiter.len()
    }
}

impl PayloadDecoder for PlainPayloadCodec {
    fn decode(&self, content: &mut dyn Read, capacity: usize) -> Result<String> {
        let delimiter = self.delimiter.as_bytes();
        let mut buffer = Vec::with_capacity(capacity.min(4096));

        loop {
            match content.read_u8() {
                Ok(b) => buffer.push(b),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(VeilError::DelimiterNotFound)
                }
                Err(e) => return Err(lift_io_error(e)),
            }
            if buffer.ends_with(delimiter) {
                buffer.truncate(buffer.len() - delimiter.len());
                return Ok(String::from_utf8(buffer)?);
            }
        }
    }
}

impl PayloadCodec for PlainPayloadCodec {}
