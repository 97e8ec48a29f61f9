use std::fmt::Debug;

use super::*;
use crate::media::image::PolicyTag;

pub trait PayloadCodecFactory: Debug {
    fn create_codec(&self, tag: PolicyTag, delimiter: &'static str) -> Box<dyn PayloadCodec>;

    /// Returns the password if one is set
    fn password(&self) -> Option<&str> {
        None
    }
}

/// factory for unencrypted payloads, the policy tag is not written for them
#[derive(Debug, PartialEq, Eq)]
pub struct FabA;

impl PayloadCodecFactory for FabA {
    fn create_codec(&self, _tag: PolicyTag, delimiter: &'static str) -> Box<dyn PayloadCodec> {
        Box::new(PlainPayloadCodec::new(delimiter))
    }
}

/// picks the crypted factory for a non empty password and the plain one otherwise
pub fn payload_codec_factory(password: Option<&str>) -> Box<dyn PayloadCodecFactory> {
    match password.filter(|p| !p.is_empty()) {
        Some(password) => Box::new(FabS::new(password)),
        None => Box::new(FabA),
    }
}
