use crate::error::VeilError;

pub type Result<T> = std::result::Result<T, VeilError>;
