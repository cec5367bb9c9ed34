//! Error types for the share codec and legacy migration.

use easel_motion_core::MotionError;
use thiserror::Error;

use crate::keys::ShareKey;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share string too short ({0} chars)")]
    TooShort(usize),
    #[error("invalid version character '{0}'")]
    InvalidVersion(char),
    #[error("unsupported share version {0}")]
    UnsupportedVersion(u8),
    #[error("share string corrupted (checksum {actual}, expected {expected})")]
    Corrupted { expected: u16, actual: u16 },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("unknown share key '{0}'")]
    UnknownKey(char),
    #[error("invalid value '{token}' for {key}")]
    InvalidValue { key: ShareKey, token: String },
    #[error("invalid legacy value '{value}' for {key}")]
    Legacy { key: String, value: String },
    #[error(transparent)]
    Motion(#[from] MotionError),
}
