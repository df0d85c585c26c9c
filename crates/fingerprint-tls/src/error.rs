//! TLS module error type, covering the ways a constructed spec can be
//! internally inconsistent.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TlsError {
    #[error("cipher suite list is empty")]
    EmptyCipherList,
    #[error("extension list is empty")]
    EmptyExtensionList,
    #[error("invalid TLS version range: min 0x{min:04x} > max 0x{max:04x}")]
    InvalidVersionRange { min: u16, max: u16 },
}

pub type Result<T> = std::result::Result<T, TlsError>;
