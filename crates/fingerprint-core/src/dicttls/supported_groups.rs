//! TLS supported group (elliptic curve) constants.
//!
//! Source: <https://www.iana.org/assignments/tls-parameters/tls-parameters.xhtml#tls-parameters-8>

#[allow(clippy::module_inception)]
pub mod supported_groups {
    pub const SECP256R1: u16 = 0x0017; // 23
    pub const SECP384R1: u16 = 0x0018; // 24
    pub const SECP521R1: u16 = 0x0019; // 25
    pub const X25519: u16 = 0x001d; // 29
    pub const X448: u16 = 0x001a; // 30

    pub const GREASE_PLACEHOLDER: u16 = 0x0a0a;
}

pub use supported_groups::*;

pub type CurveID = u16;

pub const CURVE_P256: u16 = supported_groups::SECP256R1;
pub const CURVE_P384: u16 = supported_groups::SECP384R1;
pub const X25519: u16 = supported_groups::X25519;
/// Post-quantum hybrid key share introduced in Chrome 133.
pub const X25519_MLKEM768: u16 = 0x6399;
