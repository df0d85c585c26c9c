//! # fingerprint-tls
//!
//! TLS ClientHello signature derivation: plain-data `ClientHelloSpec`s per
//! `{browser, major_version}`, bounded cipher shuffling, and JA3/JA4
//! fingerprint computation via `fingerprint-core`.
//!
//! This crate never performs an actual TLS handshake; nothing in this
//! workspace opens a socket, so no handshake serialization or crypto
//! backend is needed.

pub mod error;
pub mod spec;
pub mod templates;

pub use error::{Result, TlsError};
pub use spec::{chromium_template, firefox_template, safari_template, ClientHelloSpec};
pub use templates::{shuffle_ciphers, template_for, validate};
