//! # fingerprint-headers
//!
//! Derives the standard HTTP request headers a sampled browser would
//! send for a given request/resource type: Accept/Accept-Language/
//! Accept-Encoding, Sec-Fetch-*, Client Hints, DNT, plus the HTTP/2 settings
//! and header-order tables those requests ride on.
//!
//! User-agent composition lives in `fingerprint-profiles` (it's the
//! base-profile builder's job, not this crate's), so this crate takes plain
//! primitive parameters rather than a shared `Fingerprint` type, keeping it
//! decoupled from the profile builder.

pub mod headers;
pub mod http2;

pub use headers::{generate_headers, HTTPHeaders, HeaderOptions, HttpVersion, RequestType, ResourceType};
pub use http2::{http2_settings, Http2SettingId, Http2Settings};
