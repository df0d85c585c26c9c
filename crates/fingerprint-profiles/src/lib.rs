//! # fingerprint-profiles
//!
//! Builds the base [`Fingerprint`] record from a sampled
//! `fingerprint_network::Assignment`: user-agent composition, screen/device
//! field derivation, and the base `fingerprint_hash`. Deliberately has no
//! dependency on fingerprint-headers/-tls/-canvas/-webgl/-audio/-fonts — the
//! facade crate nests this record alongside those modules' own outputs
//! rather than this crate depending back on them.

pub mod builder;
pub mod fingerprint;
pub mod useragent;

pub use builder::build_fingerprint;
pub use fingerprint::{
    BrowserInfo, DeviceInfo, Fingerprint, MultimediaDevices, PlatformInfo, PluginInfo,
    ScreenInfo, TimezoneInfo,
};
pub use useragent::compose_user_agent;
