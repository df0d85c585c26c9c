//! Plain-data `ClientHelloSpec`: the cipher suite, extension, curve,
//! point-format, ALPN, and signature-algorithm lists a ClientHello would
//! advertise, in wire order. Only the values matter here — JA3/JA4 hash
//! them directly, and no actual handshake bytes are ever serialized.

use fingerprint_core::dicttls::{
    cipher_suites as cs, signature_schemes as ss, supported_groups as sg,
};

pub const VERSION_TLS12: u16 = 0x0303;
pub const VERSION_TLS13: u16 = 0x0304;
pub const COMPRESSION_NONE: u8 = 0x00;
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0x00;

/// Extension type IDs in wire order, GREASE entries included where the
/// template places them (first and, for Chrome, also last).
#[derive(Debug, Clone)]
pub struct ClientHelloSpec {
    pub tls_vers_min: u16,
    pub tls_vers_max: u16,
    pub cipher_suites: Vec<u16>,
    pub compression_methods: Vec<u8>,
    pub extensions: Vec<u16>,
    pub curves: Vec<u16>,
    pub point_formats: Vec<u8>,
    pub alpn_protocols: Vec<String>,
    pub signature_algorithms: Vec<u16>,
}

impl ClientHelloSpec {
    /// Compute this spec's JA3 fingerprint.
    pub fn ja3(&self) -> fingerprint_core::JA3 {
        fingerprint_core::JA3::generate(
            self.tls_vers_max,
            &self.cipher_suites,
            &self.extensions,
            &self.curves,
            &self.point_formats,
        )
    }

    /// Compute this spec's JA4 fingerprint.
    pub fn ja4(&self) -> fingerprint_core::JA4 {
        let version = if self.tls_vers_max >= VERSION_TLS13 {
            "1.3"
        } else {
            "1.2"
        };
        let alpn = self.alpn_protocols.first().map(String::as_str);
        fingerprint_core::JA4::generate(
            't',
            version,
            true,
            &self.cipher_suites,
            &self.extensions,
            alpn,
            &self.signature_algorithms,
        )
    }
}

/// Chrome/Edge/Opera share a Chromium TLS stack: GREASE-first cipher list,
/// the post-quantum `X25519_MLKEM768` key share from Chrome 131 onward,
/// ALPS (`ApplicationSettings`) and certificate compression extensions.
pub fn chromium_template(major_version: u32) -> ClientHelloSpec {
    let mut curves = vec![sg::GREASE_PLACEHOLDER];
    if major_version >= 131 {
        curves.push(sg::X25519_MLKEM768);
    }
    curves.extend([sg::X25519, sg::CURVE_P256, sg::CURVE_P384]);

    ClientHelloSpec {
        tls_vers_min: VERSION_TLS12,
        tls_vers_max: VERSION_TLS13,
        cipher_suites: vec![
            cs::GREASE_PLACEHOLDER,
            cs::TLS_AES_128_GCM_SHA256,
            cs::TLS_AES_256_GCM_SHA384,
            cs::TLS_CHACHA20_POLY1305_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            cs::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
            cs::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
            cs::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
            cs::TLS_RSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_RSA_WITH_AES_256_GCM_SHA384,
        ],
        compression_methods: vec![COMPRESSION_NONE],
        extensions: vec![
            fingerprint_core::dicttls::GREASE_PLACEHOLDER,
            fingerprint_core::dicttls::EXT_TYPE_SERVER_NAME,
            fingerprint_core::dicttls::EXT_TYPE_EXTENDED_MASTER_SECRET,
            fingerprint_core::dicttls::EXT_TYPE_RENEGOTIATION_INFO,
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_GROUPS,
            fingerprint_core::dicttls::EXT_TYPE_EC_POINT_FORMATS,
            fingerprint_core::dicttls::EXT_TYPE_SESSION_TICKET,
            fingerprint_core::dicttls::EXT_TYPE_APPLICATION_LAYER_PROTOCOL_NEGOTIATION,
            fingerprint_core::dicttls::EXT_TYPE_STATUS_REQUEST,
            fingerprint_core::dicttls::EXT_TYPE_SIGNATURE_ALGORITHMS,
            fingerprint_core::dicttls::EXT_TYPE_SIGNED_CERTIFICATE_TIMESTAMP,
            fingerprint_core::dicttls::EXT_TYPE_KEY_SHARE,
            fingerprint_core::dicttls::EXT_TYPE_PSK_KEY_EXCHANGE_MODES,
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_VERSIONS,
            fingerprint_core::dicttls::EXT_TYPE_COMPRESS_CERTIFICATE,
            fingerprint_core::dicttls::EXT_TYPE_APPLICATION_SETTINGS,
            fingerprint_core::dicttls::GREASE_PLACEHOLDER,
        ],
        curves,
        point_formats: vec![POINT_FORMAT_UNCOMPRESSED],
        alpn_protocols: vec!["h2".to_string(), "http/1.1".to_string()],
        signature_algorithms: vec![
            ss::ECDSA_WITH_P256_AND_SHA256,
            ss::PSS_WITH_SHA256,
            ss::PKCS1_WITH_SHA256,
            ss::ECDSA_WITH_P384_AND_SHA384,
            ss::PSS_WITH_SHA384,
            ss::PKCS1_WITH_SHA384,
            ss::PSS_WITH_SHA512,
            ss::PKCS1_WITH_SHA512,
        ],
    }
}

/// Firefox never sends GREASE values (a Chromium-only anti-ossification
/// mechanism) and leads with the AEAD-256 suite.
pub fn firefox_template(_major_version: u32) -> ClientHelloSpec {
    ClientHelloSpec {
        tls_vers_min: VERSION_TLS12,
        tls_vers_max: VERSION_TLS13,
        cipher_suites: vec![
            cs::TLS_AES_256_GCM_SHA384,
            cs::TLS_AES_128_GCM_SHA256,
            cs::TLS_CHACHA20_POLY1305_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            cs::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
            cs::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
            cs::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        ],
        compression_methods: vec![COMPRESSION_NONE],
        extensions: vec![
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_GROUPS,
            fingerprint_core::dicttls::EXT_TYPE_EC_POINT_FORMATS,
            fingerprint_core::dicttls::EXT_TYPE_SIGNATURE_ALGORITHMS,
            fingerprint_core::dicttls::EXT_TYPE_APPLICATION_LAYER_PROTOCOL_NEGOTIATION,
            fingerprint_core::dicttls::EXT_TYPE_EXTENDED_MASTER_SECRET,
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_VERSIONS,
        ],
        curves: vec![sg::CURVE_P256, sg::CURVE_P384, sg::SECP521R1, sg::X25519],
        point_formats: vec![POINT_FORMAT_UNCOMPRESSED],
        alpn_protocols: vec!["h2".to_string(), "http/1.1".to_string()],
        signature_algorithms: vec![
            ss::PSS_WITH_SHA256,
            ss::PSS_WITH_SHA384,
            ss::PSS_WITH_SHA512,
            ss::PKCS1_WITH_SHA256,
            ss::PKCS1_WITH_SHA384,
            ss::PKCS1_WITH_SHA512,
            ss::ECDSA_WITH_P256_AND_SHA256,
            ss::ECDSA_WITH_P384_AND_SHA384,
            ss::ECDSA_WITH_P521_AND_SHA512,
        ],
    }
}

/// Safari's cipher list never includes plain RSA key exchange at this
/// version range.
pub fn safari_template(_major_version: u32) -> ClientHelloSpec {
    ClientHelloSpec {
        tls_vers_min: VERSION_TLS12,
        tls_vers_max: VERSION_TLS13,
        cipher_suites: vec![
            cs::TLS_AES_128_GCM_SHA256,
            cs::TLS_AES_256_GCM_SHA384,
            cs::TLS_CHACHA20_POLY1305_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            cs::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            cs::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        ],
        compression_methods: vec![COMPRESSION_NONE],
        extensions: vec![
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_GROUPS,
            fingerprint_core::dicttls::EXT_TYPE_EC_POINT_FORMATS,
            fingerprint_core::dicttls::EXT_TYPE_SIGNATURE_ALGORITHMS,
            fingerprint_core::dicttls::EXT_TYPE_APPLICATION_LAYER_PROTOCOL_NEGOTIATION,
            fingerprint_core::dicttls::EXT_TYPE_SUPPORTED_VERSIONS,
        ],
        curves: vec![sg::CURVE_P256, sg::CURVE_P384, sg::X25519],
        point_formats: vec![POINT_FORMAT_UNCOMPRESSED],
        alpn_protocols: vec!["h2".to_string(), "http/1.1".to_string()],
        signature_algorithms: vec![
            ss::PKCS1_WITH_SHA256,
            ss::PKCS1_WITH_SHA384,
            ss::PKCS1_WITH_SHA512,
            ss::ECDSA_WITH_P256_AND_SHA256,
            ss::ECDSA_WITH_P384_AND_SHA384,
        ],
    }
}
