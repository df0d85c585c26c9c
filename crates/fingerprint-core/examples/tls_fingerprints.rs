//! Compute JA3 and JA4 fingerprints for a hand-built ClientHello value set.
//!
//! Run with `cargo run -p fingerprint-core --example tls_fingerprints`.

use fingerprint_core::{JA3, JA4};

fn main() {
    // A Chrome-like TLS 1.3 ClientHello, GREASE values included; both
    // fingerprints strip GREASE before hashing.
    let ciphers = [
        0x0a0a, 0x1301, 0x1302, 0x1303, 0xc02b, 0xc02f, 0xc02c, 0xc030,
    ];
    let extensions = [0x0a0a, 0, 10, 11, 13, 16, 23, 35, 43, 45, 51];
    let curves = [0x0a0a, 29, 23, 24];
    let formats = [0u8];
    let signatures = [0x0403, 0x0804, 0x0401, 0x0503];

    let ja3 = JA3::generate(771, &ciphers, &extensions, &curves, &formats);
    println!("JA3 string:      {}", ja3.ja3_string);
    println!("JA3 fingerprint: {}", ja3.fingerprint);

    let ja4 = JA4::generate('t', "1.3", true, &ciphers, &extensions, Some("h2"), &signatures);
    println!("JA4 fingerprint: {ja4}");
}
