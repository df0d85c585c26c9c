//! End-to-end determinism across the shared primitives: two independent
//! "pipelines" seeded identically must agree on every derived value, and
//! substreams must stay stable under reordering.

use fingerprint_core::hashing::{deterministic_index, namespaced_hash_hex_truncated};
use fingerprint_core::{SeededRng, JA3, JA4};

/// Simulate the draw pattern of a full generation pass: constraint
/// tie-breaking, categorical node sampling, then two salted substreams.
fn run_pipeline(seed: u64) -> (Vec<usize>, f64, f64, String, String) {
    let mut sampler = SeededRng::new(seed);
    let browser_weights = [0.65, 0.12, 0.12, 0.08, 0.03];
    let draws: Vec<usize> = (0..6).map(|_| sampler.sample_categorical(&browser_weights)).collect();

    let mut tls_rng = SeededRng::substream(seed, 3);
    let mut fonts_rng = SeededRng::substream(seed, 4);
    let tls_draw = tls_rng.next_uniform();
    let fonts_draw = fonts_rng.next_uniform();

    let canvas = namespaced_hash_hex_truncated("canvas:text", "chrome|120|windows|desktop", 16);
    let audio = namespaced_hash_hex_truncated("audio:oscillator", "chrome|120|windows|desktop", 16);
    (draws, tls_draw, fonts_draw, canvas, audio)
}

#[test]
fn identical_seeds_agree_on_every_derived_value() {
    assert_eq!(run_pipeline(42), run_pipeline(42));
    assert_ne!(run_pipeline(42).0, run_pipeline(43).0);
}

#[test]
fn substream_order_does_not_matter() {
    // Deriving fonts before TLS must not change either stream.
    let mut tls_first = SeededRng::substream(7, 3);
    let a = tls_first.next_uniform();

    let mut fonts = SeededRng::substream(7, 4);
    let _ = fonts.next_uniform();
    let mut tls_second = SeededRng::substream(7, 3);
    let b = tls_second.next_uniform();

    assert_eq!(a, b);
}

#[test]
fn tls_fingerprints_are_stable_across_reconstruction() {
    let ciphers = [0x1301u16, 0x1302, 0xc02b];
    let extensions = [0u16, 10, 13, 43];
    let ja3_a = JA3::generate(771, &ciphers, &extensions, &[29, 23], &[0]);
    let ja3_b = JA3::generate(771, &ciphers, &extensions, &[29, 23], &[0]);
    assert_eq!(ja3_a.fingerprint, ja3_b.fingerprint);

    let ja4_a = JA4::generate('t', "1.3", true, &ciphers, &extensions, Some("h2"), &[0x0403]);
    let ja4_b = JA4::generate('t', "1.3", true, &ciphers, &extensions, Some("h2"), &[0x0403]);
    assert_eq!(ja4_a.to_fingerprint_string(), ja4_b.to_fingerprint_string());
}

#[test]
fn deterministic_index_is_stable_and_bounded() {
    for modulo in 1..8 {
        let a = deterministic_index("webgl:gpu", "windows:desktop", modulo);
        let b = deterministic_index("webgl:gpu", "windows:desktop", modulo);
        assert_eq!(a, b);
        assert!(a < modulo);
    }
}

#[test]
fn gaussian_draws_are_reproducible() {
    let mut a = SeededRng::new(9);
    let mut b = SeededRng::new(9);
    for _ in 0..50 {
        assert_eq!(a.next_gaussian(8.0, 9.0), b.next_gaussian(8.0, 9.0));
    }
}
