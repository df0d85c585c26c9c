//! The top-level generation pipeline: validate options, sample the network,
//! build the base profile, apply overrides, run the derivation modules,
//! score the result, and cache it.
//!
//! Determinism contract: for a fixed `(random_seed, options)` pair the whole
//! bundle is byte-identical across calls and across processes. The sampler
//! consumes the parent seed's stream directly; each derivation step that
//! draws randomness gets its own salted substream so its output never
//! depends on whether a sibling module ran before it.

use crate::options::{FingerprintOverrides, GenerationOptions, HttpVersionOption};
use crate::result::{
    AudioContextFeaturesRecord, AudioRecord, BatchResult, BatchSummary, CanvasRecord,
    EnrichedFingerprint, GenerationResult, GpuInfo, Http2SettingsRecord, RenderingQuality,
    ShapeRendering, TextRendering, TlsRecord, WebglRecord,
};
use crate::scoring::{self, client_hints_platform_label};
use fingerprint_core::error::{FingerprintError, Result};
use fingerprint_core::types::{BrowserType, DeviceType, PlatformName};
use fingerprint_core::SeededRng;
use fingerprint_network::{
    build_default_network, BrowserConstraint, FingerprintConstraints, Network, NodeDistribution,
};
use fingerprint_profiles::{build_fingerprint, Fingerprint};
use std::collections::HashMap;
use std::sync::OnceLock;

fn network() -> &'static Network {
    static NETWORK: OnceLock<Network> = OnceLock::new();
    NETWORK.get_or_init(|| build_default_network().expect("default network declaration is valid"))
}

fn result_cache() -> &'static fingerprint_core::cache::ResultCache<GenerationResult> {
    static CACHE: OnceLock<fingerprint_core::cache::ResultCache<GenerationResult>> = OnceLock::new();
    CACHE.get_or_init(|| fingerprint_core::cache::ResultCache::new(128))
}

/// Check that every value the caller named in `options` is actually a legal
/// value for the corresponding network node, before spending any sampling
/// work on a combination the network could never produce.
fn validate_options(options: &GenerationOptions) -> Result<()> {
    let net = network();

    for browser in &options.browsers {
        if BrowserType::from_label(&browser.name).is_none() {
            return Err(FingerprintError::InvalidConstraint {
                message: format!("`{}` is not a known browser", browser.name),
            });
        }
        if let (Some(min), Some(max)) = (browser.min_version, browser.max_version) {
            if min > max {
                return Err(FingerprintError::InvalidConstraint {
                    message: format!(
                        "browser `{}` has min_version {min} > max_version {max}",
                        browser.name
                    ),
                });
            }
        }
    }

    for device in &options.devices {
        if DeviceType::from_label(device).is_none() {
            return Err(FingerprintError::InvalidConstraint {
                message: format!("`{device}` is not a known device class"),
            });
        }
    }

    for os in &options.operating_systems {
        if PlatformName::from_label(&os.name).is_none() {
            return Err(FingerprintError::InvalidConstraint {
                message: format!("`{}` is not a known platform", os.name),
            });
        }
    }

    // A single requested browser together with a single requested platform
    // is only satisfiable if the network's `platform` node actually declares
    // that platform among the browser's row labels.
    if options.browsers.len() == 1 && options.operating_systems.len() == 1 {
        let browser_name = options.browsers[0].name.to_lowercase();
        let platform_name = options.operating_systems[0].name.to_lowercase();
        if let Some(node) = net.node("platform") {
            if let NodeDistribution::Conditional(table) = &node.distribution {
                if let Some(fingerprint_network::Distribution::Categorical { labels, .. }) =
                    table.get(&browser_name)
                {
                    if !labels.contains(&platform_name.as_str()) {
                        return Err(FingerprintError::InvalidConstraint {
                            message: format!(
                                "browser `{browser_name}` never ships on platform `{platform_name}`"
                            ),
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

fn constraints_from(options: &GenerationOptions) -> FingerprintConstraints {
    FingerprintConstraints {
        browsers: options.browsers.iter().map(BrowserConstraint::from).collect(),
        devices: options.devices.clone(),
        platforms: options
            .operating_systems
            .iter()
            .map(|os| os.name.to_lowercase())
            .collect(),
        screen_resolutions: options.screen_resolutions.iter().map(|r| r.label()).collect(),
    }
}

fn apply_overrides(mut fp: Fingerprint, overrides: &FingerprintOverrides) -> Fingerprint {
    let mut browser_changed = false;

    if let Some(name) = &overrides.browser {
        if let Some(b) = BrowserType::from_label(name) {
            fp.browser.name = b;
            browser_changed = true;
        }
    }
    if let Some(version) = overrides.browser_version {
        fp.browser.version = version;
        fp.browser.major_version = version;
        browser_changed = true;
    }
    if let Some(name) = &overrides.platform {
        if let Some(p) = PlatformName::from_label(name) {
            fp.device.platform.name = p;
            browser_changed = true;
        }
    }
    if let Some(locale) = &overrides.locale {
        fp.locale = locale.clone();
    }
    if let Some(languages) = &overrides.languages {
        fp.languages = languages.clone();
    }

    if browser_changed {
        fp.user_agent = fingerprint_profiles::compose_user_agent(
            fp.browser.name,
            fp.browser.version,
            fp.device.platform.name,
            &fp.device.platform.version,
        );
    }

    fp
}

/// Pick one candidate from `options.locales` and apply it the same way an
/// explicit `overrides.locale` would, unless an override already pinned the
/// locale. Derives `languages` as `[locale, primary-subtag]` to match the
/// default profile's own shape.
fn apply_locale_pool(mut fp: Fingerprint, locales: &[String], rng: &mut SeededRng) -> Fingerprint {
    if locales.is_empty() {
        return fp;
    }
    let index = rng.next_range_inclusive(0, locales.len() as i64 - 1) as usize;
    let locale = locales[index].clone();
    let primary = locale.split('-').next().unwrap_or(&locale).to_string();
    fp.languages = if primary == locale { vec![locale.clone()] } else { vec![locale.clone(), primary] };
    fp.locale = locale;
    fp
}

fn build_headers(
    fp: &Fingerprint,
    options: &GenerationOptions,
) -> (HashMap<String, String>, Vec<String>) {
    let is_mobile = matches!(fp.device.device_type, DeviceType::Mobile | DeviceType::Tablet);
    let platform_hint = format!("\"{}\"", client_hints_platform_label(fp.device.platform.name));
    let mut header_options = options.header_options.clone();
    header_options.http_version = match options.http_version {
        HttpVersionOption::Http1 => fingerprint_headers::HttpVersion::Http1,
        HttpVersionOption::Http2 => fingerprint_headers::HttpVersion::Http2,
    };
    let (headers, warnings) = fingerprint_headers::generate_headers(
        fp.browser.name,
        fp.browser.major_version,
        &platform_hint,
        is_mobile,
        &fp.user_agent,
        &fp.languages,
        &header_options,
    );
    (headers.to_map(), warnings)
}

fn build_tls(fp: &Fingerprint, rng: &mut SeededRng) -> TlsRecord {
    let mut spec = fingerprint_tls::template_for(fp.browser.name, fp.browser.major_version);
    fingerprint_tls::shuffle_ciphers(&mut spec, rng);

    let ja3 = spec.ja3();
    let ja4 = spec.ja4();
    let version = if spec.tls_vers_max >= fingerprint_tls::spec::VERSION_TLS13 {
        "TLS 1.3"
    } else {
        "TLS 1.2"
    };

    let settings = fingerprint_headers::http2_settings(fp.browser.name);
    let http2_settings = Http2SettingsRecord {
        header_table_size: *settings
            .get(&fingerprint_headers::Http2SettingId::HeaderTableSize.as_u16())
            .unwrap_or(&4096),
        enable_push: *settings
            .get(&fingerprint_headers::Http2SettingId::EnablePush.as_u16())
            .unwrap_or(&0)
            != 0,
        max_concurrent_streams: *settings
            .get(&fingerprint_headers::Http2SettingId::MaxConcurrentStreams.as_u16())
            .unwrap_or(&100),
        initial_window_size: *settings
            .get(&fingerprint_headers::Http2SettingId::InitialWindowSize.as_u16())
            .unwrap_or(&65535),
        max_frame_size: *settings
            .get(&fingerprint_headers::Http2SettingId::MaxFrameSize.as_u16())
            .unwrap_or(&16384),
        max_header_list_size: *settings
            .get(&fingerprint_headers::Http2SettingId::MaxHeaderListSize.as_u16())
            .unwrap_or(&262144),
    };

    TlsRecord {
        version: version.to_string(),
        ciphers: spec.cipher_suites.clone(),
        extensions: spec.extensions.clone(),
        supported_versions: vec!["TLS 1.3".to_string(), "TLS 1.2".to_string()],
        signature_algorithms: spec.signature_algorithms.clone(),
        key_shares: spec.curves.clone(),
        alpn: spec.alpn_protocols.clone(),
        ja3_hash: ja3.fingerprint,
        ja4_hash: ja4.to_fingerprint_string(),
        ssl_version: format!("0x{:04x}", spec.tls_vers_max),
        cipher_suite: format!("0x{:04x}", spec.cipher_suites.first().copied().unwrap_or(0)),
        http2_settings,
    }
}

fn build_canvas(fp: &Fingerprint) -> CanvasRecord {
    use base64::Engine;
    let canvas = fingerprint_canvas::generate_canvas_fingerprint(
        fp.browser.name,
        fp.browser.major_version,
        fp.device.platform.name,
        fp.device.device_type,
    );
    let root_bytes = hex::decode(&canvas.root_hash).unwrap_or_default();
    let payload = base64::engine::general_purpose::STANDARD.encode(root_bytes);
    CanvasRecord {
        data_url: format!("data:image/png;base64,{payload}"),
        text_hash: canvas.text_hash,
        shapes_hash: canvas.shapes_hash,
        image_hash: canvas.image_hash,
        gradient_hash: canvas.gradient_hash,
        composite_hash: canvas.composite_hash,
        rendering_quality: RenderingQuality {
            color_depth: fp.device.screen.color_depth,
            pixel_ratio: fp.device.screen.pixel_ratio,
            hardware_acceleration: true,
        },
        text_rendering: TextRendering {
            font: "Arial",
            baseline: "alphabetic",
            align: "left",
            antialiasing: true,
        },
        shape_rendering: ShapeRendering {
            line_join: "miter",
            line_cap: "butt",
            miter_limit: 10.0,
        },
    }
}

fn build_webgl(fp: &Fingerprint) -> WebglRecord {
    let webgl = fingerprint_webgl::generate_webgl_fingerprint(
        fp.browser.name,
        fp.browser.major_version,
        fp.device.platform.name,
        fp.device.device_type,
    );
    let parameters = webgl
        .parameters
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    WebglRecord {
        vendor: webgl.gpu_vendor.clone(),
        renderer: webgl.gpu_renderer.clone(),
        version: "WebGL 2.0".to_string(),
        shading_language_version: "WebGL GLSL ES 3.00".to_string(),
        extensions: webgl.extensions,
        parameters,
        vertex_shader_hash: webgl.vertex_shader_hash,
        fragment_shader_hash: webgl.fragment_shader_hash,
        gpu_info: GpuInfo {
            vendor: webgl.gpu_vendor,
            renderer: webgl.gpu_renderer,
            platform: fp.device.platform.name.to_string(),
            memory_mb: webgl.gpu_memory_mb,
        },
    }
}

fn build_audio(fp: &Fingerprint) -> AudioRecord {
    let audio = fingerprint_audio::generate_audio_fingerprint(
        fp.browser.name,
        fp.browser.major_version,
        fp.device.platform.name,
        fp.device.device_type,
    );
    AudioRecord {
        sample_rate: audio.sample_rate,
        oscillator_hash: audio.oscillator_hash,
        noise_hash: audio.noise_hash,
        compressor_hash: audio.compressor_hash,
        context_features: AudioContextFeaturesRecord {
            max_channels_input: audio.channel_count,
            max_channels_output: audio.channel_count,
            latency_hint: "interactive",
            disabled: audio.context_features.disabled,
        },
    }
}

fn build_fonts(fp: &Fingerprint, rng: &mut SeededRng) -> crate::result::FontsRecord {
    let fonts = fingerprint_fonts::generate_font_fingerprint(fp.device.platform.name, rng);

    // Probed-but-absent candidates report `false`, matching what a probe page
    // actually learns: which fonts were tested, not just which ones hit.
    let mut font_support: HashMap<String, bool> = fingerprint_fonts::system_candidates(fp.device.platform.name)
        .iter()
        .chain(fingerprint_fonts::web_candidates().iter())
        .map(|f| (f.to_string(), false))
        .collect();
    for f in fonts.system_fonts.iter().chain(fonts.web_fonts.iter()) {
        font_support.insert(f.clone(), true);
    }

    let detected = fonts.system_fonts.len() + fonts.web_fonts.len();
    let total = font_support.len();
    crate::result::FontsRecord {
        system_fonts: fonts.system_fonts,
        web_fonts: fonts.web_fonts,
        detected,
        total,
        font_signature: fonts.font_signature,
        font_support,
    }
}

/// Produce one fully enriched, scored fingerprint.
pub fn generate(options: &GenerationOptions) -> Result<GenerationResult> {
    validate_options(options)?;

    let cache_key = options.cache_key();
    if !options.force_regenerate {
        if let Some(cached) = result_cache().get(&cache_key) {
            log::debug!("generate: cache hit for {cache_key}");
            return Ok(cached);
        }
    }

    let start = std::time::Instant::now();
    let parent_seed = options
        .random_seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    let mut sampler_rng = SeededRng::new(parent_seed);

    let constraints = constraints_from(options);
    let evidence = constraints.realize(&mut sampler_rng);
    let (assignment, sample_warnings) = network().sample(&evidence, &mut sampler_rng)?;

    let mut profile_rng = SeededRng::substream(parent_seed, 1);
    let base = build_fingerprint(&assignment, &mut profile_rng)?;
    let base = match &options.overrides {
        Some(overrides) => apply_overrides(base, overrides),
        None => base,
    };
    let override_pinned_locale = options.overrides.as_ref().is_some_and(|o| o.locale.is_some());
    let mut locale_rng = SeededRng::substream(parent_seed, 5);
    let base = if override_pinned_locale {
        base
    } else {
        apply_locale_pool(base, &options.locales, &mut locale_rng)
    };

    // The three derivation modules share no mutable state; each draws from
    // its own salted substream, so the fan-out cannot affect outputs. Scoped
    // threads let them borrow `base` without an async runtime.
    let (headers_joined, tls_joined, artifacts_joined) = std::thread::scope(|scope| {
        let headers_task = scope.spawn(|| {
            options
                .include_headers
                .then(|| build_headers(&base, options))
        });
        let tls_task = scope.spawn(|| {
            options.include_tls.then(|| {
                let mut tls_rng = SeededRng::substream(parent_seed, 3);
                build_tls(&base, &mut tls_rng)
            })
        });
        let artifacts_task = scope.spawn(|| {
            options.include_canvas.then(|| {
                let mut fonts_rng = SeededRng::substream(parent_seed, 4);
                (
                    build_canvas(&base),
                    build_webgl(&base),
                    build_audio(&base),
                    build_fonts(&base, &mut fonts_rng),
                )
            })
        });
        (headers_task.join(), tls_task.join(), artifacts_task.join())
    });

    let headers_out = headers_joined
        .map_err(|_| FingerprintError::Other("headers derivation thread panicked".into()))?;
    let tls = tls_joined
        .map_err(|_| FingerprintError::Other("tls derivation thread panicked".into()))?;
    let artifacts = artifacts_joined
        .map_err(|_| FingerprintError::Other("canvas derivation thread panicked".into()))?;

    let (headers, header_warnings) = match headers_out {
        Some((headers, warnings)) => (Some(headers), warnings),
        None => (None, Vec::new()),
    };
    let (canvas, webgl, audio, fonts) = match artifacts {
        Some((canvas, webgl, audio, fonts)) => (Some(canvas), Some(webgl), Some(audio), Some(fonts)),
        None => (None, None, None, None),
    };

    let enriched = EnrichedFingerprint {
        base,
        headers,
        tls,
        canvas,
        webgl,
        audio,
        fonts,
    };

    let scores = scoring::score(&enriched);
    let mut warnings: Vec<String> = sample_warnings
        .into_iter()
        .map(|w| format!("{}: {}", w.node, w.message))
        .collect();
    warnings.extend(header_warnings);
    warnings.extend(scores.warnings);

    if !warnings.is_empty() {
        log::warn!("generate: {} warning(s) for seed {parent_seed}: {warnings:?}", warnings.len());
    }

    let generation_time_ms = start.elapsed().as_millis().max(1) as u64;

    let result = GenerationResult {
        fingerprint: enriched,
        quality_score: scores.quality,
        uniqueness_score: scores.uniqueness,
        consistency_score: scores.consistency,
        bypass_confidence: scores.bypass_confidence,
        generation_time_ms,
        timestamp: format_timestamp(parent_seed),
        warnings,
    };

    result_cache().put(cache_key, result.clone());
    Ok(result)
}

/// Deterministic ISO-8601-shaped timestamp derived from the seed rather than
/// the wall clock, so `generate()` stays reproducible for a fixed seed.
fn format_timestamp(seed: u64) -> String {
    let base = 1_700_000_000u64;
    let secs = base.wrapping_add(seed % 100_000_000);
    let dt = chrono::DateTime::<chrono::Utc>::from_timestamp(secs as i64, 0).unwrap_or_default();
    dt.to_rfc3339()
}

/// Generate `count` fingerprints in invocation order, incrementing the seed
/// for each one so a caller who fixed `random_seed` still gets `count`
/// distinct results.
pub fn generate_batch(count: usize, options: &GenerationOptions) -> Result<BatchResult> {
    let base_seed = options
        .random_seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    let mut results = Vec::with_capacity(count);
    for i in 0..count {
        let mut per_call = options.clone();
        per_call.random_seed = Some(base_seed.wrapping_add(i as u64));
        per_call.force_regenerate = true;
        results.push(generate(&per_call)?);
    }

    let n = results.len().max(1) as f64;
    let mean_quality_score = results.iter().map(|r| r.quality_score).sum::<f64>() / n;
    let mean_uniqueness_score = results.iter().map(|r| r.uniqueness_score).sum::<f64>() / n;
    let mean_generation_time_ms =
        results.iter().map(|r| r.generation_time_ms as f64).sum::<f64>() / n;

    let summary = BatchSummary {
        batch_id: fingerprint_core::hashing::namespaced_hash_hex_truncated(
            "batch",
            &format!("{base_seed}:{count}"),
            16,
        ),
        count: results.len(),
        mean_quality_score,
        mean_uniqueness_score,
        mean_generation_time_ms,
        timestamp: format_timestamp(base_seed),
    };

    Ok(BatchResult { results, summary })
}

/// Legacy helper kept for API compatibility with callers that fed observed
/// fingerprints back into an adaptive model. This crate's network has no
/// online-learning step, so the call deliberately does nothing rather than
/// erroring out on existing callers.
pub fn update_probabilities(_observed: &[Fingerprint]) -> Result<()> {
    Ok(())
}
