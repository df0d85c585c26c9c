//! The enriched output types: `GenerationResult` nests the base
//! `fingerprint_profiles::Fingerprint` alongside the headers/TLS/canvas/
//! WebGL/audio/fonts sub-records those modules attach. Kept in this crate
//! rather than `fingerprint-profiles` so that crate stays free of a
//! dependency on every derivation module.

use std::collections::HashMap;

#[derive(Debug, Clone, serde::Serialize)]
pub struct Http2SettingsRecord {
    pub header_table_size: u32,
    pub enable_push: bool,
    pub max_concurrent_streams: u32,
    pub initial_window_size: u32,
    pub max_frame_size: u32,
    pub max_header_list_size: u32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TlsRecord {
    pub version: String,
    pub ciphers: Vec<u16>,
    pub extensions: Vec<u16>,
    pub supported_versions: Vec<String>,
    pub signature_algorithms: Vec<u16>,
    pub key_shares: Vec<u16>,
    pub alpn: Vec<String>,
    pub ja3_hash: String,
    pub ja4_hash: String,
    pub ssl_version: String,
    pub cipher_suite: String,
    pub http2_settings: Http2SettingsRecord,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderingQuality {
    pub color_depth: u32,
    pub pixel_ratio: f64,
    pub hardware_acceleration: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TextRendering {
    pub font: &'static str,
    pub baseline: &'static str,
    pub align: &'static str,
    pub antialiasing: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ShapeRendering {
    pub line_join: &'static str,
    pub line_cap: &'static str,
    pub miter_limit: f64,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CanvasRecord {
    pub data_url: String,
    pub text_hash: String,
    pub shapes_hash: String,
    pub image_hash: String,
    pub gradient_hash: String,
    pub composite_hash: String,
    pub rendering_quality: RenderingQuality,
    pub text_rendering: TextRendering,
    pub shape_rendering: ShapeRendering,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct GpuInfo {
    pub vendor: String,
    pub renderer: String,
    pub platform: String,
    pub memory_mb: u32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct WebglRecord {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
    pub extensions: Vec<String>,
    pub parameters: HashMap<String, u32>,
    pub vertex_shader_hash: String,
    pub fragment_shader_hash: String,
    pub gpu_info: GpuInfo,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AudioContextFeaturesRecord {
    pub max_channels_input: u32,
    pub max_channels_output: u32,
    pub latency_hint: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AudioRecord {
    pub sample_rate: u32,
    pub oscillator_hash: String,
    pub noise_hash: String,
    pub compressor_hash: String,
    pub context_features: AudioContextFeaturesRecord,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct FontsRecord {
    pub system_fonts: Vec<String>,
    pub web_fonts: Vec<String>,
    pub detected: usize,
    pub total: usize,
    pub font_signature: String,
    pub font_support: HashMap<String, bool>,
}

/// The base profile plus whatever derivation modules `GenerationOptions`
/// asked for. Fields are `None` when the corresponding `include_*` option
/// was `false`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EnrichedFingerprint {
    pub base: fingerprint_profiles::Fingerprint,
    pub headers: Option<HashMap<String, String>>,
    pub tls: Option<TlsRecord>,
    pub canvas: Option<CanvasRecord>,
    pub webgl: Option<WebglRecord>,
    pub audio: Option<AudioRecord>,
    pub fonts: Option<FontsRecord>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct GenerationResult {
    pub fingerprint: EnrichedFingerprint,
    pub quality_score: f64,
    pub uniqueness_score: f64,
    pub consistency_score: f64,
    pub bypass_confidence: f64,
    pub generation_time_ms: u64,
    pub timestamp: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchSummary {
    pub batch_id: String,
    pub count: usize,
    pub mean_quality_score: f64,
    pub mean_uniqueness_score: f64,
    pub mean_generation_time_ms: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchResult {
    pub results: Vec<GenerationResult>,
    pub summary: BatchSummary,
}
