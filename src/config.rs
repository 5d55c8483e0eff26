// src/config.rs

const PROFILE_KEY: &str = "geoquest_user_v1";
const LEVELS_KEY: &str = "geoquest_levels_v1";
const DEFAULT_TTS_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_TTS_MODEL: &str = "tts-1";
const DEFAULT_TTS_VOICE: &str = "nova";

#[derive(Clone, Debug, PartialEq)]
pub struct SpeechConfig {
    /// URL base de una API de voz compatible con OpenAI, sin barra final.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_TTS_MODEL.to_string(),
            voice: DEFAULT_TTS_VOICE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoQuestConfig {
    pub profile_key: String,
    pub levels_key: String,
    /// Segundos que se muestra el indicador "Syncing..." tras cada guardado
    pub sync_indicator_secs: f64,
    /// Sólo nativo; `None` usa el directorio de eframe para la app.
    pub data_dir: Option<std::path::PathBuf>,
    pub speech: SpeechConfig,
}

impl Default for GeoQuestConfig {
    fn default() -> Self {
        Self {
            profile_key: PROFILE_KEY.to_string(),
            levels_key: LEVELS_KEY.to_string(),
            sync_indicator_secs: 0.8,
            data_dir: None,
            speech: SpeechConfig::default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl GeoQuestConfig {
    /// Valores por defecto sobrescritos con variables `GEOQUEST_*` (entorno en
    /// ejecución en nativo, en compilación en wasm32).
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let get = |name: &str| lookup(name).as_deref().and_then(non_empty);

        if let Some(dir) = get("GEOQUEST_DATA_DIR") {
            cfg.data_dir = Some(dir.into());
        }
        if let Some(endpoint) = get("GEOQUEST_TTS_ENDPOINT") {
            cfg.speech.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        cfg.speech.api_key = get("GEOQUEST_TTS_API_KEY");
        if let Some(model) = get("GEOQUEST_TTS_MODEL") {
            cfg.speech.model = model;
        }
        if let Some(voice) = get("GEOQUEST_TTS_VOICE") {
            cfg.speech.voice = voice;
        }
        cfg
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_lookup(name: &str) -> Option<String> {
    let value = match name {
        "GEOQUEST_TTS_ENDPOINT" => option_env!("GEOQUEST_TTS_ENDPOINT"),
        "GEOQUEST_TTS_MODEL" => option_env!("GEOQUEST_TTS_MODEL"),
        "GEOQUEST_TTS_VOICE" => option_env!("GEOQUEST_TTS_VOICE"),
        _ => None,
    };
    value.map(str::to_string)
}
