use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Storage backend rejected the operation: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog YAML is malformed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Read-aloud is not configured")]
    NotConfigured,

    #[error("Speech service error: {0}")]
    Service(String),

    #[error("Speech service returned unusable audio: {0}")]
    MalformedAudio(String),

    #[error("Audio playback error: {0}")]
    Playback(String),
}
