use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Icon pipeline errors.
///
/// These never abort a build: the icon cache turns them into a placeholder
/// reference and logs them.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("no remote icon url")]
    MissingUrl,

    #[error("icon download failed: {0}")]
    Download(#[source] reqwest::Error),

    #[error("icon host returned status {0}")]
    Status(u16),

    #[error("icon decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("icon encode failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("icon write failed: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("market fetch failed: {0}")]
    Fetch(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
