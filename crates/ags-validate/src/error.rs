use thiserror::Error;

/// Fatal errors surfaced by the validation entry points.
///
/// Problems in the validated file are never errors; they are reported as
/// issues.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Standards(#[from] ags_standards::StandardsError),

    #[error("invalid validation config: {source}")]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
