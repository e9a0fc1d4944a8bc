#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("unknown dictionary version '{version}' (expected one of: {expected})")]
    UnknownVersion { version: String, expected: String },

    #[error("failed to parse dictionary manifest: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("no manifest entry for dictionary {version}")]
    MissingEntry { version: String },

    #[error("invalid sha256 for {path}: {message}")]
    InvalidSha256 { path: String, message: String },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("dictionary {version} has no DICT group")]
    MissingDictGroup { version: String },
}

pub type Result<T> = std::result::Result<T, StandardsError>;
