use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown rule identifier: {rule}")]
    UnknownRule { rule: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
