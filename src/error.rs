use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unit id must not be empty")]
    EmptyId,

    #[error("Declaration '{id}' has no implementation bound")]
    MissingImplementation { id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
