use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoShareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Photo {0} has no submitter")]
    MissingSubmitter(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PhotoShareError>;
