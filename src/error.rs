use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to load catalog: {0}")]
    CatalogError(String),

    #[error("Hero not found: {0}")]
    HeroNotFound(String),

    #[error("A team holds at most {max} heroes, got {given}")]
    TeamTooLarge { given: usize, max: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
