pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("envy error: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("error reading snapshot: {0}")]
    IoError(#[from] std::io::Error),

    #[error("error while decoding json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error resolving permissions: {0}")]
    PermissionError(#[from] permissions::PermissionError),
}
