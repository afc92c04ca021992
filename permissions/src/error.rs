use model::Snowflake;

pub type Result<T> = std::result::Result<T, PermissionError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("default role not found for guild {guild_id}: guild role data is incomplete or corrupt")]
    InvariantViolation { guild_id: Snowflake },
}

