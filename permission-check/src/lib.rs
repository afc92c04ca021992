mod config;
pub use config::Config;

mod error;
pub use error::{AppError, Result};

mod snapshot;
pub use snapshot::GuildSnapshot;

pub mod report;
