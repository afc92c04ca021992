use crate::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub snapshot_path: String,
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default)]
    pub output_json: bool,
    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(Into::into)
    }
}
