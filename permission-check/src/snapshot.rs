use crate::Result;
use model::channel::Channel;
use model::guild::{Guild, Member, Role};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything needed to resolve one member's channel permissions in a guild,
/// as previously fetched from the API.
#[derive(Debug, Deserialize)]
pub struct GuildSnapshot {
    pub guild: Guild,
    pub roles: Vec<Role>,
    pub channels: Vec<Channel>,
    pub member: Member,
}

impl GuildSnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
