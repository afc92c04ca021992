use serde_repr::{Deserialize_repr, Serialize_repr};
use ChannelType::*;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    DM = 1,
    GuildVoice = 2,
    GroupDM = 3,
    GuildCategory = 4,
    GuildNews = 5,
    GuildAnnouncementThread = 10,
    GuildPublicThread = 11,
    GuildPrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

impl ChannelType {
    pub fn is_thread(&self) -> bool {
        matches!(
            self,
            GuildAnnouncementThread | GuildPublicThread | GuildPrivateThread
        )
    }

    pub fn is_category(&self) -> bool {
        *self == GuildCategory
    }

    pub fn name(&self) -> &'static str {
        match self {
            GuildText => "text",
            DM => "dm",
            GuildVoice => "voice",
            GroupDM => "group-dm",
            GuildCategory => "category",
            GuildNews => "announcement",
            GuildAnnouncementThread => "announcement-thread",
            GuildPublicThread => "public-thread",
            GuildPrivateThread => "private-thread",
            GuildStageVoice => "stage-voice",
            GuildDirectory => "directory",
            GuildForum => "forum",
            GuildMedia => "media",
        }
    }
}
