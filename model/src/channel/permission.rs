macro_rules! permissions {
    ($($variant:ident = $shift:literal => $name:literal,)+) => {
        /// Permission bits as documented by the platform. Kept in sync by hand.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(u128)]
        pub enum Permission {
            $($variant = 1 << $shift,)+
        }

        impl Permission {
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Permission::$variant => $name,)+
                }
            }
        }
    };
}

permissions! {
    CreateInstantInvite = 0 => "CREATE_INSTANT_INVITE",
    KickMembers = 1 => "KICK_MEMBERS",
    BanMembers = 2 => "BAN_MEMBERS",
    Administrator = 3 => "ADMINISTRATOR",
    ManageChannels = 4 => "MANAGE_CHANNELS",
    ManageGuild = 5 => "MANAGE_GUILD",
    AddReactions = 6 => "ADD_REACTIONS",
    ViewAuditLog = 7 => "VIEW_AUDIT_LOG",
    PrioritySpeaker = 8 => "PRIORITY_SPEAKER",
    Stream = 9 => "STREAM",
    ViewChannel = 10 => "VIEW_CHANNEL",
    SendMessages = 11 => "SEND_MESSAGES",
    SendTTSMessages = 12 => "SEND_TTS_MESSAGES",
    ManageMessages = 13 => "MANAGE_MESSAGES",
    EmbedLinks = 14 => "EMBED_LINKS",
    AttachFiles = 15 => "ATTACH_FILES",
    ReadMessageHistory = 16 => "READ_MESSAGE_HISTORY",
    MentionEveryone = 17 => "MENTION_EVERYONE",
    UseExternalEmojis = 18 => "USE_EXTERNAL_EMOJIS",
    ViewGuildInsights = 19 => "VIEW_GUILD_INSIGHTS",
    Connect = 20 => "CONNECT",
    Speak = 21 => "SPEAK",
    MuteMembers = 22 => "MUTE_MEMBERS",
    DeafenMembers = 23 => "DEAFEN_MEMBERS",
    MoveMembers = 24 => "MOVE_MEMBERS",
    UseVAD = 25 => "USE_VAD",
    ChangeNickname = 26 => "CHANGE_NICKNAME",
    ManageNicknames = 27 => "MANAGE_NICKNAMES",
    ManageRoles = 28 => "MANAGE_ROLES",
    ManageWebhooks = 29 => "MANAGE_WEBHOOKS",
    ManageGuildExpressions = 30 => "MANAGE_GUILD_EXPRESSIONS",
    UseApplicationCommands = 31 => "USE_APPLICATION_COMMANDS",
    RequestToSpeak = 32 => "REQUEST_TO_SPEAK",
    ManageEvents = 33 => "MANAGE_EVENTS",
    ManageThreads = 34 => "MANAGE_THREADS",
    CreatePublicThreads = 35 => "CREATE_PUBLIC_THREADS",
    CreatePrivateThreads = 36 => "CREATE_PRIVATE_THREADS",
    UseExternalStickers = 37 => "USE_EXTERNAL_STICKERS",
    SendMessagesInThreads = 38 => "SEND_MESSAGES_IN_THREADS",
    UseEmbeddedActivities = 39 => "USE_EMBEDDED_ACTIVITIES",
    ModerateMembers = 40 => "MODERATE_MEMBERS",
    ViewCreatorMonetizationAnalytics = 41 => "VIEW_CREATOR_MONETIZATION_ANALYTICS",
    UseSoundboard = 42 => "USE_SOUNDBOARD",
    CreateGuildExpressions = 43 => "CREATE_GUILD_EXPRESSIONS",
    CreateEvents = 44 => "CREATE_EVENTS",
    UseExternalSounds = 45 => "USE_EXTERNAL_SOUNDS",
    SendVoiceMessages = 46 => "SEND_VOICE_MESSAGES",
    SetVoiceChannelStatus = 48 => "SET_VOICE_CHANNEL_STATUS",
    SendPolls = 49 => "SEND_POLLS",
    UseExternalApps = 50 => "USE_EXTERNAL_APPS",
}

impl Permission {
    pub fn bits(self) -> u128 {
        self as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_bits() {
        assert_eq!(Permission::ViewChannel.bits(), 1024);
        assert_eq!(Permission::Administrator.bits(), 8);
        assert_eq!(Permission::SendVoiceMessages.bits(), 70368744177664);
        assert_eq!(Permission::SetVoiceChannelStatus.bits(), 1 << 48);
        assert_eq!(Permission::SetVoiceChannelStatus.name(), "SET_VOICE_CHANNEL_STATUS");
        assert_eq!(Permission::ALL.len(), 50);
    }

    #[test]
    fn test_bits_are_distinct() {
        let unique: HashSet<u128> = Permission::ALL.iter().map(|p| p.bits()).collect();
        assert_eq!(unique.len(), Permission::ALL.len());
        assert!(Permission::ALL.iter().all(|p| p.bits().count_ones() == 1));
    }
}
