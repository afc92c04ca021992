use model::channel::{Channel, PermissionOverwrite, PermissionOverwriteType};
use model::{PermissionBitSet, Snowflake};

/// Overwrites that apply to `channel`.
///
/// A channel with any overwrites of its own uses only those. Otherwise it
/// inherits its category's list as-is. Only one level is followed.
pub fn effective_overwrites<'a>(
    channel: &'a Channel,
    channels: &'a [Channel],
) -> &'a [PermissionOverwrite] {
    let own = channel.overwrites();
    if !own.is_empty() {
        return own;
    }

    channel
        .parent_id
        .and_then(|parent_id| channels.iter().find(|ch| ch.id == parent_id))
        .map(Channel::overwrites)
        .unwrap_or_default()
}

/// The `@everyone` role's overwrite, which targets the guild id.
pub fn everyone_overwrite(
    guild_id: Snowflake,
    overwrites: &[PermissionOverwrite],
) -> Option<&PermissionOverwrite> {
    overwrites
        .iter()
        .find(|ow| ow.targets(PermissionOverwriteType::Role, guild_id))
}

/// ORs together the allow and deny bits of every role overwrite matching one
/// of `role_ids`. The pair is applied as a single step, so a deny from any
/// held role beats an allow from any other.
pub fn combined_role_overwrites(
    role_ids: &[Snowflake],
    overwrites: &[PermissionOverwrite],
) -> (PermissionBitSet, PermissionBitSet) {
    let mut allow = PermissionBitSet::empty();
    let mut deny = PermissionBitSet::empty();

    for role_id in role_ids {
        if let Some(ow) = overwrites
            .iter()
            .find(|ow| ow.targets(PermissionOverwriteType::Role, *role_id))
        {
            allow |= ow.allow;
            deny |= ow.deny;
        }
    }

    (allow, deny)
}

pub fn member_overwrite(
    user_id: Snowflake,
    overwrites: &[PermissionOverwrite],
) -> Option<(PermissionBitSet, PermissionBitSet)> {
    overwrites
        .iter()
        .find(|ow| ow.targets(PermissionOverwriteType::Member, user_id))
        .map(|ow| (ow.allow, ow.deny))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::channel::ChannelType;

    fn channel(id: u64, parent_id: Option<u64>, overwrites: Option<Vec<PermissionOverwrite>>) -> Channel {
        Channel {
            id: Snowflake(id),
            channel_type: ChannelType::GuildText,
            guild_id: Some(Snowflake(100)),
            position: 0,
            name: format!("channel-{}", id).into_boxed_str(),
            topic: None,
            nsfw: false,
            rate_limit_per_user: None,
            parent_id: parent_id.map(Snowflake),
            permission_overwrites: overwrites,
        }
    }

    fn deny_view(id: u64) -> PermissionOverwrite {
        PermissionOverwrite::role(Snowflake(id), PermissionBitSet(0), PermissionBitSet(1024))
    }

    #[test]
    fn test_own_overwrites_take_precedence() {
        let own = PermissionOverwrite::role(Snowflake(100), PermissionBitSet(1024), PermissionBitSet(0));
        let category = channel(1, None, Some(vec![deny_view(100), deny_view(200)]));
        let text = channel(20, Some(1), Some(vec![own.clone()]));
        let channels = vec![category, text.clone()];

        assert_eq!(effective_overwrites(&text, &channels), &[own]);
    }

    #[test]
    fn test_inherits_from_category() {
        let category = channel(1, None, Some(vec![deny_view(100)]));
        let empty = channel(20, Some(1), Some(Vec::new()));
        let missing = channel(21, Some(1), None);
        let channels = vec![category, empty.clone(), missing.clone()];

        assert_eq!(effective_overwrites(&empty, &channels), &[deny_view(100)]);
        assert_eq!(effective_overwrites(&missing, &channels), &[deny_view(100)]);
    }

    #[test]
    fn test_no_inheritance_source() {
        let top_level = channel(20, None, None);
        let orphan = channel(21, Some(5), None);
        let channels = vec![top_level.clone(), orphan.clone()];

        assert!(effective_overwrites(&top_level, &channels).is_empty());
        assert!(effective_overwrites(&orphan, &channels).is_empty());
    }

    #[test]
    fn test_inheritance_is_one_level() {
        let grandparent = channel(1, None, Some(vec![deny_view(100)]));
        let parent = channel(2, Some(1), None);
        let child = channel(20, Some(2), None);
        let channels = vec![grandparent, parent, child.clone()];

        assert!(effective_overwrites(&child, &channels).is_empty());
    }

    #[test]
    fn test_everyone_overwrite_ignores_member_kind() {
        let overwrites = vec![
            PermissionOverwrite::member(Snowflake(100), PermissionBitSet(1024), PermissionBitSet(0)),
            deny_view(100),
        ];

        assert_eq!(everyone_overwrite(Snowflake(100), &overwrites), Some(&overwrites[1]));
        assert_eq!(everyone_overwrite(Snowflake(101), &overwrites), None);
    }

    #[test]
    fn test_combined_role_overwrites() {
        let overwrites = vec![
            PermissionOverwrite::role(Snowflake(200), PermissionBitSet(1024), PermissionBitSet(0)),
            PermissionOverwrite::role(Snowflake(201), PermissionBitSet(2048), PermissionBitSet(1024)),
            PermissionOverwrite::role(Snowflake(202), PermissionBitSet(4096), PermissionBitSet(0)),
            PermissionOverwrite::member(Snowflake(203), PermissionBitSet(8192), PermissionBitSet(0)),
        ];

        let (allow, deny) =
            combined_role_overwrites(&[Snowflake(200), Snowflake(201), Snowflake(203)], &overwrites);
        assert_eq!(allow, PermissionBitSet(1024 | 2048));
        assert_eq!(deny, PermissionBitSet(1024));

        let (allow, deny) = combined_role_overwrites(&[], &overwrites);
        assert!(allow.is_empty());
        assert!(deny.is_empty());
    }

    #[test]
    fn test_member_overwrite() {
        let overwrites = vec![
            PermissionOverwrite::role(Snowflake(5), PermissionBitSet(1), PermissionBitSet(2)),
            PermissionOverwrite::member(Snowflake(5), PermissionBitSet(1024), PermissionBitSet(8)),
        ];

        assert_eq!(
            member_overwrite(Snowflake(5), &overwrites),
            Some((PermissionBitSet(1024), PermissionBitSet(8)))
        );
        assert_eq!(member_overwrite(Snowflake(6), &overwrites), None);
    }
}
