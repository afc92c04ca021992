use model::channel::{Channel, Permission};
use model::guild::{Member, Role};
use model::Snowflake;

use crate::overwrites::{
    combined_role_overwrites, effective_overwrites, everyone_overwrite, member_overwrite,
};
use crate::{PermissionError, PermissionResolution, Result};

/// The `@everyone` role shares its id with the guild.
pub fn everyone_role(roles: &[Role], guild_id: Snowflake) -> Option<&Role> {
    roles.iter().find(|role| role.id == guild_id)
}

/// Resolves `member`'s permissions in `channel` and whether they can view it.
///
/// `roles` and `channels` must be the guild's complete role and channel
/// lists. `channels` is only used to find the parent category when the
/// channel has no overwrites of its own.
pub fn resolve_channel_permissions(
    member: &Member,
    channel: &Channel,
    roles: &[Role],
    channels: &[Channel],
    guild_id: Snowflake,
) -> Result<PermissionResolution> {
    let everyone = everyone_role(roles, guild_id)
        .ok_or(PermissionError::InvariantViolation { guild_id })?;

    let base_permissions = everyone.permissions;

    if everyone.is_administrator() {
        return Ok(PermissionResolution::administrator(
            base_permissions,
            base_permissions,
        ));
    }

    // First administrator role in member order wins; the verdict is the same either way
    let admin_role = member
        .roles
        .iter()
        .filter_map(|role_id| roles.iter().find(|role| role.id == *role_id))
        .find(|role| role.is_administrator());

    if let Some(role) = admin_role {
        return Ok(PermissionResolution::administrator(
            base_permissions,
            role.permissions,
        ));
    }

    let overwrites = effective_overwrites(channel, channels);
    let mut permissions = base_permissions;

    if let Some(ow) = everyone_overwrite(guild_id, overwrites) {
        permissions = permissions.apply_overwrite(ow.allow, ow.deny);
    }

    let (role_allow, role_deny) = combined_role_overwrites(&member.roles, overwrites);
    permissions = permissions.apply_overwrite(role_allow, role_deny);

    let (member_allow, member_deny) =
        member_overwrite(member.user_id(), overwrites).unwrap_or_default();
    permissions = permissions.apply_overwrite(member_allow, member_deny);

    Ok(PermissionResolution {
        allowed: permissions.has_permission(Permission::ViewChannel),
        base_permissions,
        role_allow,
        role_deny,
        member_allow,
        member_deny,
        final_permissions: permissions,
        has_administrator: false,
    })
}

pub fn can_view_channel(
    member: &Member,
    channel: &Channel,
    roles: &[Role],
    channels: &[Channel],
    guild_id: Snowflake,
) -> Result<bool> {
    resolve_channel_permissions(member, channel, roles, channels, guild_id)
        .map(|resolution| resolution.allowed)
}

/// Channels from `channels` that `member` can view, in their original order.
pub fn visible_channels<'a>(
    member: &Member,
    roles: &[Role],
    channels: &'a [Channel],
    guild_id: Snowflake,
) -> Result<Vec<&'a Channel>> {
    let mut visible = Vec::new();

    for channel in channels {
        if can_view_channel(member, channel, roles, channels, guild_id)? {
            visible.push(channel);
        }
    }

    Ok(visible)
}
