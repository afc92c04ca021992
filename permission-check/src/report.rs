use crate::{GuildSnapshot, Result};
use chrono::{DateTime, Utc};
use model::channel::Channel;
use model::Snowflake;
use permissions::{resolve_channel_permissions, PermissionResolution};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct ChannelEntry<'a> {
    pub channel_id: Snowflake,
    pub channel_name: &'a str,
    pub channel_type: &'static str,
    pub category_id: Option<Snowflake>,
    pub created_at: Option<DateTime<Utc>>,
    pub permission_names: Vec<&'static str>,
    pub resolution: PermissionResolution,
}

#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: Option<&'a Channel>,
    pub channels: Vec<ChannelEntry<'a>>,
}

/// Groups channels the way the client lists them: uncategorized channels
/// first, then each category in position order. Threads are not listed, and
/// channels whose category is missing are treated as uncategorized.
pub fn group_by_category(channels: &[Channel]) -> Vec<(Option<&Channel>, Vec<&Channel>)> {
    let mut categories: Vec<&Channel> = channels
        .iter()
        .filter(|ch| ch.channel_type.is_category())
        .collect();
    categories.sort_by_key(|ch| ch.position);

    let listed = |ch: &&Channel| !ch.channel_type.is_category() && !ch.channel_type.is_thread();
    let has_category = |ch: &&Channel| match ch.parent_id {
        Some(parent_id) => categories.iter().any(|cat| cat.id == parent_id),
        None => false,
    };

    let mut groups = Vec::with_capacity(categories.len() + 1);

    let mut uncategorized: Vec<&Channel> = channels
        .iter()
        .filter(listed)
        .filter(|ch| !has_category(ch))
        .collect();
    uncategorized.sort_by_key(|ch| ch.position);
    groups.push((None, uncategorized));

    for category in &categories {
        let mut children: Vec<&Channel> = channels
            .iter()
            .filter(listed)
            .filter(|ch| ch.parent_id == Some(category.id))
            .collect();
        children.sort_by_key(|ch| ch.position);
        groups.push((Some(*category), children));
    }

    groups.retain(|(_, children)| !children.is_empty());
    groups
}

pub fn build_report(
    snapshot: &GuildSnapshot,
    show_hidden: bool,
) -> Result<Vec<CategoryGroup<'_>>> {
    let mut report = Vec::new();

    for (category, channels) in group_by_category(&snapshot.channels) {
        let mut entries = Vec::with_capacity(channels.len());

        for channel in channels {
            let resolution = resolve_channel_permissions(
                &snapshot.member,
                channel,
                &snapshot.roles,
                &snapshot.channels,
                snapshot.guild.id,
            )?;

            debug!(
                channel_id = %channel.id,
                allowed = resolution.allowed,
                administrator = resolution.has_administrator,
                final_permissions = %resolution.final_permissions,
                "Resolved channel permissions"
            );

            if resolution.allowed || show_hidden {
                entries.push(ChannelEntry {
                    channel_id: channel.id,
                    channel_name: &channel.name,
                    channel_type: channel.channel_type.name(),
                    category_id: category.map(|cat| cat.id),
                    created_at: channel.id.timestamp(),
                    permission_names: resolution.final_permissions.names(),
                    resolution,
                });
            }
        }

        if !entries.is_empty() {
            report.push(CategoryGroup {
                category,
                channels: entries,
            });
        }
    }

    Ok(report)
}

pub fn write_text<W: Write>(
    w: &mut W,
    snapshot: &GuildSnapshot,
    report: &[CategoryGroup<'_>],
) -> io::Result<()> {
    writeln!(
        w,
        "{} ({}) as {}",
        snapshot.guild.name,
        snapshot.guild.id,
        snapshot.member.user.display_name()
    )?;

    for group in report {
        writeln!(w, "{}", group.category.map_or("Uncategorized", |cat| &*cat.name))?;

        for entry in &group.channels {
            let verdict = if entry.resolution.allowed { "allowed" } else { "denied" };
            let admin = if entry.resolution.has_administrator { " [admin]" } else { "" };

            writeln!(
                w,
                "  #{} ({}) {}{}",
                entry.channel_name, entry.channel_type, verdict, admin
            )?;
        }
    }

    Ok(())
}

pub fn write_json<W: Write>(w: &mut W, report: &[CategoryGroup<'_>]) -> Result<()> {
    let entries: Vec<&ChannelEntry<'_>> = report
        .iter()
        .flat_map(|group| group.channels.iter())
        .collect();

    serde_json::to_writer_pretty(&mut *w, &entries)?;
    writeln!(w)?;
    Ok(())
}
