use permission_check::report::{build_report, write_json, write_text};
use permission_check::{Config, GuildSnapshot, Result};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    configure_logging(&config);

    if let Err(e) = run(&config) {
        error!(error = %e, "Permission check failed");
        return Err(e);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    info!(path = %config.snapshot_path, "Loading guild snapshot");
    let snapshot = GuildSnapshot::load(&config.snapshot_path)?;

    info!(
        guild_id = %snapshot.guild.id,
        user_id = %snapshot.member.user.id,
        roles = snapshot.roles.len(),
        channels = snapshot.channels.len(),
        "Loaded guild snapshot"
    );

    let report = build_report(&snapshot, config.show_hidden)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.output_json {
        write_json(&mut out, &report)?;
    } else {
        write_text(&mut out, &snapshot, &report)?;
    }

    out.flush()?;
    Ok(())
}

fn configure_logging(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
