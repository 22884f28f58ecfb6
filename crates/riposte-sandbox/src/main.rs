//! Command-line scene runner.
//!
//! Usage: `riposte-sandbox [SCENE] [CONFIG]`. The scene defaults to the
//! bundled `scenes/duel.toml` and the config to `riposte.toml`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use riposte_sandbox::{Sandbox, SandboxConfig, Scene};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/duel.toml");

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("riposte_sandbox=info".parse()?)
                .add_directive("riposte_collision=info".parse()?),
        )
        .init();

    info!("Riposte sandbox starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut args = env::args_os().skip(1);
    let scene_path = args.next().map_or_else(|| PathBuf::from(DEFAULT_SCENE), PathBuf::from);
    let mut config = match args.next() {
        Some(path) => SandboxConfig::load_from(PathBuf::from(path)),
        None => SandboxConfig::load(),
    };
    config.validate();

    let scene = Scene::load_from(&scene_path)
        .with_context(|| format!("loading scene {}", scene_path.display()))?;
    let mut sandbox = Sandbox::new(&scene, &config.collision).context("building sandbox")?;

    let summary = sandbox.run(config.frames, config.delta_time);
    info!(
        frames = summary.frames,
        hits = summary.hits,
        dropped = summary.dropped,
        "run complete"
    );

    for actor in sandbox.actors() {
        if let Some(tally) = actor.tally() {
            info!(
                received = tally.received,
                accepted = tally.accepted,
                dealt = tally.dealt,
                landed = tally.landed,
                "{}",
                actor.name()
            );
        }
    }

    Ok(())
}
