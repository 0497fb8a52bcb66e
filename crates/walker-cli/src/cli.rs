// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command definitions and handlers for the `walker` binary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walker_app_core::config::{ConfigService, ConfigStore};
use walker_config_fs::FsConfigStore;
use walker_geom::{selftest, CollisionWorld, Vertex};
use walker_math::deg_to_rad;
use walker_motion::{WalkInput, Walker, WalkerConfig};

/// Config store key holding the [`WalkerConfig`].
pub const CONFIG_KEY: &str = "walker";

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "walker")]
#[command(about = "Scenewalker collision tools")]
pub struct Cli {
    /// Override the platform config directory
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the analytic collision regression suite
    Selftest,
    /// Walk through a mesh headlessly and print one JSON line per tick
    Simulate(SimulateArgs),
    /// Write the default walker config to the config store
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

/// Options for `walker simulate`.
#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Path to a mesh file (`{"vertices": [[x, y, z], ...]}`)
    #[arg(long)]
    pub mesh: PathBuf,
    /// Walker config JSON; defaults to the config store, then built-ins
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of ticks to run
    #[arg(long, default_value = "120")]
    pub ticks: u32,
    /// Forward input in [-1, 1]
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub forward: f32,
    /// Strafe input in [-1, 1]
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub strafe: f32,
    /// View heading in degrees
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub yaw: f32,
    /// Tick on which to request a jump
    #[arg(long)]
    pub jump_at: Option<u32>,
}

/// On-disk mesh format: a flat triangle list of positions.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeshFile {
    /// Three consecutive entries form one triangle.
    pub vertices: Vec<[f32; 3]>,
}

impl MeshFile {
    /// Converts positions into loader vertices.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices.iter().copied().map(Vertex::from).collect()
    }
}

/// One line of `simulate` output.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TickLine {
    /// Tick index, starting at zero.
    pub tick: u32,
    /// World-space centre after the tick.
    pub position: [f32; 3],
    /// Whether the walker is on the ground.
    pub grounded: bool,
}

/// Reads a [`MeshFile`] from `path`.
pub fn read_mesh(path: &Path) -> Result<MeshFile> {
    let bytes = fs::read(path).with_context(|| format!("failed to read mesh {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid mesh file {}", path.display()))
}

/// Picks the walker config: explicit file, then the store, then defaults.
pub fn resolve_config<S: ConfigStore>(
    explicit: Option<&Path>,
    store: Option<S>,
) -> Result<WalkerConfig> {
    if let Some(path) = explicit {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read config {}", path.display()))?;
        return serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid walker config {}", path.display()));
    }
    match store {
        Some(store) => ConfigService::new(store)
            .load_or_default(CONFIG_KEY)
            .context("failed to load walker config from store"),
        None => Ok(WalkerConfig::default()),
    }
}

/// Runs the walker through `mesh` for `args.ticks` ticks, writing one JSON
/// line per tick to `out`.
pub fn simulate(
    args: &SimulateArgs,
    config: WalkerConfig,
    mesh: &MeshFile,
    out: &mut impl Write,
) -> Result<()> {
    let mut walker = Walker::new(config).context("invalid walker config")?;
    let mut world = CollisionWorld::new();
    let report = walker
        .load_mesh(&mut world, &mesh.to_vertices())
        .context("failed to load collision mesh")?;
    if report.skipped_degenerate > 0 || report.trailing_vertices > 0 {
        warn!(
            skipped = report.skipped_degenerate,
            trailing = report.trailing_vertices,
            "mesh had unusable vertices"
        );
    }
    info!(triangles = report.triangles, ticks = args.ticks, "simulating");

    let yaw = deg_to_rad(args.yaw);
    for tick in 0..args.ticks {
        let input = WalkInput {
            forward: args.forward,
            strafe: args.strafe,
            jump: args.jump_at == Some(tick),
        };
        let step = walker.tick(&world, input, yaw);
        let line = TickLine {
            tick,
            position: step.position.to_array(),
            grounded: step.grounded,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    match dir {
        Some(dir) => FsConfigStore::at(dir)
            .with_context(|| format!("failed to open config dir {}", dir.display())),
        None => FsConfigStore::new().context("failed to open platform config dir"),
    }
}

fn init_config(dir: Option<&Path>, force: bool) -> Result<()> {
    let store = open_store(dir)?;
    let path = store.path_for(CONFIG_KEY);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    ConfigService::new(store)
        .save(CONFIG_KEY, &WalkerConfig::default())
        .context("failed to write walker config")?;
    info!(path = %path.display(), "wrote default walker config");
    Ok(())
}

/// Parses arguments, installs logging, and runs the chosen command.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Selftest => {
            selftest::run().context("collision self-test failed")?;
        }
        Commands::Simulate(args) => {
            let mesh = read_mesh(&args.mesh)?;
            let store = if args.config.is_some() {
                None
            } else {
                match open_store(cli.config_dir.as_deref()) {
                    Ok(store) => Some(store),
                    Err(err) => {
                        warn!(error = %err, "config store unavailable, using defaults");
                        None
                    }
                }
            };
            let config = resolve_config(args.config.as_deref(), store)?;
            let stdout = io::stdout();
            simulate(&args, config, &mesh, &mut stdout.lock())?;
        }
        Commands::InitConfig { force } => init_config(cli.config_dir.as_deref(), force)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use walker_dry_tests::{meshes, InMemoryConfigStore};

    fn args(ticks: u32) -> SimulateArgs {
        SimulateArgs {
            mesh: PathBuf::from("unused.json"),
            config: None,
            ticks,
            forward: 0.0,
            strafe: 0.0,
            yaw: 0.0,
            jump_at: None,
        }
    }

    #[test]
    fn resolve_prefers_store_over_defaults() {
        let custom = WalkerConfig {
            gravity: 0.05,
            ..WalkerConfig::default()
        };
        let store = InMemoryConfigStore::with_entry(
            CONFIG_KEY,
            &serde_json::to_vec(&custom).expect("json"),
        );
        let cfg = resolve_config(None, Some(store)).expect("resolve");
        assert_eq!(cfg, custom);

        let cfg = resolve_config::<InMemoryConfigStore>(None, None).expect("resolve");
        assert_eq!(cfg, WalkerConfig::default());
    }

    #[test]
    fn resolve_surfaces_store_failures() {
        let store = InMemoryConfigStore::new();
        store.set_fail_on_load(true);
        assert!(resolve_config(None, Some(store)).is_err());
    }

    #[test]
    fn simulate_writes_one_json_line_per_tick() {
        let mesh = MeshFile {
            vertices: meshes::positions(&meshes::floor(20.0, 0.0)),
        };
        let config = WalkerConfig {
            spawn: [0.3, 1.2, -1.1],
            ..WalkerConfig::default()
        };
        let mut out = Vec::new();
        simulate(&args(30), config, &mesh, &mut out).expect("simulate");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<TickLine> = text
            .lines()
            .map(|l| serde_json::from_str(l).expect("tick line"))
            .collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0].tick, 0);
        let last = lines.last().expect("last line");
        assert!(last.grounded);
        assert!((last.position[1] - 0.8).abs() < 1e-3);
    }

    #[test]
    fn simulate_rejects_invalid_config() {
        let mesh = MeshFile { vertices: vec![] };
        let config = WalkerConfig {
            radii: [0.0, 0.8, 0.4],
            ..WalkerConfig::default()
        };
        assert!(simulate(&args(1), config, &mesh, &mut Vec::new()).is_err());
    }
}
