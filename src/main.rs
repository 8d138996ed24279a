mod app;
mod config;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::app::RunOptions;
use crate::config::RunConfig;

const DEFAULT_SEED: u32 = 1337;
const DEFAULT_VIEW_DISTANCE: i32 = 4;

/// Generates terrain around a viewer and meshes it on a worker pool.
#[derive(Parser, Debug)]
#[command(name = "loam", version, about)]
struct Args {
    /// World seed.
    #[arg(long)]
    seed: Option<u32>,
    /// Square radius, in chunks, generated around the viewer.
    #[arg(long)]
    view_distance: Option<i32>,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    viewer_x: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    viewer_z: f32,
    /// Run configuration (TOML) with an optional `[worldgen]` table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Structure templates (TOML) with `[tree]` and `[cactus]` tables.
    #[arg(long)]
    structures: Option<PathBuf>,
    /// Mesh worker threads; defaults to the available parallelism.
    #[arg(long)]
    workers: Option<usize>,
    /// Give up after this many update/tick/drain rounds.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let file = match args.config.as_deref() {
        Some(path) => {
            log::info!("loading config {}", path.display());
            RunConfig::from_path(path)?
        }
        None => RunConfig::default(),
    };

    let opts = RunOptions {
        seed: args.seed.or(file.seed).unwrap_or(DEFAULT_SEED),
        view_distance: args
            .view_distance
            .or(file.view_distance)
            .unwrap_or(DEFAULT_VIEW_DISTANCE),
        viewer_x: args.viewer_x,
        viewer_z: args.viewer_z,
        workers: args.workers.or(file.workers),
        structures: args.structures.or(file.structures),
        worldgen: file.worldgen,
        max_ticks: args.max_ticks,
    };
    let summary = app::run(&opts)?;
    if !summary.converged {
        log::warn!(
            "stopped after {} ticks with work outstanding",
            summary.ticks
        );
    }
    Ok(())
}
