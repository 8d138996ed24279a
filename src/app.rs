use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use loam_runtime::{CpuMeshStore, MeshPipeline, PipelineConfig};
use loam_structures::StructureSet;
use loam_world::{World, WorldGenConfig};

pub struct RunOptions {
    pub seed: u32,
    pub view_distance: i32,
    pub viewer_x: f32,
    pub viewer_z: f32,
    pub workers: Option<usize>,
    pub structures: Option<PathBuf>,
    pub worldgen: WorldGenConfig,
    pub max_ticks: u32,
}

#[derive(Debug)]
pub struct RunSummary {
    pub ticks: u32,
    pub chunks: usize,
    pub meshed: usize,
    pub quads: usize,
    pub converged: bool,
}

/// Generates the view square, then ticks and drains until every chunk holds
/// a current mesh or the tick limit is reached.
pub fn run(opts: &RunOptions) -> Result<RunSummary, Box<dyn Error>> {
    let structures = match opts.structures.as_deref() {
        Some(path) => {
            log::info!("loading structures {}", path.display());
            StructureSet::from_path(path)?
        }
        None => StructureSet::default(),
    };
    let mut world = World::with_config(opts.seed, opts.worldgen.clone(), structures);
    let mut pipeline = MeshPipeline::new(&PipelineConfig {
        workers: opts.workers,
    })?;
    let mut store = CpuMeshStore::new();

    let t0 = Instant::now();
    let mut ticks = 0;
    let mut converged = false;
    while ticks < opts.max_ticks {
        ticks += 1;
        world.update(opts.viewer_x, opts.viewer_z, opts.view_distance);
        pipeline.tick(&mut world);
        pipeline.drain(&mut world, &mut store);
        if pipeline.is_idle() && world.chunks().all(|c| !c.is_dirty()) {
            converged = true;
            break;
        }
        thread::sleep(Duration::from_millis(1));
    }

    let visible = world.visible_chunks(opts.viewer_x, opts.viewer_z, opts.view_distance);
    let summary = RunSummary {
        ticks,
        chunks: world.chunk_count(),
        meshed: store.len(),
        quads: store.total_quads(),
        converged,
    };
    log::info!(
        "meshed {} of {} chunks ({} visible, {} quads) in {} ticks, {} ms",
        summary.meshed,
        summary.chunks,
        visible.len(),
        summary.quads,
        summary.ticks,
        t0.elapsed().as_millis()
    );
    world.log_stats();
    Ok(summary)
}
