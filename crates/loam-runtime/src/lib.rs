//! Background mesh building: worker pool, result queue, and the drain step.
#![forbid(unsafe_code)]

mod result_queue;
mod sink;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Sender, unbounded};
use hashbrown::HashMap;
use loam_chunk::ChunkCoord;
use loam_mesh_cpu::{MeshData, build_mesh_from};
use loam_world::{ChunkNeighborhood, World};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

pub use crate::result_queue::ResultQueue;
pub use crate::sink::{CpuMeshStore, MeshSink};

/// One chunk to mesh. The snapshot freezes the chunk and its four axis
/// neighbours at submit time, so workers never touch the live world.
#[derive(Clone, Debug)]
pub struct BuildJob {
    pub snapshot: ChunkNeighborhood,
    pub job_id: u64,
}

impl BuildJob {
    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.snapshot.coord()
    }
}

pub struct JobOut {
    pub mesh: MeshData,
    pub job_id: u64,
    pub t_mesh_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Worker threads; `None` uses the available hardware parallelism.
    pub workers: Option<usize>,
}

impl PipelineConfig {
    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(n) => n.max(1),
            None => thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

/// What one drain call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainStats {
    pub installed: usize,
    pub dropped: usize,
}

pub struct MeshPipeline {
    job_tx: Sender<BuildJob>,
    results: Arc<ResultQueue>,
    _pool: Arc<ThreadPool>,
    queued: Arc<AtomicUsize>,
    inflight: Arc<AtomicUsize>,
    /// Latest job id per chunk with a build outstanding.
    pending: HashMap<ChunkCoord, u64>,
    next_job_id: u64,
    workers: usize,
}

impl MeshPipeline {
    pub fn new(cfg: &PipelineConfig) -> Result<Self, ThreadPoolBuildError> {
        let (job_tx, job_rx) = unbounded::<BuildJob>();
        let results = Arc::new(ResultQueue::new());
        let queued = Arc::new(AtomicUsize::new(0));
        let inflight = Arc::new(AtomicUsize::new(0));

        let workers = cfg.worker_count();
        let pool = Arc::new(
            ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("loam-mesh-{i}"))
                .build()?,
        );
        for _ in 0..workers {
            let rx = job_rx.clone();
            let results = Arc::clone(&results);
            let queued = Arc::clone(&queued);
            let inflight = Arc::clone(&inflight);
            pool.spawn(move || {
                while let Ok(job) = rx.recv() {
                    // Running before dequeued, so is_idle never misses the job.
                    inflight.fetch_add(1, Ordering::SeqCst);
                    queued.fetch_sub(1, Ordering::SeqCst);
                    let out = process_build_job(job);
                    results.push(out);
                    inflight.fetch_sub(1, Ordering::SeqCst);
                }
            });
        }
        log::info!("mesh pipeline started with {} workers", workers);

        Ok(Self {
            job_tx,
            results,
            _pool: pool,
            queued,
            inflight,
            pending: HashMap::new(),
            next_job_id: 0,
            workers,
        })
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Submits a build for every chunk that is dirty with nothing in flight.
    /// Returns the number of jobs sent. Never blocks on the workers.
    pub fn tick(&mut self, world: &mut World) -> usize {
        let starting: Vec<ChunkCoord> = world
            .chunks_mut()
            .filter_map(|chunk| chunk.begin_build().then_some(chunk.coord()))
            .collect();
        let mut submitted = 0;
        for coord in starting {
            let Some(snapshot) = world.snapshot(coord) else {
                continue;
            };
            self.next_job_id += 1;
            let job = BuildJob {
                snapshot,
                job_id: self.next_job_id,
            };
            self.pending.insert(coord, job.job_id);
            self.queued.fetch_add(1, Ordering::SeqCst);
            if self.job_tx.send(job).is_err() {
                // Workers are gone; leave the chunk dirty for a later tick.
                self.queued.fetch_sub(1, Ordering::SeqCst);
                self.pending.remove(&coord);
                if let Some(chunk) = world.chunk_mut(coord) {
                    chunk.finish_build();
                    chunk.mark_dirty();
                }
                continue;
            }
            submitted += 1;
        }
        if submitted > 0 {
            log::debug!("tick: submitted {} mesh jobs", submitted);
        }
        submitted
    }

    /// Installs every finished build. Results for chunks that no longer
    /// exist, or that were superseded by a newer job, are dropped.
    pub fn drain(&mut self, world: &mut World, sink: &mut impl MeshSink) -> DrainStats {
        let mut stats = DrainStats::default();
        let drained = self.results.take_all();
        if drained.is_empty() {
            return stats;
        }
        let t0 = Instant::now();
        for out in drained {
            let coord = out.mesh.coord();
            if self.pending.get(&coord) != Some(&out.job_id) {
                log::debug!(
                    "drain: dropping superseded result for ({}, {}) job={}",
                    coord.cx,
                    coord.cz,
                    out.job_id
                );
                stats.dropped += 1;
                continue;
            }
            self.pending.remove(&coord);
            let Some(chunk) = world.chunk_mut(coord) else {
                log::debug!(
                    "drain: chunk ({}, {}) vanished, dropping result",
                    coord.cx,
                    coord.cz
                );
                stats.dropped += 1;
                continue;
            };
            chunk.install_meshes(sink.upload(out.mesh));
            chunk.finish_build();
            stats.installed += 1;
        }
        let ms = t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        log::debug!(
            target: "perf",
            "ms={} mesh_drain installed={} dropped={}",
            ms,
            stats.installed,
            stats.dropped
        );
        stats
    }

    /// `(queued, running, undrained)` job counts.
    pub fn queue_debug_counts(&self) -> (usize, usize, usize) {
        (
            self.queued.load(Ordering::SeqCst),
            self.inflight.load(Ordering::SeqCst),
            self.results.len(),
        )
    }

    #[inline]
    pub fn pending_chunks(&self) -> usize {
        self.pending.len()
    }

    /// No job is queued, running, or waiting to be drained.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
            && self.queued.load(Ordering::SeqCst) == 0
            && self.inflight.load(Ordering::SeqCst) == 0
            && self.results.is_empty()
    }
}

fn process_build_job(job: BuildJob) -> JobOut {
    let t0 = Instant::now();
    let mesh = build_mesh_from(&job.snapshot);
    JobOut {
        mesh,
        job_id: job.job_id,
        t_mesh_ms: t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32,
    }
}
