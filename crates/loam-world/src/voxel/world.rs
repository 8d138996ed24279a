use hashbrown::HashMap;
use loam_blocks::BlockId;
use loam_chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Z, Chunk, ChunkCoord, world_to_chunk};
use loam_noise::GradientNoise;
use loam_structures::StructureSet;

use crate::worldgen::WorldGenConfig;

/// Sparse chunk registry plus everything needed to generate more chunks.
///
/// Only the owning thread inserts or replaces chunks; everything else goes
/// through the `&self` query methods.
pub struct World {
    seed: u32,
    noise: GradientNoise,
    params: WorldGenConfig,
    structures: StructureSet,
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl World {
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, WorldGenConfig::default(), StructureSet::default())
    }

    pub fn with_config(seed: u32, params: WorldGenConfig, structures: StructureSet) -> Self {
        Self {
            seed,
            noise: GradientNoise::new(seed),
            params,
            structures,
            chunks: HashMap::new(),
        }
    }

    /// Reseeds the noise tables and drops every chunk.
    pub fn init(&mut self, seed: u32) {
        self.seed = seed;
        self.noise = GradientNoise::new(seed);
        self.chunks.clear();
        log::info!("world initialised (seed={})", seed);
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn params(&self) -> &WorldGenConfig {
        &self.params
    }

    #[inline]
    pub fn structures(&self) -> &StructureSet {
        &self.structures
    }

    #[inline]
    pub fn noise(&self) -> &GradientNoise {
        &self.noise
    }

    /// Block at world coordinates; `Air` for missing chunks and out-of-range y.
    pub fn get_block(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        let (coord, lx, lz) = world_to_chunk(wx, wz);
        match self.chunks.get(&coord) {
            Some(c) => c.get_block(lx, wy, lz),
            None => BlockId::Air,
        }
    }

    #[inline]
    pub fn is_opaque(&self, wx: i32, wy: i32, wz: i32) -> bool {
        self.get_block(wx, wy, wz).is_opaque()
    }

    /// Writes one voxel in world space. The owning chunk goes dirty, and so
    /// does the neighbor across any chunk border the voxel touches. Returns
    /// false when the chunk is missing, y is out of range, or nothing changed.
    pub fn set_block(&mut self, wx: i32, wy: i32, wz: i32, id: BlockId) -> bool {
        let (coord, lx, lz) = world_to_chunk(wx, wz);
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        if !chunk.set_block(lx, wy, lz, id) {
            return false;
        }
        let mut touched = Vec::with_capacity(2);
        if lx == 0 {
            touched.push(coord.offset(-1, 0));
        } else if lx == CHUNK_SIZE_X as i32 - 1 {
            touched.push(coord.offset(1, 0));
        }
        if lz == 0 {
            touched.push(coord.offset(0, -1));
        } else if lz == CHUNK_SIZE_Z as i32 - 1 {
            touched.push(coord.offset(0, 1));
        }
        for n in touched {
            if let Some(c) = self.chunks.get_mut(&n) {
                c.mark_dirty();
            }
        }
        true
    }

    #[inline]
    pub fn has_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    #[inline]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn chunks_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
        self.chunks.values_mut()
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Stores a chunk under its own coordinate, returning the one it replaced.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(chunk.coord(), chunk)
    }

    pub(crate) fn clear_chunks(&mut self) {
        self.chunks.clear();
    }

    /// Generates every missing chunk within `view_distance` (square radius)
    /// of the viewer. Each new chunk starts dirty and dirties its existing
    /// axis neighbors, whose border faces may have changed. Returns how many
    /// chunks were generated.
    pub fn update(&mut self, viewer_x: f32, viewer_z: f32, view_distance: i32) -> usize {
        let center = ChunkCoord::containing_f32(viewer_x, viewer_z);
        let r = view_distance.max(0);
        let mut generated = 0;
        for dz in -r..=r {
            for dx in -r..=r {
                let coord = center.offset(dx, dz);
                if !coord.in_range() || self.chunks.contains_key(&coord) {
                    continue;
                }
                self.generate_chunk(coord.cx, coord.cz);
                for n in coord.neighbors4() {
                    if let Some(c) = self.chunks.get_mut(&n) {
                        c.mark_dirty();
                    }
                }
                generated += 1;
            }
        }
        if generated > 0 {
            log::debug!(
                "update: generated {} chunks around ({}, {}) r={}",
                generated,
                center.cx,
                center.cz,
                r
            );
        }
        generated
    }

    /// Existing chunks within `view_distance` of the viewer, nearest first.
    pub fn visible_chunks(
        &self,
        viewer_x: f32,
        viewer_z: f32,
        view_distance: i32,
    ) -> Vec<ChunkCoord> {
        let center = ChunkCoord::containing_f32(viewer_x, viewer_z);
        let r = view_distance.max(0);
        let mut out: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .copied()
            .filter(|c| c.chebyshev(center) <= r)
            .collect();
        out.sort_by_key(|c| (c.chebyshev(center), c.cz, c.cx));
        out
    }
}
