use hashbrown::HashMap;
use loam_chunk::{ChunkCoord, ChunkMeshes, MeshSlot};
use loam_mesh_cpu::{MeshBuild, MeshData};

/// The graphics side of the drain step: takes ownership of finished
/// geometry and reports what it now holds for the chunk.
pub trait MeshSink {
    fn upload(&mut self, mesh: MeshData) -> ChunkMeshes;
}

/// Headless sink that keeps the latest geometry per chunk in memory.
#[derive(Default)]
pub struct CpuMeshStore {
    meshes: HashMap<ChunkCoord, MeshData>,
    next_handle: u64,
    uploads: usize,
}

impl CpuMeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&MeshData> {
        self.meshes.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total uploads, including ones that replaced earlier geometry.
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    pub fn total_quads(&self) -> usize {
        self.meshes
            .values()
            .map(|m| m.opaque.quad_count() + m.transparent.quad_count())
            .sum()
    }

    fn slot(&mut self, build: &MeshBuild) -> MeshSlot {
        if build.is_empty() {
            return MeshSlot::default();
        }
        self.next_handle += 1;
        MeshSlot {
            handle: Some(self.next_handle),
            vertex_count: build.vertices.len() as u32,
            index_count: build.indices.len() as u32,
        }
    }
}

impl MeshSink for CpuMeshStore {
    fn upload(&mut self, mesh: MeshData) -> ChunkMeshes {
        let meshes = ChunkMeshes {
            opaque: self.slot(&mesh.opaque),
            transparent: self.slot(&mesh.transparent),
        };
        self.uploads += 1;
        self.meshes.insert(mesh.coord(), mesh);
        meshes
    }
}
