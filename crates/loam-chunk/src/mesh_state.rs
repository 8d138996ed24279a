/// Rebuild state of a chunk's geometry.
///
/// `Dirty` chunks are waiting for a build; `Building` chunks have a build
/// queued or running. An edit that lands while building sets `redirtied`,
/// so the finished build leaves the chunk `Dirty` instead of `Clean`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MeshState {
    Clean,
    #[default]
    Dirty,
    Building {
        redirtied: bool,
    },
}

impl MeshState {
    /// Stale geometry that will need (another) build.
    #[inline]
    pub fn is_dirty(self) -> bool {
        matches!(
            self,
            MeshState::Dirty | MeshState::Building { redirtied: true }
        )
    }

    #[inline]
    pub fn is_in_flight(self) -> bool {
        matches!(self, MeshState::Building { .. })
    }

    /// Eligible for submission: dirty and nothing in flight.
    #[inline]
    pub fn needs_submit(self) -> bool {
        matches!(self, MeshState::Dirty)
    }

    #[inline]
    pub(crate) fn marked_dirty(self) -> MeshState {
        match self {
            MeshState::Clean | MeshState::Dirty => MeshState::Dirty,
            MeshState::Building { .. } => MeshState::Building { redirtied: true },
        }
    }

    #[inline]
    pub(crate) fn submitted(self) -> Option<MeshState> {
        match self {
            MeshState::Dirty => Some(MeshState::Building { redirtied: false }),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn completed(self) -> MeshState {
        match self {
            MeshState::Building { redirtied: false } => MeshState::Clean,
            MeshState::Building { redirtied: true } => MeshState::Dirty,
            other => other,
        }
    }
}

/// Upload bookkeeping for one geometry group, owned by the renderer once set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshSlot {
    pub handle: Option<u64>,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl MeshSlot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index_count == 0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkMeshes {
    pub opaque: MeshSlot,
    pub transparent: MeshSlot,
}

impl ChunkMeshes {
    #[inline]
    pub fn has_geometry(&self) -> bool {
        !self.opaque.is_empty() || !self.transparent.is_empty()
    }
}
