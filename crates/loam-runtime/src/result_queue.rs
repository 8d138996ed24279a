use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::JobOut;

/// Mutex-guarded hand-off from workers to the draining thread.
#[derive(Default)]
pub struct ResultQueue {
    items: Mutex<Vec<JobOut>>,
}

impl ResultQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JobOut>> {
        // A panicking pusher cannot leave the Vec half-written.
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, out: JobOut) {
        self.lock().push(out);
    }

    /// Swaps the whole queue out in one critical section.
    pub fn take_all(&self) -> Vec<JobOut> {
        mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_chunk::ChunkCoord;
    use loam_mesh_cpu::MeshData;
    use std::sync::Arc;
    use std::thread;

    fn out(cx: i32) -> JobOut {
        JobOut {
            mesh: MeshData::new(ChunkCoord::new(cx, 0)),
            job_id: cx as u64,
            t_mesh_ms: 0,
        }
    }

    #[test]
    fn take_all_empties_queue() {
        let q = ResultQueue::new();
        q.push(out(1));
        q.push(out(2));
        assert_eq!(q.len(), 2);
        let items = q.take_all();
        assert_eq!(items.len(), 2);
        assert!(q.is_empty());
        assert!(q.take_all().is_empty());
    }

    #[test]
    fn concurrent_pushes_are_all_kept() {
        let q = Arc::new(ResultQueue::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let q = Arc::clone(&q);
                thread::spawn(move || {
                    for i in 0..50 {
                        q.push(out(t * 100 + i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let mut ids: Vec<u64> = q.take_all().into_iter().map(|o| o.job_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }
}
