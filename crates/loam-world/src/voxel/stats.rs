use loam_chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Z};

use super::World;

/// Surface height range over every generated column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightStats {
    pub min: i32,
    pub max: i32,
    pub chunks: usize,
}

impl World {
    /// `None` while no chunk has been generated.
    pub fn height_stats(&self) -> Option<HeightStats> {
        let mut stats: Option<HeightStats> = None;
        for chunk in self.chunks() {
            for z in 0..CHUNK_SIZE_Z as i32 {
                for x in 0..CHUNK_SIZE_X as i32 {
                    let h = chunk.column_height(x, z);
                    let s = stats.get_or_insert(HeightStats {
                        min: h,
                        max: h,
                        chunks: 0,
                    });
                    s.min = s.min.min(h);
                    s.max = s.max.max(h);
                }
            }
            if let Some(s) = stats.as_mut() {
                s.chunks += 1;
            }
        }
        stats
    }

    pub fn log_stats(&self) {
        match self.height_stats() {
            Some(s) => log::info!(
                "world stats: chunks={} min_height={} max_height={}",
                s.chunks,
                s.min,
                s.max
            ),
            None => log::info!("world stats: no chunks generated"),
        }
    }
}
