use crate::{
    entity::block::BLOCKS_IN_CHUNK_EDGE_I32,
    math::Vec3I32,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::cmp::Ordering;

#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct Chunk {
    pub position: Vec3I32,
    pub dimension: u32,
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.dimension.cmp(&other.dimension) {
            Ordering::Equal => {
                match self.position[2].cmp(&other.position[2]) {
                    Ordering::Equal => {
                        match self.position[1].cmp(&other.position[1]) {
                            Ordering::Equal => self.position[0].cmp(&other.position[0]),
                            o => o,
                        }
                    },
                    o => o,
                }
            },
            o => o,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Chunk {
    /// Chunk that contains the block with the given world coordinates.
    pub fn from_block(dimension: u32, block: Vec3I32) -> Self {
        Self {
            position: Vec3I32::new(
                block.x.div_euclid(BLOCKS_IN_CHUNK_EDGE_I32),
                block.y.div_euclid(BLOCKS_IN_CHUNK_EDGE_I32),
                block.z.div_euclid(BLOCKS_IN_CHUNK_EDGE_I32),
            ),
            dimension,
        }
    }

    pub fn radius(&self, radius: i32) -> ChunkRadius {
        ChunkRadius {
            dimension: self.dimension,
            min_position: self.position.saturating_sub(Vec3I32::splat(radius)),
            max_position: self.position.saturating_add(Vec3I32::splat(radius)),
        }
    }
}

/// Inclusive cube of chunks around a center chunk.
#[derive(Clone, Copy, Debug)]
pub struct ChunkRadius {
    dimension: u32,
    min_position: Vec3I32,
    max_position: Vec3I32,
}

impl ChunkRadius {
    pub fn is_within(&self, chunk: &Chunk) -> bool {
        chunk.dimension == self.dimension
            && chunk.position.cmpge(self.min_position).all()
            && chunk.position.cmple(self.max_position).all()
    }

    pub fn into_iter(self) -> impl Iterator<Item = Chunk> {
        (self.min_position.z ..= self.max_position.z).flat_map(move |z| {
            (self.min_position.y ..= self.max_position.y).flat_map(move |y| {
                (self.min_position.x ..= self.max_position.x).map(move |x| {
                    Chunk {
                        position: Vec3I32::new(x, y, z),
                        dimension: self.dimension,
                    }
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_inclusive() {
        let center = Chunk {
            position: Vec3I32::new(0, 0, 0),
            dimension: 1,
        };
        let radius = center.radius(1);

        assert_eq!(radius.into_iter().count(), 27);
        assert!(radius.is_within(&Chunk {
            position: Vec3I32::new(1, -1, 1),
            dimension: 1,
        }));
        assert!(!radius.is_within(&Chunk {
            position: Vec3I32::new(1, -1, 1),
            dimension: 0,
        }));
    }
}
