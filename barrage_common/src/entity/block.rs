use crate::{
    entity::chunk::Chunk,
    math::Vec3I32,
};

pub const BLOCKS_IN_CHUNK_EDGE: usize = 16;
pub const BLOCKS_IN_CHUNK_LAYER: usize = BLOCKS_IN_CHUNK_EDGE * BLOCKS_IN_CHUNK_EDGE;
pub const BLOCKS_IN_CHUNK: usize =
    BLOCKS_IN_CHUNK_EDGE * BLOCKS_IN_CHUNK_EDGE * BLOCKS_IN_CHUNK_EDGE;

pub const BLOCKS_IN_CHUNK_EDGE_F32: f32 = BLOCKS_IN_CHUNK_EDGE as f32;

pub const BLOCKS_IN_CHUNK_EDGE_I32: i32 = BLOCKS_IN_CHUNK_EDGE as i32;

/// Block index inside of a chunk.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub struct Block(pub usize);

pub type BlockCoords = [usize; 3];

impl std::hash::Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        hasher.write_u16(self.0 as u16)
    }
}

impl nohash_hasher::IsEnabled for Block {}

impl Block {
    pub fn into_coords(self) -> BlockCoords {
        let z = self.0 / BLOCKS_IN_CHUNK_LAYER;
        let x_y = self.0 % BLOCKS_IN_CHUNK_LAYER;
        let y = x_y / BLOCKS_IN_CHUNK_EDGE;
        let x = x_y % BLOCKS_IN_CHUNK_EDGE;

        [x, y, z]
    }

    pub fn from_coords([x, y, z]: BlockCoords) -> Self {
        Self(z * BLOCKS_IN_CHUNK_LAYER + y * BLOCKS_IN_CHUNK_EDGE + x)
    }

    /// Splits world block coordinates into the chunk and the block inside of it.
    pub fn from_global(dimension: u32, global: Vec3I32) -> (Chunk, Self) {
        let chunk = Chunk::from_block(dimension, global);
        let local = global - chunk.position * BLOCKS_IN_CHUNK_EDGE_I32;

        let block = Self::from_coords([local.x as usize, local.y as usize, local.z as usize]);

        (chunk, block)
    }

    /// World block coordinates of the block in the given chunk.
    pub fn to_global(self, chunk: &Chunk) -> Vec3I32 {
        let [x, y, z] = self.into_coords();

        chunk.position * BLOCKS_IN_CHUNK_EDGE_I32 + Vec3I32::new(x as i32, y as i32, z as i32)
    }
}
