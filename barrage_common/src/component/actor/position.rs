use crate::{
    entity::chunk::Chunk,
    math::{
        Vec3F32,
        Vec3I32,
    },
};
use serde::{
    Deserialize,
    Serialize,
};
use std::ops::Add;

/// Position in the world space of a dimension.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct Position {
    pub dimension: u32,
    pub vector: Vec3F32,
}

impl Position {
    pub fn new(dimension: u32, vector: Vec3F32) -> Self {
        Self { dimension, vector }
    }

    /// World coordinates of the block the position is in.
    pub fn block_coords(&self) -> Vec3I32 {
        self.vector.floor().as_ivec3()
    }

    pub fn chunk(&self) -> Chunk {
        Chunk::from_block(self.dimension, self.block_coords())
    }
}

impl Add<Vec3F32> for Position {
    type Output = Self;

    fn add(self, other: Vec3F32) -> Self {
        Position {
            dimension: self.dimension,
            vector: self.vector + other,
        }
    }
}
