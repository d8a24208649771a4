use crate::{
    component::actor::position::Position,
    entity::chunk::Chunk,
};
use std::collections::BTreeMap;

/// Per-chunk data, ordered by dimension and then by z, y, x.
pub struct ChunkComponent<T> {
    chunks: BTreeMap<Chunk, T>,
}

impl<T> ChunkComponent<T> {
    pub fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, chunk: &Chunk) -> Option<&T> {
        self.chunks.get(chunk)
    }

    /// Value of the chunk that contains the position.
    pub fn get_at(&self, position: &Position) -> Option<&T> {
        self.chunks.get(&position.chunk())
    }

    pub fn get_mut(&mut self, chunk: &Chunk) -> Option<&mut T> {
        self.chunks.get_mut(chunk)
    }

    pub fn insert(&mut self, chunk: Chunk, value: T) -> Option<T> {
        self.chunks.insert(chunk, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chunk, &T)> {
        self.chunks.iter()
    }
}

impl<T> Default for ChunkComponent<T> {
    fn default() -> Self {
        Self::new()
    }
}
