use crate::entity::{
    block::{
        Block,
        BLOCKS_IN_CHUNK,
    },
    block_class::BlockClass,
    chunk::Chunk,
};
use ahash::AHashMap;

#[derive(Clone, Debug)]
pub struct BlocksVec<T> {
    blocks: Vec<T>,
}

impl<T> BlocksVec<T> {
    pub fn new(blocks: Vec<T>) -> Self {
        assert_eq!(blocks.len(), BLOCKS_IN_CHUNK, "incorrect chunk size");
        Self { blocks }
    }

    pub fn get(&self, block: Block) -> &T {
        &self.blocks[block.0]
    }

    pub fn get_mut(&mut self, block: Block) -> &mut T {
        &mut self.blocks[block.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Block, &T)> {
        self.blocks.iter().zip(0 ..).map(|(v, b)| (Block(b), v))
    }
}

impl<T> BlocksVec<T>
where
    T: Clone,
{
    pub fn new_filled(value: T) -> Self {
        Self {
            blocks: vec![value; BLOCKS_IN_CHUNK],
        }
    }
}

/// Block classes of the loaded chunks.
pub type ClassBlockComponent = BlockComponent<BlocksVec<BlockClass>>;

pub struct BlockComponent<T> {
    chunks: AHashMap<Chunk, T>,
}

impl<T> BlockComponent<T> {
    pub fn new() -> Self {
        Self {
            chunks: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn get_chunk(&self, chunk: &Chunk) -> Option<&T> {
        self.chunks.get(chunk)
    }

    pub fn get_mut_chunk(&mut self, chunk: &Chunk) -> Option<&mut T> {
        self.chunks.get_mut(chunk)
    }

    pub fn insert_chunk(&mut self, chunk: Chunk, blocks: T) {
        self.chunks.insert(chunk, blocks);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chunk, &T)> {
        self.chunks.iter()
    }
}
