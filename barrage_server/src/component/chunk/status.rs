use barrage_common::component::chunk::ChunkComponent;

/// Barrages only move through `Active` chunks.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChunkStatus {
    Active,
    Loading,
}

pub type StatusChunkComponent = ChunkComponent<ChunkStatus>;
