use crate::{
    barrage::BarrageId,
    world::Voxel,
};
use ahash::AHashSet;
use barrage_common::{
    entity::actor::Actor,
    math::Vec3I32,
};
use nohash_hasher::IntSet;

/// Everything a barrage ran into during one tick.
///
/// An empty result delivered to the hit pipeline means a timeout.
#[derive(Default, Clone, Debug)]
pub struct HitResult {
    blocks: AHashSet<Vec3I32>,
    last_block: Option<(Vec3I32, Voxel)>,
    actors: IntSet<Actor>,
    barrages: IntSet<BarrageId>,
}

impl HitResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result of being hit by another barrage.
    pub fn from_barrage(barrage: BarrageId) -> Self {
        let mut result = Self::new();
        result.add_barrage(barrage);
        result
    }

    pub fn add_block(&mut self, block: Vec3I32, voxel: Voxel) {
        self.blocks.insert(block);
        self.last_block = Some((block, voxel));
    }

    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.insert(actor);
    }

    pub fn add_barrage(&mut self, barrage: BarrageId) {
        self.barrages.insert(barrage);
    }

    pub fn blocks(&self) -> impl ExactSizeIterator<Item = Vec3I32> + '_ {
        self.blocks.iter().copied()
    }

    /// The block recorded last, along with what it is made of.
    pub fn last_block(&self) -> Option<(Vec3I32, Voxel)> {
        self.last_block
    }

    pub fn actors(&self) -> impl ExactSizeIterator<Item = Actor> + '_ {
        self.actors.iter().copied()
    }

    pub fn barrages(&self) -> impl ExactSizeIterator<Item = BarrageId> + '_ {
        self.barrages.iter().copied()
    }

    pub fn has_block(&self, block: Vec3I32) -> bool {
        self.blocks.contains(&block)
    }

    pub fn has_actor(&self, actor: Actor) -> bool {
        self.actors.contains(&actor)
    }

    pub fn has_barrage(&self, barrage: BarrageId) -> bool {
        self.barrages.contains(&barrage)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.actors.is_empty() && self.barrages.is_empty()
    }
}
