use anyhow::Error;
use barrage_common::{
    component::actor::position::Position,
    entity::{
        actor::Actor,
        block_class::BlockClass,
    },
    math::{
        Aabb,
        Vec3I32,
    },
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Voxel {
    Empty,
    Liquid(BlockClass),
    Solid(BlockClass),
}

impl Voxel {
    pub fn class(&self) -> Option<BlockClass> {
        match self {
            Voxel::Empty => None,
            Voxel::Liquid(class) | Voxel::Solid(class) => Some(*class),
        }
    }
}

/// World state that barrages read while ticking.
///
/// Implemented by the host, calls must not block.
pub trait WorldQuery {
    /// Whether the region containing the position is loaded and simulated.
    /// Barrages in regions that are not ready skip the tick.
    fn is_region_ready(&self, position: &Position) -> bool;

    /// Content of the block with the given world coordinates.
    fn voxel_at(&self, dimension: u32, block: Vec3I32) -> Result<Voxel, Error>;

    /// Actors whose bodies overlap the box and pass the filter.
    fn actors_overlapping(
        &self,
        dimension: u32,
        aabb: &Aabb,
        filter: &mut dyn FnMut(Actor) -> bool,
    ) -> Result<Vec<Actor>, Error>;
}
