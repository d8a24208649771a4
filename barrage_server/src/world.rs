use crate::component::{
    actor::body::{
        Body,
        BodyActorComponent,
    },
    chunk::status::{
        ChunkStatus,
        StatusChunkComponent,
    },
};
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::{
    component::{
        actor::position::Position,
        block::{
            BlocksVec,
            ClassBlockComponent,
        },
        block_class::collision::{
            Collision,
            CollisionBlockClassComponent,
        },
    },
    entity::{
        actor::Actor,
        block::Block,
        block_class::BlockClass,
        chunk::Chunk,
    },
    math::{
        Aabb,
        Vec3I32,
    },
    LabelMap,
};
use barrage_engine::{
    Voxel,
    WorldQuery,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct BlockClassDescriptor {
    pub label: String,
    #[serde(default)]
    pub collision: Option<Collision>,
}

pub struct BlockClasses {
    pub label_map: LabelMap<BlockClass>,
    pub collision_bcc: CollisionBlockClassComponent,
}

impl BlockClasses {
    /// Classes are numbered in list order.
    pub fn describe(list: &[BlockClassDescriptor]) -> Self {
        let labels = list.iter().map(|d| d.label.clone()).collect::<Vec<_>>();
        let label_map = LabelMap::<BlockClass>::from_list(&labels);

        let mut collision_bcc = CollisionBlockClassComponent::new();

        for (i, desc) in list.iter().enumerate() {
            if let Some(collision) = desc.collision {
                collision_bcc.set(BlockClass(i as u64), collision);
            }
        }

        Self {
            label_map,
            collision_bcc,
        }
    }
}

/// In-memory voxel world the barrages fly through.
pub struct VoxelWorld {
    class_bc: ClassBlockComponent,
    collision_bcc: CollisionBlockClassComponent,
    status_cc: StatusChunkComponent,
    body_ac: BodyActorComponent,
    empty_class: BlockClass,
}

impl VoxelWorld {
    /// `empty_class` replaces broken blocks.
    pub fn new(collision_bcc: CollisionBlockClassComponent, empty_class: BlockClass) -> Self {
        Self {
            class_bc: ClassBlockComponent::new(),
            collision_bcc,
            status_cc: StatusChunkComponent::new(),
            body_ac: BodyActorComponent::new(),
            empty_class,
        }
    }

    pub fn add_chunk(&mut self, chunk: Chunk, blocks: BlocksVec<BlockClass>, status: ChunkStatus) {
        self.class_bc.insert_chunk(chunk, blocks);
        self.status_cc.insert(chunk, status);
    }

    pub fn set_status(&mut self, chunk: &Chunk, status: ChunkStatus) {
        if let Some(current) = self.status_cc.get_mut(chunk) {
            *current = status;
        }
    }

    pub fn status(&self, chunk: &Chunk) -> Option<ChunkStatus> {
        self.status_cc.get(chunk).copied()
    }

    pub fn empty_class(&self) -> BlockClass {
        self.empty_class
    }

    pub fn chunk_count(&self) -> usize {
        self.class_bc.len()
    }

    pub fn block_class(&self, dimension: u32, global: Vec3I32) -> Option<BlockClass> {
        let (chunk, block) = Block::from_global(dimension, global);

        self.class_bc
            .get_chunk(&chunk)
            .map(|blocks| *blocks.get(block))
    }

    /// Returns `false` if the block is outside of the loaded chunks.
    pub fn set_block_class(&mut self, dimension: u32, global: Vec3I32, class: BlockClass) -> bool {
        let (chunk, block) = Block::from_global(dimension, global);

        match self.class_bc.get_mut_chunk(&chunk) {
            Some(blocks) => {
                *blocks.get_mut(block) = class;
                true
            },
            None => false,
        }
    }

    /// Replaces the block with the empty class.
    pub fn break_block(&mut self, dimension: u32, global: Vec3I32) -> bool {
        let empty_class = self.empty_class;
        self.set_block_class(dimension, global, empty_class)
    }

    pub fn add_actor(&mut self, actor: Actor, body: Body) {
        self.body_ac.insert(actor, body);
    }

    pub fn remove_actor(&mut self, actor: &Actor) -> Option<Body> {
        self.body_ac.remove(actor)
    }

    pub fn actor_count(&self) -> usize {
        self.body_ac.len()
    }
}

impl WorldQuery for VoxelWorld {
    /// Chunks outside of the world are ready and empty, only loading ones are not.
    fn is_region_ready(&self, position: &Position) -> bool {
        self.status_cc.get_at(position) != Some(&ChunkStatus::Loading)
    }

    fn voxel_at(&self, dimension: u32, global: Vec3I32) -> Result<Voxel, Error> {
        let (chunk, block) = Block::from_global(dimension, global);

        let Some(blocks) = self.class_bc.get_chunk(&chunk) else {
            if self.status_cc.get(&chunk) == Some(&ChunkStatus::Active) {
                return Err(anyhow!("chunk {:?} is active but has no blocks", chunk));
            }

            return Ok(Voxel::Empty);
        };

        let class = *blocks.get(block);

        Ok(match self.collision_bcc.get(class) {
            Some(Collision::SolidCube) => Voxel::Solid(class),
            Some(Collision::Liquid) => Voxel::Liquid(class),
            None => Voxel::Empty,
        })
    }

    fn actors_overlapping(
        &self,
        dimension: u32,
        aabb: &Aabb,
        filter: &mut dyn FnMut(Actor) -> bool,
    ) -> Result<Vec<Actor>, Error> {
        let mut actors = self
            .body_ac
            .iter()
            .filter(|(_, body)| {
                body.dimension == dimension
                    && (body.aabb.intersects(aabb) || aabb.contains(&body.aabb))
            })
            .map(|(actor, _)| actor)
            .filter(|actor| filter(*actor))
            .collect::<Vec<_>>();

        actors.sort_unstable();

        Ok(actors)
    }
}
