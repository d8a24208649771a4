use crate::{
    component::{
        actor::{
            body::Body,
            health::{
                Health,
                HealthActorComponent,
            },
        },
        chunk::status::ChunkStatus,
    },
    entity::barrage_class::BarrageClass,
    system::launcher::{
        LauncherDescriptor,
        LauncherSystem,
    },
    world::{
        BlockClasses,
        VoxelWorld,
    },
};
use anyhow::{
    anyhow,
    Context,
    Error,
};
use barrage_common::{
    component::block::BlocksVec,
    entity::{
        actor::Actor,
        block::{
            Block,
            BLOCKS_IN_CHUNK,
        },
        block_class::BlockClass,
        chunk::Chunk,
    },
    math::{
        Aabb,
        Vec3F32,
        Vec3I32,
    },
    LabelMap,
};
use serde::Deserialize;

const EMPTY_BLOCK_LABEL: &str = "air";

#[derive(Deserialize)]
pub struct LayerDescriptor {
    block: String,
    /// Inclusive.
    from_y: i32,
    /// Exclusive.
    to_y: i32,
}

#[derive(Deserialize)]
pub struct TerrainDescriptor {
    chunk_radius: i32,
    #[serde(default)]
    layers: Vec<LayerDescriptor>,
    /// Chunks that exist but are not simulated yet.
    #[serde(default)]
    loading_chunks: Vec<Vec3I32>,
}

#[derive(Deserialize)]
pub struct ActorDescriptor {
    position: Vec3F32,
    half_extent: Vec3F32,
    health: u32,
}

#[derive(Deserialize)]
pub struct ScenarioDescriptor {
    terrain: TerrainDescriptor,
    #[serde(default)]
    actors: Vec<ActorDescriptor>,
    #[serde(default)]
    launchers: Vec<LauncherDescriptor>,
}

pub struct Scenario {
    pub world: VoxelWorld,
    pub health_ac: HealthActorComponent,
    pub launchers: LauncherSystem,
}

struct Layer {
    class: BlockClass,
    from_y: i32,
    to_y: i32,
}

impl ScenarioDescriptor {
    pub fn describe(
        &self,
        dimension: u32,
        block_classes: BlockClasses,
        barrage_label_map: &LabelMap<BarrageClass>,
    ) -> Result<Scenario, Error> {
        let BlockClasses {
            label_map: block_label_map,
            collision_bcc,
        } = block_classes;

        let get_block_class = |label: &str| {
            block_label_map
                .get(label)
                .ok_or_else(|| anyhow!("block class \"{}\" is undefined", label))
        };

        let empty_class = get_block_class(EMPTY_BLOCK_LABEL)?;

        let layers = self
            .terrain
            .layers
            .iter()
            .map(|layer| {
                Ok(Layer {
                    class: get_block_class(&layer.block)?,
                    from_y: layer.from_y,
                    to_y: layer.to_y,
                })
            })
            .collect::<Result<Vec<_>, Error>>()
            .context("unable to describe terrain")?;

        let mut world = VoxelWorld::new(collision_bcc, empty_class);

        let center = Chunk {
            position: Vec3I32::ZERO,
            dimension,
        };

        for chunk in center.radius(self.terrain.chunk_radius).into_iter() {
            let status = if self.terrain.loading_chunks.contains(&chunk.position) {
                ChunkStatus::Loading
            } else {
                ChunkStatus::Active
            };

            world.add_chunk(chunk, generate_chunk(&chunk, &layers, empty_class), status);
        }

        let mut health_ac = HealthActorComponent::new();

        for (i, desc) in self.actors.iter().enumerate() {
            let actor = Actor::from_usize(i);

            world.add_actor(
                actor,
                Body {
                    dimension,
                    aabb: Aabb::from_corners(
                        desc.position - desc.half_extent,
                        desc.position + desc.half_extent,
                    ),
                },
            );

            health_ac.insert(actor, Health(desc.health));
        }

        let launchers = self
            .launchers
            .iter()
            .enumerate()
            .map(|(i, desc)| {
                desc.describe(dimension, barrage_label_map)
                    .with_context(|| format!("unable to describe launcher #{}", i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scenario {
            world,
            health_ac,
            launchers: LauncherSystem::new(launchers),
        })
    }
}

/// The first layer containing the block height wins.
fn generate_chunk(
    chunk: &Chunk,
    layers: &[Layer],
    empty_class: BlockClass,
) -> BlocksVec<BlockClass> {
    let blocks = (0 .. BLOCKS_IN_CHUNK)
        .map(|i| {
            let global = Block(i).to_global(chunk);

            layers
                .iter()
                .find(|layer| (layer.from_y .. layer.to_y).contains(&global.y))
                .map(|layer| layer.class)
                .unwrap_or(empty_class)
        })
        .collect();

    BlocksVec::new(blocks)
}
