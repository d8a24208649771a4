#![allow(dead_code)]

use ahash::{
    AHashMap,
    AHashSet,
};
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::{
    component::actor::position::Position,
    entity::{
        actor::Actor,
        block_class::BlockClass,
        chunk::Chunk,
    },
    math::{
        Aabb,
        Vec3F32,
        Vec3I32,
    },
};
use barrage_engine::{
    Barrage,
    BarrageId,
    BarrageKind,
    BarrageOptions,
    BarrageState,
    Controller,
    HitBox,
    HitContext,
    HitResult,
    Voxel,
    WorldQuery,
};
use std::sync::{
    Arc,
    Mutex,
};

pub const STONE: BlockClass = BlockClass(1);
pub const WATER: BlockClass = BlockClass(2);

#[derive(Default)]
pub struct TestWorld {
    pub voxels: AHashMap<Vec3I32, Voxel>,
    pub unready_chunks: AHashSet<Chunk>,
    pub actors: Vec<(Actor, Aabb)>,
    pub failing_actor_query: bool,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_voxel(&mut self, block: Vec3I32, voxel: Voxel) {
        self.voxels.insert(block, voxel);
    }

    pub fn add_actor(&mut self, actor: Actor, center: Vec3F32) {
        let aabb = HitBox::cube(0.5).materialize(center);
        self.actors.push((actor, aabb));
    }

    pub fn set_ready(&mut self, chunk: Chunk, ready: bool) {
        if ready {
            self.unready_chunks.remove(&chunk);
        } else {
            self.unready_chunks.insert(chunk);
        }
    }
}

impl WorldQuery for TestWorld {
    fn is_region_ready(&self, position: &Position) -> bool {
        !self.unready_chunks.contains(&position.chunk())
    }

    fn voxel_at(&self, dimension: u32, block: Vec3I32) -> Result<Voxel, Error> {
        if dimension != 0 {
            return Ok(Voxel::Empty);
        }

        Ok(self.voxels.get(&block).copied().unwrap_or(Voxel::Empty))
    }

    fn actors_overlapping(
        &self,
        dimension: u32,
        aabb: &Aabb,
        filter: &mut dyn FnMut(Actor) -> bool,
    ) -> Result<Vec<Actor>, Error> {
        if self.failing_actor_query {
            return Err(anyhow!("actor query failed"));
        }

        if dimension != 0 {
            return Ok(Vec::new());
        }

        Ok(self
            .actors
            .iter()
            .filter(|(_, body)| body.intersects(aabb) || aabb.contains(body))
            .map(|(actor, _)| *actor)
            .filter(|actor| filter(*actor))
            .collect())
    }
}

#[derive(Clone, Debug)]
pub struct RecordedHit {
    pub barrage: BarrageId,
    pub ticks_alive: u32,
    pub blocks: Vec<Vec3I32>,
    pub actors: Vec<Actor>,
    pub barrages: Vec<BarrageId>,
    /// Shooters of the hit barrages that could be looked up.
    pub barrage_shooters: Vec<Option<Actor>>,
    pub timed_out: bool,
}

#[derive(Clone, Default)]
pub struct HitLog(Arc<Mutex<Vec<RecordedHit>>>);

impl HitLog {
    pub fn hits(&self) -> Vec<RecordedHit> {
        self.0.lock().unwrap().clone()
    }

    pub fn hits_of(&self, barrage: BarrageId) -> Vec<RecordedHit> {
        self.hits()
            .into_iter()
            .filter(|h| h.barrage == barrage)
            .collect()
    }
}

/// Records every hit, never hits its own shooter.
pub struct Recorder {
    pub log: HitLog,
}

impl BarrageKind for Recorder {
    fn filter_hit_actor(&self, state: &BarrageState, actor: Actor) -> bool {
        state.shooter() != Some(actor)
    }

    fn on_hit(&mut self, ctx: &mut HitContext, result: &HitResult) {
        let state = ctx.state();

        self.log.0.lock().unwrap().push(RecordedHit {
            barrage: state.id(),
            ticks_alive: state.ticks_alive(),
            blocks: result.blocks().collect(),
            actors: result.actors().collect(),
            barrages: result.barrages().collect(),
            barrage_shooters: result
                .barrages()
                .filter_map(|id| ctx.barrage(id))
                .map(|other| other.shooter())
                .collect(),
            timed_out: ctx.timed_out(),
        });
    }
}

#[derive(Default, Debug)]
pub struct ControllerCalls {
    pub binds: Vec<Position>,
    pub teleports: Vec<Position>,
    pub cancels: usize,
}

#[derive(Clone, Default)]
pub struct CountingController(pub Arc<Mutex<ControllerCalls>>);

impl CountingController {
    pub fn calls(&self) -> std::sync::MutexGuard<'_, ControllerCalls> {
        self.0.lock().unwrap()
    }
}

impl Controller for CountingController {
    fn bind_and_display(&mut self, position: &Position) {
        self.0.lock().unwrap().binds.push(*position);
    }

    fn teleport_to(&mut self, position: &Position) {
        self.0.lock().unwrap().teleports.push(*position);
    }

    fn cancel(&mut self) {
        self.0.lock().unwrap().cancels += 1;
    }
}

pub fn stationary() -> BarrageOptions {
    BarrageOptions {
        speed: 0.0,
        ..Default::default()
    }
}

/// Barrage with a unit hit box centered at `center`.
pub fn barrage_at(center: Vec3F32, options: BarrageOptions, log: &HitLog) -> Barrage {
    Barrage::new(
        Position::new(0, center),
        Vec3F32::X,
        options,
        Recorder { log: log.clone() },
    )
    .with_hitbox(HitBox::cube(0.5))
}
