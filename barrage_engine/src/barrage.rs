use crate::{
    controller::{
        Controller,
        NullController,
    },
    hit_result::HitResult,
    hitbox::HitBox,
    options::BarrageOptions,
    registry::BarrageRegistry,
    world::{
        Voxel,
        WorldQuery,
    },
};
use anyhow::Error;
use barrage_common::{
    component::actor::position::Position,
    entity::actor::Actor,
    math::{
        Aabb,
        Vec3F32,
    },
};
use log::{
    debug,
    trace,
};
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};

static NEXT_BARRAGE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique, assigned when the barrage is created.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub struct BarrageId(pub u64);

impl nohash_hasher::IsEnabled for BarrageId {}

impl BarrageId {
    fn next() -> Self {
        Self(NEXT_BARRAGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Game-specific behavior of a barrage.
pub trait BarrageKind: Send {
    /// Whether the actor can be hit by this barrage.
    fn filter_hit_actor(&self, state: &BarrageState, actor: Actor) -> bool;

    /// Whether the other barrage can be hit by this one.
    fn filter_hit_barrage(&self, state: &BarrageState, other: &BarrageState) -> bool {
        other.id() != state.id() && other.shooter() != state.shooter()
    }

    /// Called once for every hit, including the timeout (empty result).
    fn on_hit(&mut self, ctx: &mut HitContext, result: &HitResult);

    /// Where the controller is teleported to.
    fn controller_anchor(&self, state: &BarrageState) -> Position {
        state.position
    }
}

/// What [`BarrageKind::on_hit`] can see and do.
pub struct HitContext<'a> {
    state: &'a BarrageState,
    hitter: Option<&'a BarrageState>,
    registry: &'a mut BarrageRegistry,
}

impl HitContext<'_> {
    pub fn state(&self) -> &BarrageState {
        self.state
    }

    pub fn timed_out(&self) -> bool {
        self.state.timed_out()
    }

    /// Other registered barrage, including the one whose hit notified this one.
    pub fn barrage(&self, id: BarrageId) -> Option<&BarrageState> {
        self.registry
            .get(id)
            .map(|b| b.state())
            .or_else(|| self.hitter.filter(|hitter| hitter.id() == id))
    }

    /// The new barrage is visible right away and is first ticked on the next pass.
    pub fn spawn(&mut self, barrage: Barrage) -> BarrageId {
        self.registry.spawn(barrage)
    }
}

pub struct BarrageState {
    id: BarrageId,
    position: Position,
    hitbox: HitBox,
    direction: Vec3F32,
    speed: f32,
    shooter: Option<Actor>,
    options: BarrageOptions,
    launched: bool,
    valid: bool,
    being_hit: bool,
    ticks_alive: u32,
    ticks_since_spawn: u32,
    times_passed_through: u32,
}

impl BarrageState {
    pub fn id(&self) -> BarrageId {
        self.id
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn hitbox(&self) -> &HitBox {
        &self.hitbox
    }

    pub fn direction(&self) -> Vec3F32 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn shooter(&self) -> Option<Actor> {
        self.shooter
    }

    pub fn options(&self) -> &BarrageOptions {
        &self.options
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_being_hit(&self) -> bool {
        self.being_hit
    }

    pub fn ticks_alive(&self) -> u32 {
        self.ticks_alive
    }

    pub fn ticks_since_spawn(&self) -> u32 {
        self.ticks_since_spawn
    }

    pub fn times_passed_through(&self) -> u32 {
        self.times_passed_through
    }

    /// Actors and barrages are not hit yet, blocks are.
    pub fn noclip(&self) -> bool {
        self.ticks_since_spawn < self.options.none_hit_box_tick
    }

    pub fn timed_out(&self) -> bool {
        self.options
            .max_living_tick
            .is_some_and(|max| self.ticks_alive > max)
    }

    pub fn aabb(&self) -> Aabb {
        self.hitbox.materialize(self.position.vector)
    }
}

pub struct Barrage {
    state: BarrageState,
    kind: Box<dyn BarrageKind>,
    controller: Box<dyn Controller>,
}

impl Barrage {
    /// Not launched until spawned in a [`BarrageRegistry`].
    pub fn new<K>(
        position: Position,
        direction: Vec3F32,
        options: BarrageOptions,
        kind: K,
    ) -> Self
    where
        K: 'static + BarrageKind,
    {
        Self {
            state: BarrageState {
                id: BarrageId::next(),
                position,
                hitbox: HitBox::default(),
                direction,
                speed: options.speed,
                shooter: None,
                options,
                launched: false,
                valid: true,
                being_hit: false,
                ticks_alive: 0,
                ticks_since_spawn: 0,
                times_passed_through: 0,
            },
            kind: Box::new(kind),
            controller: Box::new(NullController),
        }
    }

    pub fn with_hitbox(mut self, hitbox: HitBox) -> Self {
        self.state.hitbox = hitbox;
        self
    }

    pub fn with_shooter(mut self, shooter: Actor) -> Self {
        self.state.shooter = Some(shooter);
        self
    }

    pub fn with_controller<C>(mut self, controller: C) -> Self
    where
        C: 'static + Controller,
    {
        self.controller = Box::new(controller);
        self
    }

    pub fn id(&self) -> BarrageId {
        self.state.id
    }

    pub fn state(&self) -> &BarrageState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state.valid
    }

    pub fn noclip(&self) -> bool {
        self.state.noclip()
    }

    pub fn set_hitbox(&mut self, hitbox: HitBox) {
        self.state.hitbox = hitbox;
    }

    /// Turns the barrage, the hit box is rotated along.
    pub fn set_direction(&mut self, direction: Vec3F32) {
        self.state.hitbox.rotate(self.state.direction, direction);
        self.state.direction = direction;
    }

    pub fn teleport(&mut self, position: Position) {
        self.state.position = position;

        if self.state.launched && self.state.valid {
            let anchor = self.kind.controller_anchor(&self.state);
            self.controller.teleport_to(&anchor);
        }
    }

    pub(crate) fn launch(&mut self) {
        let anchor = self.kind.controller_anchor(&self.state);
        self.controller.bind_and_display(&anchor);
        self.state.launched = true;
    }

    /// Advances the barrage by one simulation step.
    ///
    /// Collaborator errors are returned as is, the barrage stays registered
    /// and is ticked again on the next pass.
    pub fn tick(
        &mut self,
        registry: &mut BarrageRegistry,
        world: &dyn WorldQuery,
    ) -> Result<(), Error> {
        if !self.state.launched || !self.state.valid {
            return Ok(());
        }

        if !world.is_region_ready(&self.state.position) {
            trace!(
                "barrage {:?}: region at {:?} is not ready",
                self.state.id,
                self.state.position
            );
            return Ok(());
        }

        self.advance();

        let anchor = self.kind.controller_anchor(&self.state);
        self.controller.teleport_to(&anchor);

        self.state.ticks_alive = self.state.ticks_alive.saturating_add(1);

        if self.state.timed_out() {
            debug!(
                "barrage {:?} timed out after {} ticks",
                self.state.id, self.state.ticks_alive
            );
            self.hit(registry, HitResult::new());
            return Ok(());
        }

        let aabb = self.state.aabb();
        let mut result = HitResult::new();

        self.collide_blocks(world, &aabb, &mut result)?;

        if self.state.noclip() {
            self.state.ticks_since_spawn += 1;
        } else {
            self.collide_actors(world, &aabb, &mut result)?;
            self.collide_barrages(registry, &aabb, &mut result);
        }

        if !result.is_empty() {
            self.hit(registry, result);
        }

        Ok(())
    }

    fn advance(&mut self) {
        let state = &mut self.state;

        if state.options.enable_speed {
            if let Some(direction) = state.direction.try_normalize() {
                state.position.vector += direction * state.speed;
            }

            state.speed = state.options.accelerate(state.speed);
        } else {
            state.position.vector += state.direction;
        }
    }

    fn collide_blocks(
        &self,
        world: &dyn WorldQuery,
        aabb: &Aabb,
        result: &mut HitResult,
    ) -> Result<(), Error> {
        let options = &self.state.options;

        if options.across_block && options.across_liquid {
            return Ok(());
        }

        let dimension = self.state.position.dimension;

        for block in aabb.blocks() {
            if !world.is_region_ready(&Position::new(dimension, block.as_vec3())) {
                continue;
            }

            let voxel = world.voxel_at(dimension, block)?;

            let stops = match voxel {
                Voxel::Empty => false,
                Voxel::Liquid(_) => !options.across_liquid,
                Voxel::Solid(_) => !options.across_block,
            };

            if stops {
                trace!("barrage {:?}: hit block {:?}", self.state.id, block);
                result.add_block(block, voxel);
            }
        }

        Ok(())
    }

    fn collide_actors(
        &self,
        world: &dyn WorldQuery,
        aabb: &Aabb,
        result: &mut HitResult,
    ) -> Result<(), Error> {
        let actors = world.actors_overlapping(
            self.state.position.dimension,
            aabb,
            &mut |actor| self.kind.filter_hit_actor(&self.state, actor),
        )?;

        for actor in actors {
            trace!("barrage {:?}: hit actor {:?}", self.state.id, actor);
            result.add_actor(actor);
        }

        Ok(())
    }

    fn collide_barrages(&self, registry: &BarrageRegistry, aabb: &Aabb, result: &mut HitResult) {
        for other in registry.query_overlapping(self.state.position.dimension, aabb) {
            if self.kind.filter_hit_barrage(&self.state, other.state()) {
                trace!("barrage {:?}: hit barrage {:?}", self.state.id, other.id());
                result.add_barrage(other.id());
            }
        }
    }

    /// Hit pipeline: calls [`BarrageKind::on_hit`], applies the pass-through
    /// policy, notifies the barrages that were hit and removes this one
    /// unless it passes through.
    ///
    /// No-op while this barrage is already being hit.
    pub fn hit(&mut self, registry: &mut BarrageRegistry, result: HitResult) {
        self.hit_by(registry, result, None);
    }

    /// `hitter` is out of the registry while it notifies this barrage.
    fn hit_by(
        &mut self,
        registry: &mut BarrageRegistry,
        result: HitResult,
        hitter: Option<&BarrageState>,
    ) {
        if self.state.being_hit {
            return;
        }

        self.state.being_hit = true;

        {
            let mut ctx = HitContext {
                state: &self.state,
                hitter,
                registry: &mut *registry,
            };

            self.kind.on_hit(&mut ctx, &result);
        }

        let timeout_hit = self.state.timed_out();
        let passed_before = self.state.times_passed_through;
        let mut passes_through = false;

        if self.state.options.acrossable && !timeout_hit {
            match self.state.options.max_across_count {
                None => passes_through = true,
                Some(max) => {
                    self.state.times_passed_through += 1;
                    passes_through = self.state.times_passed_through <= max;
                },
            }
        }

        debug_assert!(
            !timeout_hit || self.state.times_passed_through == passed_before,
            "timeout hit counted as a pass-through"
        );

        let id = self.state.id;
        let state = &self.state;

        for sibling in result.barrages() {
            if sibling == id {
                continue;
            }

            registry.with_taken(sibling, |sibling, registry| {
                if !sibling.state.valid || sibling.state.options.barrage_ignored {
                    return;
                }

                sibling.hit_by(registry, HitResult::from_barrage(id), Some(state));
            });
        }

        if !passes_through {
            self.remove();
        }

        self.state.being_hit = false;
    }

    /// Cancels the controller and invalidates the barrage.
    /// Subsequent calls do nothing.
    pub fn remove(&mut self) {
        if !self.state.valid {
            return;
        }

        self.controller.cancel();
        self.state.valid = false;

        debug!("barrage {:?} removed", self.state.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_common::math::Vec3I32;

    struct Inert;

    impl BarrageKind for Inert {
        fn filter_hit_actor(&self, _state: &BarrageState, _actor: Actor) -> bool {
            true
        }

        fn on_hit(&mut self, _ctx: &mut HitContext, _result: &HitResult) {}
    }

    fn barrage(options: BarrageOptions) -> Barrage {
        Barrage::new(
            Position::new(0, Vec3F32::ZERO),
            Vec3F32::new(3.0, 0.0, 4.0),
            options,
            Inert,
        )
    }

    #[test]
    fn ids_are_unique() {
        let a = barrage(Default::default());
        let b = barrage(Default::default());

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn speed_moves_along_normalized_direction() {
        let mut b = barrage(BarrageOptions {
            speed: 2.0,
            acceleration: 1.0,
            max_speed: Some(3.5),
            ..Default::default()
        });

        b.advance();
        let moved = b.state().position().vector - Vec3F32::new(1.2, 0.0, 1.6);
        assert!(moved.length() < 1.0e-5);
        assert_eq!(b.state().speed(), 3.0);

        b.advance();
        assert_eq!(b.state().speed(), 3.5);
    }

    #[test]
    fn without_speed_direction_is_velocity() {
        let mut b = barrage(BarrageOptions {
            enable_speed: false,
            ..Default::default()
        });

        b.advance();
        b.advance();

        assert_eq!(b.state().position().vector, Vec3F32::new(6.0, 0.0, 8.0));
    }

    #[test]
    fn turning_rotates_hitbox() {
        let mut b = Barrage::new(
            Position::new(0, Vec3F32::ZERO),
            Vec3F32::X,
            Default::default(),
            Inert,
        )
        .with_hitbox(HitBox::new(0.0, -0.1, -0.1, 2.0, 0.1, 0.1));

        b.set_direction(Vec3F32::NEG_X);

        let hitbox = b.state().hitbox();

        assert!(hitbox.is_ordered());
        assert!((hitbox.min().x + 2.0).abs() < 1.0e-5);
        assert!(hitbox.max().x.abs() < 1.0e-5);
        assert_eq!(b.state().direction(), Vec3F32::NEG_X);
    }

    #[test]
    fn unlaunched_barrage_does_not_tick() {
        struct NeverReady;

        impl WorldQuery for NeverReady {
            fn is_region_ready(&self, _position: &Position) -> bool {
                panic!("must not be asked");
            }

            fn voxel_at(&self, _dimension: u32, _block: Vec3I32) -> Result<Voxel, Error> {
                unreachable!()
            }

            fn actors_overlapping(
                &self,
                _dimension: u32,
                _aabb: &Aabb,
                _filter: &mut dyn FnMut(Actor) -> bool,
            ) -> Result<Vec<Actor>, Error> {
                unreachable!()
            }
        }

        let mut registry = BarrageRegistry::new();
        let mut b = barrage(Default::default());

        b.tick(&mut registry, &NeverReady).unwrap();

        assert_eq!(b.state().ticks_alive(), 0);
    }
}
