use crate::{
    component::barrage_class::{
        handler::{
            Alteration,
            HandlerSet,
        },
        BarrageClassComponent,
    },
    entity::barrage_class::BarrageClass,
    resource::hit_event::HitEvent,
};
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::{
    component::actor::position::Position,
    entity::actor::Actor,
    math::Vec3F32,
};
use barrage_engine::{
    Barrage,
    BarrageKind,
    BarrageState,
    HitContext,
    HitResult,
};
use flume::Sender;
use log::warn;
use std::{
    f32::consts::TAU,
    sync::Arc,
};

/// Builds barrages of the loaded classes.
#[derive(Clone)]
pub struct BarrageFactory {
    classes: Arc<BarrageClassComponent>,
    event_tx: Sender<HitEvent>,
}

impl BarrageFactory {
    pub fn new(classes: Arc<BarrageClassComponent>, event_tx: Sender<HitEvent>) -> Self {
        Self { classes, event_tx }
    }

    pub fn classes(&self) -> &BarrageClassComponent {
        &self.classes
    }

    /// Class hit boxes are described facing +X and turned to `direction`.
    /// `speed` overrides the class speed.
    pub fn create(
        &self,
        class: BarrageClass,
        position: Position,
        direction: Vec3F32,
        shooter: Option<Actor>,
        speed: Option<f32>,
    ) -> Result<Barrage, Error> {
        let data = self
            .classes
            .get(class)
            .ok_or_else(|| anyhow!("barrage class {:?} is undefined", class))?;

        let mut options = data.options.clone();

        if let Some(speed) = speed {
            options.speed = speed;
        }

        let kind = ClassKind {
            handlers: data.handlers.clone(),
            factory: self.clone(),
        };

        let mut barrage =
            Barrage::new(position, Vec3F32::X, options, kind).with_hitbox(data.hitbox);

        if let Some(shooter) = shooter {
            barrage = barrage.with_shooter(shooter);
        }

        barrage.set_direction(direction);

        Ok(barrage)
    }
}

/// Behavior of a data-driven barrage class.
///
/// Never hits its own shooter, world changes are sent as [`HitEvent`]s.
pub struct ClassKind {
    handlers: HandlerSet,
    factory: BarrageFactory,
}

impl ClassKind {
    fn send(&self, event: HitEvent) {
        if let Err(err) = self.factory.event_tx.send(event) {
            warn!("hit event dropped, nothing applies it: {:?}", err.into_inner());
        }
    }
}

impl BarrageKind for ClassKind {
    fn filter_hit_actor(&self, state: &BarrageState, actor: Actor) -> bool {
        state.shooter() != Some(actor)
    }

    fn on_hit(&mut self, ctx: &mut HitContext, result: &HitResult) {
        let timed_out = ctx.timed_out();
        let state = ctx.state();
        let barrage = state.id();
        let position = *state.position();
        let shooter = state.shooter();

        for handler in self.handlers.triggered(result, timed_out) {
            for alteration in handler.alterations.iter() {
                match alteration {
                    Alteration::DamageActors { amount } => {
                        for actor in result.actors() {
                            self.send(HitEvent::DamageActor {
                                barrage,
                                shooter,
                                actor,
                                amount: *amount,
                            });
                        }
                    },
                    Alteration::BreakBlocks => {
                        for block in result.blocks() {
                            self.send(HitEvent::BreakBlock {
                                barrage,
                                dimension: position.dimension,
                                block,
                            });
                        }
                    },
                    Alteration::Spawn {
                        class,
                        count,
                        speed,
                    } => {
                        for i in 0 .. *count {
                            let angle = TAU * i as f32 / *count as f32;
                            let direction = Vec3F32::new(angle.cos(), 0.0, angle.sin());

                            match self
                                .factory
                                .create(*class, position, direction, shooter, *speed)
                            {
                                Ok(fragment) => {
                                    ctx.spawn(fragment);
                                },
                                Err(err) => {
                                    warn!("barrage {:?}: unable to spawn: {:#}", barrage, err);
                                },
                            }
                        }
                    },
                }
            }
        }
    }
}
