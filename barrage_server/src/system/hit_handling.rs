use crate::{
    component::actor::health::HealthActorComponent,
    resource::hit_event::HitEvent,
    world::VoxelWorld,
};
use log::debug;

#[derive(Default, Debug)]
pub struct HitStats {
    pub damage_dealt: u64,
    pub blocks_broken: u64,
    pub actors_killed: u64,
}

/// Applies the hit events of a barrage pass to the world.
pub struct HitHandlingSystem<'a> {
    pub world: &'a mut VoxelWorld,
    pub health_ac: &'a mut HealthActorComponent,
    pub stats: &'a mut HitStats,
}

impl HitHandlingSystem<'_> {
    pub fn run(self, events: impl Iterator<Item = HitEvent>) {
        for event in events {
            match event {
                HitEvent::DamageActor {
                    barrage,
                    shooter,
                    actor,
                    amount,
                } => {
                    // Already dead from an earlier event of the same pass
                    let Some(health) = self.health_ac.get_mut(&actor) else {
                        continue;
                    };

                    let dead = health.damage(amount);
                    self.stats.damage_dealt += amount as u64;

                    debug!(
                        "barrage {:?} of {:?} dealt {} damage to {:?}",
                        barrage, shooter, amount, actor
                    );

                    if dead {
                        self.health_ac.remove(&actor);
                        self.world.remove_actor(&actor);
                        self.stats.actors_killed += 1;

                        debug!("actor {:?} is dead", actor);
                    }
                },
                HitEvent::BreakBlock {
                    barrage,
                    dimension,
                    block,
                } => {
                    let breakable = self
                        .world
                        .block_class(dimension, block)
                        .is_some_and(|class| class != self.world.empty_class());

                    if breakable && self.world.break_block(dimension, block) {
                        self.stats.blocks_broken += 1;

                        debug!("barrage {:?} broke block {:?}", barrage, block);
                    }
                },
            }
        }
    }
}
