use crate::{
    class_kind::BarrageFactory,
    component::actor::health::HealthActorComponent,
    config::Config,
    scenario::Scenario,
    resource::{
        hit_event::HitEvent,
        tick_timer::TickTimer,
    },
    system::{
        hit_handling::{
            HitHandlingSystem,
            HitStats,
        },
        launcher::LauncherSystem,
    },
    world::VoxelWorld,
};
use anyhow::{
    Context,
    Error,
};
use barrage_engine::BarrageRegistry;
use flume::Receiver;
use log::{
    info,
    warn,
};
use tokio::time::{
    self,
    MissedTickBehavior,
};

pub struct ServerLoop {
    config: Config,
    world: VoxelWorld,
    health_ac: HealthActorComponent,
    launchers: LauncherSystem,
    factory: BarrageFactory,
    event_rx: Receiver<HitEvent>,
    registry: BarrageRegistry,
    stats: HitStats,
    fired: u64,
}

impl ServerLoop {
    pub fn new(
        config: Config,
        scenario: Scenario,
        factory: BarrageFactory,
        event_rx: Receiver<HitEvent>,
    ) -> Self {
        let Scenario {
            world,
            health_ac,
            launchers,
        } = scenario;

        Self {
            config,
            world,
            health_ac,
            launchers,
            factory,
            event_rx,
            registry: BarrageRegistry::new(),
            stats: HitStats::default(),
            fired: 0,
        }
    }

    /// One simulation step: launchers fire, barrages advance,
    /// then their hits are applied to the world.
    pub fn process(&mut self, tick: u64) -> Result<(), Error> {
        self.fired += self
            .launchers
            .run(tick, &self.factory, &mut self.registry)
            .context("launching barrages")? as u64;

        let result = self.registry.advance_all(&self.world);

        HitHandlingSystem {
            world: &mut self.world,
            health_ac: &mut self.health_ac,
            stats: &mut self.stats,
        }
        .run(self.event_rx.drain());

        result.context("advancing barrages")
    }

    pub async fn run(mut self) -> Result<HitStats, Error> {
        let tick_interval = self.config.tick_interval();

        let mut interval = time::interval(tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut timer = TickTimer::new(tick_interval);
        let mut tick = 0;

        info!(
            "simulating {} chunks, {} actors, {} launchers",
            self.world.chunk_count(),
            self.world.actor_count(),
            self.launchers.len()
        );

        while self.config.ticks.map_or(true, |ticks| tick < ticks) {
            interval.tick().await;

            timer.start();

            self.process(tick)
                .with_context(|| format!("processing tick {}", tick))?;

            if let Some(overrun) = timer.finish() {
                warn!("tick {} overran the interval by {:?}", tick, overrun);
            }

            tick += 1;
        }

        self.registry.clear();

        info!(
            "{} ticks: {} barrages fired, {} damage dealt, {} actors killed, {} blocks broken, \
             {} overruns, longest tick {:?}",
            tick,
            self.fired,
            self.stats.damage_dealt,
            self.stats.actors_killed,
            self.stats.blocks_broken,
            timer.overruns(),
            timer.longest()
        );

        Ok(self.stats)
    }
}
