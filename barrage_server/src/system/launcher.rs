use crate::{
    class_kind::BarrageFactory,
    entity::barrage_class::BarrageClass,
};
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::{
    component::actor::position::Position,
    entity::actor::Actor,
    math::Vec3F32,
    LabelMap,
};
use barrage_engine::BarrageRegistry;
use serde::Deserialize;

/// Fires a barrage every `period` ticks, starting from tick 0.
pub struct Launcher {
    pub class: BarrageClass,
    pub position: Position,
    pub direction: Vec3F32,
    pub period: u64,
    pub shooter: Option<Actor>,
}

#[derive(Deserialize)]
pub struct LauncherDescriptor {
    class: String,
    position: Vec3F32,
    direction: Vec3F32,
    period: u64,
    /// Index into the scenario actor list.
    #[serde(default)]
    shooter: Option<u32>,
}

impl LauncherDescriptor {
    pub fn describe(
        &self,
        dimension: u32,
        label_map: &LabelMap<BarrageClass>,
    ) -> Result<Launcher, Error> {
        let class = label_map
            .get(&self.class)
            .ok_or_else(|| anyhow!("barrage class \"{}\" is undefined", self.class))?;

        if self.period == 0 {
            return Err(anyhow!("launcher period must be positive"));
        }

        Ok(Launcher {
            class,
            position: Position::new(dimension, self.position),
            direction: self.direction,
            period: self.period,
            shooter: self.shooter.map(Actor),
        })
    }
}

pub struct LauncherSystem {
    launchers: Vec<Launcher>,
}

impl LauncherSystem {
    pub fn new(launchers: Vec<Launcher>) -> Self {
        Self { launchers }
    }

    pub fn len(&self) -> usize {
        self.launchers.len()
    }

    /// Returns the number of barrages fired.
    pub fn run(
        &self,
        tick: u64,
        factory: &BarrageFactory,
        registry: &mut BarrageRegistry,
    ) -> Result<usize, Error> {
        let mut fired = 0;

        for launcher in self.launchers.iter().filter(|l| tick % l.period == 0) {
            let barrage = factory.create(
                launcher.class,
                launcher.position,
                launcher.direction,
                launcher.shooter,
                None,
            )?;

            registry.spawn(barrage);
            fired += 1;
        }

        Ok(fired)
    }
}
