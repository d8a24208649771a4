use crate::entity::barrage_class::BarrageClass;
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::LabelMap;
use barrage_engine::HitResult;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq, Eq, Deserialize, Debug)]
pub enum Trigger {
    AnyCollision,
    BlockCollision,
    ActorCollision,
    BarrageCollision,
    Timeout,
}

impl Trigger {
    pub fn matches(&self, result: &HitResult, timed_out: bool) -> bool {
        match self {
            Trigger::AnyCollision => !result.is_empty(),
            Trigger::BlockCollision => result.blocks().len() > 0,
            Trigger::ActorCollision => result.actors().len() > 0,
            Trigger::BarrageCollision => result.barrages().len() > 0,
            Trigger::Timeout => timed_out,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Alteration {
    DamageActors {
        amount: u32,
    },
    BreakBlocks,
    /// Burst of `count` barrages spread evenly around the hit position.
    Spawn {
        class: BarrageClass,
        count: usize,
        speed: Option<f32>,
    },
}

pub struct Handler {
    pub trigger: Trigger,
    pub alterations: Vec<Alteration>,
}

#[derive(Clone)]
pub struct HandlerSet(Arc<[Handler]>);

impl HandlerSet {
    pub fn iter<'a>(&'a self) -> impl ExactSizeIterator<Item = &'a Handler> + Send + Sync + 'a {
        self.0.iter()
    }

    /// Handlers whose trigger matches the hit.
    pub fn triggered<'a>(
        &'a self,
        result: &'a HitResult,
        timed_out: bool,
    ) -> impl Iterator<Item = &'a Handler> + 'a {
        self.0
            .iter()
            .filter(move |h| h.trigger.matches(result, timed_out))
    }
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
pub enum AlterationDescriptor {
    DamageActors {
        amount: u32,
    },
    BreakBlocks,
    Spawn {
        class: String,
        count: usize,
        #[serde(default)]
        speed: Option<f32>,
    },
}

impl AlterationDescriptor {
    fn describe(&self, label_map: &LabelMap<BarrageClass>) -> Result<Alteration, Error> {
        Ok(match self {
            Self::DamageActors { amount } => Alteration::DamageActors { amount: *amount },
            Self::BreakBlocks => Alteration::BreakBlocks,
            Self::Spawn {
                class,
                count,
                speed,
            } => {
                Alteration::Spawn {
                    class: label_map
                        .get(class)
                        .ok_or_else(|| anyhow!("barrage class \"{}\" is undefined", class))?,
                    count: *count,
                    speed: *speed,
                }
            },
        })
    }
}

#[derive(Deserialize)]
struct HandlerDescriptor {
    trigger: Trigger,
    alterations: Vec<AlterationDescriptor>,
}

impl HandlerDescriptor {
    fn describe(&self, label_map: &LabelMap<BarrageClass>) -> Result<Handler, Error> {
        Ok(Handler {
            trigger: self.trigger,
            alterations: self
                .alterations
                .iter()
                .map(|a| a.describe(label_map))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Deserialize, Default)]
pub struct HandlerSetDescriptor(Vec<HandlerDescriptor>);

impl HandlerSetDescriptor {
    pub fn describe(&self, label_map: &LabelMap<BarrageClass>) -> Result<HandlerSet, Error> {
        let set = self
            .0
            .iter()
            .map(|d| d.describe(label_map))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HandlerSet(set.into()))
    }
}
