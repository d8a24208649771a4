use crate::entity::barrage_class::BarrageClass;
use anyhow::{
    Context,
    Error,
};
use barrage_common::{
    AsFromUsize,
    LabelMap,
};
use barrage_engine::{
    BarrageOptions,
    HitBox,
};
use handler::{
    HandlerSet,
    HandlerSetDescriptor,
};
use serde::Deserialize;
use std::collections::BTreeMap;

pub mod handler;

#[derive(Deserialize)]
pub struct BarrageClassDescriptor {
    #[serde(default)]
    options: BarrageOptions,
    #[serde(default)]
    hitbox: HitBox,
    #[serde(default)]
    handlers: HandlerSetDescriptor,
}

pub struct BarrageClassData {
    pub options: BarrageOptions,
    pub hitbox: HitBox,
    pub handlers: HandlerSet,
}

/// Barrage classes loaded from the data files, indexed by [`BarrageClass`].
pub struct BarrageClassComponent {
    label_map: LabelMap<BarrageClass>,
    classes: Vec<BarrageClassData>,
}

impl BarrageClassComponent {
    /// Classes are numbered in label order.
    pub fn describe(descriptors: &BTreeMap<String, BarrageClassDescriptor>) -> Result<Self, Error> {
        let label_map: LabelMap<BarrageClass> = descriptors
            .keys()
            .enumerate()
            .map(|(i, label)| (label.clone(), BarrageClass::from_usize(i)))
            .collect::<BTreeMap<_, _>>()
            .into();

        let classes = descriptors
            .iter()
            .map(|(label, desc)| {
                let handlers = desc
                    .handlers
                    .describe(&label_map)
                    .with_context(|| format!("unable to parse barrage class \"{}\"", label))?;

                Ok(BarrageClassData {
                    options: desc.options.clone(),
                    hitbox: desc.hitbox,
                    handlers,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { label_map, classes })
    }

    pub fn get(&self, class: BarrageClass) -> Option<&BarrageClassData> {
        self.classes.get(class.as_usize())
    }

    pub fn label_map(&self) -> &LabelMap<BarrageClass> {
        &self.label_map
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
