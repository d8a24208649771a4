use crate::component::block_class::BlockClassComponent;
use serde::Deserialize;

pub type CollisionBlockClassComponent = BlockClassComponent<Collision>;

// What a moving body runs into; classes without collision are empty space
#[derive(Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(tag = "type")]
pub enum Collision {
    SolidCube,
    Liquid,
}
