use serde::{
    Deserialize,
    Serialize,
};

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub struct Actor(pub u32);

impl nohash_hasher::IsEnabled for Actor {}

impl Actor {
    pub fn from_usize(i: usize) -> Actor {
        Self(i.try_into().expect("actor index is out of bounds"))
    }
}
