use crate::component::actor::ActorComponent;
use barrage_common::math::Aabb;

/// Space an actor occupies, barrages hit it when their boxes overlap.
#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub dimension: u32,
    pub aabb: Aabb,
}

pub type BodyActorComponent = ActorComponent<Body>;
