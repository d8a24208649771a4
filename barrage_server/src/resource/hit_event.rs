use barrage_common::{
    entity::actor::Actor,
    math::Vec3I32,
};
use barrage_engine::BarrageId;

/// World change requested by a barrage hit.
///
/// Collected during the barrage pass and applied after it,
/// so every barrage of the pass sees the same world.
#[derive(PartialEq, Clone, Debug)]
pub enum HitEvent {
    DamageActor {
        barrage: BarrageId,
        shooter: Option<Actor>,
        actor: Actor,
        amount: u32,
    },
    BreakBlock {
        barrage: BarrageId,
        dimension: u32,
        block: Vec3I32,
    },
}
