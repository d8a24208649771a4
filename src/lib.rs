//! Projectile ("barrage") simulation over a voxel world.
//!
//! Re-exports the workspace crates, see [`engine`] for the simulation itself.

pub use barrage_common as common;
pub use barrage_engine as engine;

pub use barrage_engine::{
    Barrage,
    BarrageId,
    BarrageKind,
    BarrageOptions,
    BarrageRegistry,
    BarrageState,
    Controller,
    HitBox,
    HitContext,
    HitResult,
    NullController,
    SpawnHandle,
    Voxel,
    WorldQuery,
};
