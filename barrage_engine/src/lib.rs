//! Projectile ("barrage") simulation over a voxel world.
//!
//! Barrages are spawned into a [`BarrageRegistry`] that advances all of them
//! once per simulation step. Every step a barrage moves, collects the blocks,
//! actors and other barrages its hit box overlaps into a [`HitResult`] and
//! runs its hit pipeline if anything was hit.

pub mod barrage;
pub mod controller;
pub mod hit_result;
pub mod hitbox;
pub mod options;
pub mod registry;
pub mod world;

pub use barrage::{
    Barrage,
    BarrageId,
    BarrageKind,
    BarrageState,
    HitContext,
};
pub use controller::{
    Controller,
    NullController,
};
pub use hit_result::HitResult;
pub use hitbox::HitBox;
pub use options::BarrageOptions;
pub use registry::{
    BarrageRegistry,
    SpawnHandle,
};
pub use world::{
    Voxel,
    WorldQuery,
};
