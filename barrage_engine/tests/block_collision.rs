mod common;

use barrage_common::{
    entity::chunk::Chunk,
    math::{
        Vec3F32,
        Vec3I32,
    },
};
use barrage_engine::{
    BarrageOptions,
    BarrageRegistry,
    Voxel,
};
use common::*;

#[test]
fn solid_block_stops_barrage() {
    let _ = env_logger::try_init();

    let mut world = TestWorld::new();
    world.set_voxel(Vec3I32::new(3, 0, 0), Voxel::Solid(STONE));

    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();

    // Box covers exactly the block it is centered in
    let id = registry.spawn(barrage_at(
        Vec3F32::new(2.5, 0.5, 0.5),
        BarrageOptions {
            speed: 1.0,
            ..Default::default()
        },
        &log,
    ));

    registry.advance_all(&world).unwrap();

    let hits = log.hits_of(id);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].blocks, vec![Vec3I32::new(3, 0, 0)]);
    assert!(hits[0].actors.is_empty());
    assert!(!hits[0].timed_out);

    assert!(registry.get(id).is_none());
}

#[test]
fn across_block_ignores_solid_block() {
    let _ = env_logger::try_init();

    let mut world = TestWorld::new();
    world.set_voxel(Vec3I32::new(3, 0, 0), Voxel::Solid(STONE));

    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();

    let id = registry.spawn(barrage_at(
        Vec3F32::new(2.5, 0.5, 0.5),
        BarrageOptions {
            speed: 1.0,
            across_block: true,
            ..Default::default()
        },
        &log,
    ));

    registry.advance_all(&world).unwrap();

    assert!(log.hits().is_empty());

    let barrage = registry.get(id).unwrap();
    assert!(barrage.is_valid());
    assert_eq!(barrage.state().position().vector, Vec3F32::new(3.5, 0.5, 0.5));
}

#[test]
fn liquid_stops_only_without_across_liquid() {
    let _ = env_logger::try_init();

    let mut world = TestWorld::new();
    world.set_voxel(Vec3I32::new(0, 0, 0), Voxel::Liquid(WATER));

    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();

    let swimmer = registry.spawn(barrage_at(
        Vec3F32::splat(0.5),
        BarrageOptions {
            across_liquid: true,
            ..stationary()
        },
        &log,
    ));

    let sinker = registry.spawn(barrage_at(Vec3F32::splat(0.5), stationary(), &log));

    registry.advance_all(&world).unwrap();

    assert!(log.hits_of(swimmer).is_empty());
    assert!(registry.get(swimmer).is_some());

    let hits = log.hits_of(sinker);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].blocks, vec![Vec3I32::new(0, 0, 0)]);
    assert!(registry.get(sinker).is_none());
}

#[test]
fn blocks_in_unready_chunks_are_ignored() {
    let _ = env_logger::try_init();

    let mut world = TestWorld::new();
    world.set_voxel(Vec3I32::new(16, 0, 0), Voxel::Solid(STONE));
    world.set_ready(
        Chunk {
            position: Vec3I32::new(1, 0, 0),
            dimension: 0,
        },
        false,
    );

    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();

    // Straddles the chunk border, centered in the ready chunk
    let id = registry.spawn(barrage_at(Vec3F32::new(15.9, 0.5, 0.5), stationary(), &log));

    registry.advance_all(&world).unwrap();

    assert!(log.hits().is_empty());
    assert!(registry.get(id).unwrap().is_valid());
}

#[test]
fn unready_region_skips_tick() {
    let _ = env_logger::try_init();

    let chunk = Chunk {
        position: Vec3I32::ZERO,
        dimension: 0,
    };

    let mut world = TestWorld::new();
    world.set_ready(chunk, false);

    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();
    let controller = CountingController::default();

    let id = registry.spawn(
        barrage_at(
            Vec3F32::splat(0.5),
            BarrageOptions {
                speed: 0.25,
                max_living_tick: Some(1),
                ..Default::default()
            },
            &log,
        )
        .with_controller(controller.clone()),
    );

    for _ in 0 .. 5 {
        registry.advance_all(&world).unwrap();
    }

    let state = registry.get(id).unwrap().state();
    assert_eq!(state.ticks_alive(), 0);
    assert_eq!(state.position().vector, Vec3F32::splat(0.5));
    assert!(controller.calls().teleports.is_empty());

    world.set_ready(chunk, true);
    registry.advance_all(&world).unwrap();

    let state = registry.get(id).unwrap().state();
    assert_eq!(state.ticks_alive(), 1);
    assert_eq!(state.position().vector, Vec3F32::new(0.75, 0.5, 0.5));
    assert_eq!(controller.calls().teleports.len(), 1);
}
