mod common;

use barrage_common::math::Vec3F32;
use barrage_engine::{
    BarrageOptions,
    BarrageRegistry,
};
use common::*;

#[test]
fn times_out_when_ticks_alive_exceeds_max() {
    let _ = env_logger::try_init();

    let world = TestWorld::new();
    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();
    let controller = CountingController::default();

    let id = registry.spawn(
        barrage_at(
            Vec3F32::splat(0.5),
            BarrageOptions {
                speed: 0.1,
                max_living_tick: Some(5),
                ..Default::default()
            },
            &log,
        )
        .with_controller(controller.clone()),
    );

    for tick in 1 ..= 5 {
        registry.advance_all(&world).unwrap();

        assert_eq!(registry.get(id).unwrap().state().ticks_alive(), tick);
        assert!(log.hits().is_empty());
    }

    registry.advance_all(&world).unwrap();

    assert!(registry.get(id).is_none());

    let hits = log.hits_of(id);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].timed_out);
    assert_eq!(hits[0].ticks_alive, 6);
    assert!(hits[0].blocks.is_empty());
    assert!(hits[0].actors.is_empty());
    assert!(hits[0].barrages.is_empty());

    let calls = controller.calls();
    assert_eq!(calls.binds.len(), 1);
    assert_eq!(calls.teleports.len(), 6);
    assert_eq!(calls.cancels, 1);
}

#[test]
fn infinite_lifetime() {
    let _ = env_logger::try_init();

    let world = TestWorld::new();
    let log = HitLog::default();
    let mut registry = BarrageRegistry::new();

    let id = registry.spawn(barrage_at(
        Vec3F32::splat(0.5),
        BarrageOptions {
            max_living_tick: None,
            ..stationary()
        },
        &log,
    ));

    for _ in 0 .. 500 {
        registry.advance_all(&world).unwrap();
    }

    assert_eq!(registry.get(id).unwrap().state().ticks_alive(), 500);
    assert!(log.hits().is_empty());
}
