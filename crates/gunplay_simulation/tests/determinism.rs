//! Детерминизм shot spread
//!
//! Одинаковый seed → одинаковые направления лучей

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use gunplay_simulation::*;

/// Направления всех лучей за прогон
#[derive(Resource, Default)]
struct RayLog(Vec<Vec3>);

fn log_rays(mut requests: EventReader<HitscanRequest>, mut log: ResMut<RayLog>) {
    log.0.extend(requests.read().map(|request| request.direction));
}

fn run_burst(seed: u64, frames: usize) -> Vec<Vec3> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
        .init_resource::<RayLog>()
        .add_systems(Last, log_rays);

    let stats = WeaponStats::assault_rifle();
    let world = app.world_mut();
    let player = world
        .spawn((Player, Health::new(100.0), CollisionLayers::player()))
        .id();
    let camera_tf = Transform::from_xyz(0.0, 1.7, 0.0);
    let camera = world
        .spawn((PlayerCamera, camera_tf, GlobalTransform::from(camera_tf)))
        .id();
    let weapon = world
        .spawn((
            RaycastWeapon::with_magazine(&stats, stats.magazine_capacity),
            stats,
            Aiming::new(2.0),
            WeaponRig {
                owner: player,
                camera,
                muzzle: camera,
            },
        ))
        .id();

    app.world_mut().send_event(EquipWeaponIntent { weapon });
    app.update();

    for _ in 0..frames {
        app.world_mut().send_event(WeaponInputEvent::fire_hold());
        app.update();
    }

    app.world_mut().resource_mut::<RayLog>().0.drain(..).collect()
}

#[test]
fn test_same_seed_same_spread() {
    const SEED: u64 = 12345;

    let run1 = run_burst(SEED, 40);
    let run2 = run_burst(SEED, 40);

    assert!(!run1.is_empty());
    assert_eq!(
        run1, run2,
        "Прогоны с одинаковым seed ({}) дали разные лучи",
        SEED
    );
}

#[test]
fn test_spread_stays_in_cone() {
    let rays = run_burst(42, 40);
    let max_angle = 2.0_f32.to_radians() * std::f32::consts::SQRT_2 + 1e-4;

    for ray in rays {
        assert!((ray.length() - 1.0).abs() < 1e-4);
        assert!(ray.angle_between(Vec3::NEG_Z) <= max_angle);
    }
}

#[test]
fn test_different_seed_different_spread() {
    let run1 = run_burst(1, 20);
    let run2 = run_burst(2, 20);

    assert_eq!(run1.len(), run2.len());
    assert_ne!(run1, run2);
}
