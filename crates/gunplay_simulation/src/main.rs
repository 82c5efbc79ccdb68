//! Headless demo gunplay
//!
//! Скриптованный input без окна: перезарядка винтовки, очередь,
//! пауза посреди очереди. Опционально грузит stats из RON файла:
//! `gunplay_simulation path/to/rifle.ron`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use gunplay_simulation::logger::{log_error, log_info};
use gunplay_simulation::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    let stats = match std::env::args().nth(1) {
        Some(path) => match load_weapon_stats_file(&path) {
            Ok(stats) => stats,
            Err(err) => {
                log_error(&format!("{}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => WeaponStats::assault_rifle(),
    };

    log_info(&format!(
        "Starting gunplay headless demo (seed: {}, weapon: {:?} x{})",
        seed, stats.ammo_type, stats.magazine_capacity
    ));

    let weapon = spawn_player_with_weapon(app.world_mut(), stats.clone());
    app.world_mut().spawn(PauseToggle);
    app.world_mut().send_event(EquipWeaponIntent { weapon });

    // Держим R пока перезарядка не закончится
    app.world_mut().send_event(WeaponInputEvent::reload_press());
    run_frames(&mut app, frames_for(stats.reload_time) + 2);
    app.world_mut().send_event(WeaponInputEvent::reload_release());
    app.update();
    report(&app, weapon, "after reload");

    // Очередь одну секунду, пауза на середине
    for frame in 0..frames_for(1.0) {
        if frame == frames_for(0.5) {
            app.world_mut().send_event(PauseInputEvent);
        }
        let input = if frame == 0 {
            WeaponInputEvent::fire_click()
        } else {
            WeaponInputEvent::fire_hold()
        };
        app.world_mut().send_event(input);
        app.update();
    }
    report(&app, weapon, "after burst");

    log_info("Simulation complete!");
}

fn spawn_player_with_weapon(world: &mut World, stats: WeaponStats) -> Entity {
    let player = world
        .spawn((
            Player,
            Health::new(100.0),
            CollisionLayers::player(),
            AmmoPouch::new().with_ammunition(stats.ammo_type, stats.magazine_capacity * 3),
        ))
        .id();

    let camera_tf = Transform::from_xyz(0.0, 1.7, 0.0);
    let camera = world
        .spawn((PlayerCamera, camera_tf, GlobalTransform::from(camera_tf)))
        .id();

    let muzzle_tf = Transform::from_xyz(0.2, 1.5, -0.6);
    let muzzle = world
        .spawn((muzzle_tf, GlobalTransform::from(muzzle_tf)))
        .id();

    world
        .spawn((
            stats,
            RaycastWeapon::default(),
            Aiming::new(1.5),
            WeaponRig {
                owner: player,
                camera,
                muzzle,
            },
        ))
        .id()
}

fn frames_for(seconds: f32) -> usize {
    (seconds / FRAME.as_secs_f32()).ceil() as usize
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn report(app: &App, weapon: Entity, label: &str) {
    let Some(state) = app.world().get::<RaycastWeapon>(weapon) else {
        return;
    };
    let paused = app.world().resource::<PauseState>().is_paused();

    log_info(&format!(
        "{}: magazine={} reloading={} cooling_down={} paused={}",
        label,
        state.magazine(),
        state.is_reloading(),
        state.is_cooling_down(),
        paused
    ));
}
