//! Weapon systems (per-frame state machine)
//!
//! Порядок внутри `GunplaySet::Weapons` (chain):
//! 1. `process_weapon_intents` — equip / holster
//! 2. `tick_weapon_cooldowns`
//! 3. `handle_reload_input` — key down (start) потом key up (end)
//! 4. `advance_reloads` — накопление времени, выдача патронов
//! 5. `fire_weapons`
//!
//! Key up обрабатывается до `advance_reloads`, поэтому отпускание в том же
//! frame, где таймер истёк, отбрасывает перезарядку.

use bevy::prelude::*;

use super::{
    spread_direction, Aiming, EquipWeaponIntent, Equipped, HolsterWeaponIntent, RaycastWeapon,
    ReloadEnded, ReloadStart, ReloadStarted, ReloadTick, ShootMode, ShotFired, WeaponRig,
    WeaponStats,
};
use crate::components::{AmmoPouch, CollisionLayers};
use crate::effects::spawn_muzzle_flash;
use crate::hitscan::HitscanRequest;
use crate::input::WeaponInputState;
use crate::pause::PauseState;
use crate::DeterministicRng;

/// System: equip / holster intents
pub fn process_weapon_intents(
    mut commands: Commands,
    mut equip_events: EventReader<EquipWeaponIntent>,
    mut holster_events: EventReader<HolsterWeaponIntent>,
    mut weapons: Query<&mut RaycastWeapon>,
    mut reload_ended: EventWriter<ReloadEnded>,
) {
    for intent in holster_events.read() {
        let Ok(mut weapon) = weapons.get_mut(intent.weapon) else {
            continue;
        };

        if weapon.cancel_reload() {
            reload_ended.write(ReloadEnded {
                weapon: intent.weapon,
            });
        }

        commands.entity(intent.weapon).remove::<Equipped>();
        crate::logger::log(&format!("Weapon {:?} holstered", intent.weapon));
    }

    for intent in equip_events.read() {
        if !weapons.contains(intent.weapon) {
            crate::logger::log_warning(&format!(
                "EquipWeaponIntent: {:?} is not a RaycastWeapon",
                intent.weapon
            ));
            continue;
        }

        commands.entity(intent.weapon).insert(Equipped);
        crate::logger::log(&format!("Weapon {:?} equipped", intent.weapon));
    }
}

/// System: cooldown timers (scaled time, не зависит от FPS)
pub fn tick_weapon_cooldowns(
    time: Res<Time>,
    mut weapons: Query<&mut RaycastWeapon, With<Equipped>>,
) {
    for mut weapon in weapons.iter_mut() {
        weapon.tick_cooldown(time.delta_secs());
    }
}

/// System: reload key down / up
///
/// Down: прерывает старую routine, `ReloadStarted`, затем проверка
/// preconditions (резерв пуст / магазин полон → сразу `ReloadEnded`).
/// Up: отмена routine, `ReloadEnded`.
///
/// Во время паузы новые перезарядки не начинаются, но отпускание
/// обрабатывается всегда.
pub fn handle_reload_input(
    input: Res<WeaponInputState>,
    pause: Option<Res<PauseState>>,
    mut weapons: Query<(Entity, &WeaponStats, &mut RaycastWeapon, &WeaponRig), With<Equipped>>,
    pouches: Query<&AmmoPouch>,
    mut reload_started: EventWriter<ReloadStarted>,
    mut reload_ended: EventWriter<ReloadEnded>,
) {
    let input = input.0;
    let paused = pause.is_some_and(|pause| pause.is_paused());
    let press = input.reload_pressed && !paused;

    if !press && !input.reload_released {
        return;
    }

    for (entity, stats, mut weapon, rig) in weapons.iter_mut() {
        if press {
            let reserve = pouches
                .get(rig.owner)
                .map(|pouch| pouch.get_ammunition(stats.ammo_type))
                .unwrap_or(0);

            let start = weapon.begin_reload(stats, reserve);
            reload_started.write(ReloadStarted { weapon: entity });

            if start == ReloadStart::Refused {
                reload_ended.write(ReloadEnded { weapon: entity });
                crate::logger::log(&format!(
                    "Weapon {:?}: reload refused (magazine {}/{}, reserve {})",
                    entity,
                    weapon.magazine(),
                    stats.magazine_capacity,
                    reserve
                ));
            }
        }

        if input.reload_released {
            weapon.cancel_reload();
            reload_ended.write(ReloadEnded { weapon: entity });
        }
    }
}

/// System: продвинуть in-flight перезарядки, выдать патроны из резерва
pub fn advance_reloads(
    time: Res<Time>,
    mut weapons: Query<(Entity, &WeaponStats, &mut RaycastWeapon, &WeaponRig), With<Equipped>>,
    mut pouches: Query<&mut AmmoPouch>,
) {
    for (entity, stats, mut weapon, rig) in weapons.iter_mut() {
        let ReloadTick::Complete { requested } = weapon.advance_reload(stats, time.delta_secs())
        else {
            continue;
        };

        let granted = match pouches.get_mut(rig.owner) {
            Ok(mut pouch) => pouch.take_ammunition(stats.ammo_type, requested),
            Err(_) => {
                crate::logger::log_warning(&format!(
                    "Weapon {:?}: owner {:?} has no AmmoPouch",
                    entity, rig.owner
                ));
                0
            }
        };

        let loaded = weapon.load(stats, granted);
        crate::logger::log(&format!(
            "Weapon {:?}: reloaded +{} ({}/{})",
            entity,
            loaded,
            weapon.magazine(),
            stats.magazine_capacity
        ));
    }
}

/// System: стрельба
///
/// Single — на press edge, Auto — пока кнопка зажата. Выстрел: магазин -1,
/// cooldown, muzzle flash, hitscan луч из камеры с разбросом, `ShotFired`.
pub fn fire_weapons(
    mut commands: Commands,
    input: Res<WeaponInputState>,
    mut rng: ResMut<DeterministicRng>,
    mut weapons: Query<
        (Entity, &WeaponStats, &mut RaycastWeapon, &WeaponRig, Option<&Aiming>),
        With<Equipped>,
    >,
    transforms: Query<&GlobalTransform>,
    layers: Query<&CollisionLayers>,
    mut requests: EventWriter<HitscanRequest>,
    mut shots: EventWriter<ShotFired>,
) {
    let input = input.0;
    if !input.fire_pressed && !input.fire_held {
        return;
    }

    for (entity, stats, mut weapon, rig, aiming) in weapons.iter_mut() {
        let triggered = match stats.shoot_mode {
            ShootMode::Single => input.fire_pressed,
            ShootMode::Auto => input.fire_held,
        };

        if !triggered || !weapon.try_fire(stats) {
            continue;
        }

        match transforms.get(rig.muzzle) {
            Ok(muzzle) => {
                spawn_muzzle_flash(&mut commands, &stats.muzzle_flash, muzzle.compute_transform());
            }
            Err(_) => crate::logger::log_warning(&format!(
                "Weapon {:?}: muzzle {:?} has no transform",
                entity, rig.muzzle
            )),
        }

        match transforms.get(rig.camera) {
            Ok(camera) => {
                let spread = aiming.map(|aiming| aiming.spread).unwrap_or(0.0);
                let direction = spread_direction(*camera.forward(), spread, &mut rng.rng);
                let excluded_layers = layers
                    .get(rig.owner)
                    .map(|layers| layers.memberships)
                    .unwrap_or(0);

                requests.write(HitscanRequest {
                    weapon: entity,
                    shooter: rig.owner,
                    origin: camera.translation(),
                    direction,
                    max_distance: stats.range,
                    damage: stats.damage,
                    excluded_layers,
                });
            }
            Err(_) => crate::logger::log_warning(&format!(
                "Weapon {:?}: camera {:?} has no transform, shot has no ray",
                entity, rig.camera
            )),
        }

        shots.write(ShotFired { weapon: entity });
    }
}

/// Run condition: симуляция не на паузе (нет `PauseState` → не на паузе)
pub fn simulation_running(pause: Option<Res<PauseState>>) -> bool {
    pause.is_none_or(|pause| !pause.is_paused())
}
