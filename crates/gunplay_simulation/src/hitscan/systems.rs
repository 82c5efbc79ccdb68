//! Hit application systems (rules layer)

use bevy::prelude::*;

use super::{HitscanHit, TargetHit};
use crate::components::{Health, Hittable};
use crate::effects::{impact_transform, spawn_hit_effect};
use crate::weapon::WeaponStats;

/// System: `HitscanHit` → hit effect + damage callback
///
/// Hit effect спавнится на любом задетом entity (стена тоже получает
/// дырку), `TargetHit` — только для `Hittable`.
pub fn apply_hitscan_hits(
    mut commands: Commands,
    mut hits: EventReader<HitscanHit>,
    hittables: Query<(), With<Hittable>>,
    transforms: Query<&GlobalTransform>,
    weapons: Query<&WeaponStats>,
    mut target_hits: EventWriter<TargetHit>,
) {
    for hit in hits.read() {
        if hit.shooter == hit.target {
            crate::logger::log_warning(&format!(
                "Hitscan self-hit ignored: {:?} (layer filter misconfigured?)",
                hit.shooter
            ));
            continue;
        }

        if hittables.contains(hit.target) {
            target_hits.write(TargetHit {
                shooter: hit.shooter,
                target: hit.target,
                damage: hit.damage,
            });
        }

        let Ok(stats) = weapons.get(hit.weapon) else {
            continue;
        };

        // Цель могла быть деспавнена между ray cast и применением
        let Ok(parent) = transforms.get(hit.target) else {
            continue;
        };

        let world = GlobalTransform::from(impact_transform(hit.point, hit.normal));
        let local = world.reparented_to(parent);
        spawn_hit_effect(&mut commands, &stats.hit_effect, hit.target, local);
    }
}

/// System: `TargetHit` → `Health`
pub fn apply_target_damage(
    mut target_hits: EventReader<TargetHit>,
    mut targets: Query<&mut Health>,
) {
    for hit in target_hits.read() {
        let Ok(mut health) = targets.get_mut(hit.target) else {
            continue;
        };

        let before = health.current;
        health.take_damage(hit.damage);

        crate::logger::log(&format!(
            "💥 {:?} hit {:?} for {} (HP: {} → {})",
            hit.shooter, hit.target, hit.damage, before, health.current
        ));
    }
}
