//! Hitscan domain — мгновенные лучевые выстрелы
//!
//! Flow (intent → physics → rules):
//! 1. `fire_weapons` пишет `HitscanRequest` (origin, direction, range,
//!    исключённые слои владельца)
//! 2. `resolve_hitscan_rays` (rapier) делает ray cast, пишет `HitscanHit`
//! 3. `apply_hitscan_hits`: hit effect на задетом entity + `TargetHit`
//!    для `Hittable`
//! 4. `apply_target_damage`: `TargetHit` → `Health`
//!
//! Физика заменяема: любой resolver, который пишет `HitscanHit` до
//! `apply_hitscan_hits`, подходит (headless tests используют свой).

use bevy::prelude::*;

pub mod events;
pub mod resolve;
pub mod systems;

pub use events::*;
pub use resolve::*;
pub use systems::*;

#[cfg(test)]
mod resolve_tests;

pub struct HitscanPlugin;

impl Plugin for HitscanPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitscanRequest>()
            .add_event::<HitscanHit>()
            .add_event::<TargetHit>()
            .add_systems(
                Update,
                (resolve_hitscan_rays, apply_hitscan_hits, apply_target_damage)
                    .chain()
                    .in_set(crate::GunplaySet::Hitscan),
            );
    }
}
