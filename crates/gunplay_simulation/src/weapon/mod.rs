//! Hitscan weapon domain
//!
//! ECS ответственность:
//! - Stats (`WeaponStats`, data-driven) + runtime state (`RaycastWeapon`)
//! - Reload / cooldown / fire rules
//! - Notifications: `ReloadStarted`, `ReloadEnded`, `ShotFired`
//!
//! Вне домена: ray cast (`crate::hitscan`), визуал (`crate::effects`),
//! резерв патронов (`AmmoPouch` владельца).

use bevy::prelude::*;

pub mod aiming;
pub mod events;
pub mod rig;
pub mod spread;
pub mod state;
pub mod stats;
pub mod systems;


pub use aiming::*;
pub use events::*;
pub use rig::*;
pub use spread::*;
pub use state::*;
pub use stats::*;
pub use systems::*;

/// Weapon Plugin
///
/// Регистрирует weapon системы в `Update` (один тик на frame):
/// 1. process_weapon_intents — equip / holster
/// 2. tick_weapon_cooldowns
/// 3. handle_reload_input
/// 4. advance_reloads
/// 5. fire_weapons (только когда не на паузе)
pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ReloadStarted>()
            .add_event::<ReloadEnded>()
            .add_event::<ShotFired>()
            .add_event::<EquipWeaponIntent>()
            .add_event::<HolsterWeaponIntent>()
            .add_event::<crate::hitscan::HitscanRequest>()
            .init_resource::<crate::DeterministicRng>()
            .init_resource::<crate::input::WeaponInputState>()
            .add_systems(
                Update,
                (
                    process_weapon_intents,
                    tick_weapon_cooldowns,
                    handle_reload_input,
                    advance_reloads,
                    fire_weapons.run_if(simulation_running),
                )
                    .chain()
                    .in_set(crate::GunplaySet::Weapons),
            );
    }
}
