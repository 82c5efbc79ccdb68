//! gunplay simulation core
//!
//! ECS-симуляция на Bevy 0.16: hitscan оружие + pause toggle.
//!
//! Один тик на frame (`Update`), системы идут строго по `GunplaySet`:
//! Input → Pause → Weapons → Hitscan → Effects.
//! Внешние зависимости (владелец, камера, дуло, резерв патронов) передаются
//! entity handles (`WeaponRig`) и resources, без глобальных singleton.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod components;
pub mod config;
pub mod effects;
pub mod hitscan;
pub mod input;
pub mod logger;
pub mod pause;
pub mod weapon;

pub use components::*;
pub use config::{load_weapon_stats, load_weapon_stats_file, ConfigError};
pub use effects::{DespawnAfter, EffectKind, EffectsPlugin, VisualEffect};
pub use hitscan::{HitscanHit, HitscanPlugin, HitscanRequest, TargetHit};
pub use input::{PauseInputEvent, PlayerInputPlugin, WeaponInputEvent, WeaponInputState};
pub use pause::{PausePlugin, PauseState, PauseToggle, PauseToggled};
pub use weapon::{
    Aiming, AmmoType, EquipWeaponIntent, Equipped, HolsterWeaponIntent, RaycastWeapon,
    ReloadEnded, ReloadStarted, ShootMode, ShotFired, WeaponPlugin, WeaponRig, WeaponStats,
};

/// Порядок фаз внутри frame
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GunplaySet {
    /// Платформенный input → intent events
    Input,
    /// Pause toggle (до оружия, чтобы стрельба видела актуальную паузу)
    Pause,
    /// Cooldown / reload / fire
    Weapons,
    /// Ray cast + попадания
    Hitscan,
    /// Lifetime визуальных эффектов
    Effects,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GunplaySet::Input,
                GunplaySet::Pause,
                GunplaySet::Weapons,
                GunplaySet::Hitscan,
                GunplaySet::Effects,
            )
                .chain(),
        )
        .init_resource::<DeterministicRng>()
        .add_plugins((
            PlayerInputPlugin,
            PausePlugin,
            WeaponPlugin,
            HitscanPlugin,
            EffectsPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded), источник shot spread
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Без `SimulationPlugin` — caller добавляет нужные подсистемы сам.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}
