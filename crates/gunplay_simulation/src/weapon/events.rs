//! Weapon events
//!
//! **Notifications** (weapon → HUD / audio / animation), payload только
//! entity оружия:
//! - `ReloadStarted`, `ReloadEnded`, `ShotFired`
//!
//! **Intents** (owner → weapon):
//! - `EquipWeaponIntent` — включить оружие (добавляет `Equipped`)
//! - `HolsterWeaponIntent` — выключить (убирает `Equipped`, отменяет reload)

use bevy::prelude::*;

/// Reload key нажат, перезарядка началась
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadStarted {
    pub weapon: Entity,
}

/// Перезарядка закончилась (отпущен ключ, отказ, holster)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadEnded {
    pub weapon: Entity,
}

/// Выстрел произведён (попал или нет)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotFired {
    pub weapon: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipWeaponIntent {
    pub weapon: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolsterWeaponIntent {
    pub weapon: Entity,
}
