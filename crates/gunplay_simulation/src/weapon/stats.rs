//! Weapon stats component (hitscan конфигурация)
//!
//! Data-driven: `WeaponStats` сериализуется в RON (см. `crate::config`),
//! built-in presets — `pistol()` и `assault_rifle()`.
//!
//! Runtime state (магазин, cooldown, reload) живёт отдельно в
//! `RaycastWeapon`, stats только читаются.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Тип патронов (ключ в `AmmoPouch`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AmmoType {
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
}

/// Режим стрельбы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ShootMode {
    /// Один выстрел на нажатие (edge-triggered)
    Single,
    /// Стрельба пока кнопка зажата (level-triggered)
    Auto,
}

/// Визуальный эффект (prefab + время жизни)
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct EffectSpec {
    /// Prefab path (renderer резолвит в particle system)
    pub prefab: String,
    /// Через сколько секунд entity эффекта деспавнится
    pub lifetime: f32,
}

impl EffectSpec {
    pub fn new(prefab: impl Into<String>, lifetime: f32) -> Self {
        Self {
            prefab: prefab.into(),
            lifetime,
        }
    }
}

/// Hitscan weapon stats
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct WeaponStats {
    pub ammo_type: AmmoType,
    pub shoot_mode: ShootMode,

    /// Урон за попадание
    pub damage: f32,

    /// Дальность луча (метры)
    pub range: f32,

    /// Пауза после выстрела (секунды, ≥ 0)
    pub cooldown: f32,

    /// Длительность перезарядки (секунды)
    pub reload_time: f32,

    /// Ёмкость магазина (≥ 1)
    pub magazine_capacity: u32,

    pub muzzle_flash: EffectSpec,
    pub hit_effect: EffectSpec,
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self::pistol()
    }
}

impl WeaponStats {
    /// Полуавтоматический пистолет
    pub fn pistol() -> Self {
        Self {
            ammo_type: AmmoType::Pistol,
            shoot_mode: ShootMode::Single,
            damage: 20.0,
            range: 50.0,
            cooldown: 0.2,
            reload_time: 1.2,
            magazine_capacity: 12,
            muzzle_flash: EffectSpec::new("effects/muzzle_flash_small", 0.1),
            hit_effect: EffectSpec::new("effects/bullet_impact", 2.0),
        }
    }

    /// Автоматическая винтовка
    pub fn assault_rifle() -> Self {
        Self {
            ammo_type: AmmoType::Rifle,
            shoot_mode: ShootMode::Auto,
            damage: 12.0,
            range: 120.0,
            cooldown: 0.1,
            reload_time: 2.0,
            magazine_capacity: 30,
            muzzle_flash: EffectSpec::new("effects/muzzle_flash_rifle", 0.08),
            hit_effect: EffectSpec::new("effects/bullet_impact", 2.0),
        }
    }

    pub fn is_automatic(&self) -> bool {
        self.shoot_mode == ShootMode::Auto
    }
}
