//! Связи оружия с внешним миром (вместо глобальных singleton lookup)

use bevy::prelude::*;

/// Entity handles, передаваемые при создании оружия
///
/// - `owner`: носитель `AmmoPouch` и `CollisionLayers` (обычно `Player`)
/// - `camera`: откуда летит hitscan луч (`PlayerCamera`)
/// - `muzzle`: точка спавна muzzle flash
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponRig {
    pub owner: Entity,
    pub camera: Entity,
    pub muzzle: Entity,
}

/// Marker: оружие включено (в руках)
///
/// Оружие спавнится без него; `EquipWeaponIntent` добавляет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Equipped;
