//! Aiming provider: текущий разброс выстрела

use bevy::prelude::*;

/// Максимальное угловое отклонение выстрела (градусы)
///
/// Пишется внешним aiming контроллером (hip fire / ADS, recoil),
/// оружие только читает. Нет компонента → разброс 0.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Aiming {
    pub spread: f32,
}

impl Aiming {
    pub fn new(spread: f32) -> Self {
        Self {
            spread: spread.abs(),
        }
    }
}
