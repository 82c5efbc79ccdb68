//! Живучесть и collision layers

use bevy::prelude::*;

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount.max(0.0)).max(0.0);
    }
}

/// Marker: entity принимает урон от hitscan попаданий
///
/// Без этого маркера попадание только оставляет hit effect.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Hittable;

/// Collision layer bits (совпадают с rapier `Group` битами)
pub mod layers {
    pub const WORLD: u32 = 1 << 0;
    pub const PLAYER: u32 = 1 << 1;
    pub const ENEMY: u32 = 1 << 2;
}

/// Слои, в которых состоит entity
///
/// Для владельца оружия — слои, которые hitscan луч игнорирует
/// (чтобы игрок не попадал в собственный коллайдер).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CollisionLayers {
    pub memberships: u32,
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self { memberships: layers::WORLD }
    }
}

impl CollisionLayers {
    pub fn new(memberships: u32) -> Self {
        Self { memberships }
    }

    pub fn player() -> Self {
        Self::new(layers::PLAYER)
    }
}
