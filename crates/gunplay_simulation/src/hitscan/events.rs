//! Hitscan events

use bevy::prelude::*;

/// Event: луч выстрела (weapon → physics)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitscanRequest {
    /// Оружие, которое выстрелило
    pub weapon: Entity,
    /// Владелец оружия
    pub shooter: Entity,
    pub origin: Vec3,
    /// Нормализованное направление (уже с разбросом)
    pub direction: Vec3,
    pub max_distance: f32,
    pub damage: f32,
    /// Слои, которые луч игнорирует (`CollisionLayers` владельца)
    pub excluded_layers: u32,
}

/// Event: луч во что-то попал (physics → rules)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitscanHit {
    pub weapon: Entity,
    pub shooter: Entity,
    /// Задетый collider entity
    pub target: Entity,
    pub point: Vec3,
    pub normal: Vec3,
    pub damage: f32,
}

impl HitscanHit {
    pub fn from_request(request: &HitscanRequest, target: Entity, point: Vec3, normal: Vec3) -> Self {
        Self {
            weapon: request.weapon,
            shooter: request.shooter,
            target,
            point,
            normal,
            damage: request.damage,
        }
    }
}

/// Event: damage callback для `Hittable` цели
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    pub shooter: Entity,
    pub target: Entity,
    pub damage: f32,
}
