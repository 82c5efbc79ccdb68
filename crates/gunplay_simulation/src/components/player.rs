//! Player control marker + camera marker

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Pause toggle смотрит на `Health` именно этого entity (мертвый игрок
/// не может открыть паузу). Оружие ссылается на владельца через
/// `WeaponRig::owner`, а не через глобальный поиск.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker: камера, из которой стреляет hitscan оружие
///
/// Origin луча = позиция камеры, direction = forward (-Z) с разбросом.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerCamera;
