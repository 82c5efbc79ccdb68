//! Shot spread: случайное угловое отклонение направления выстрела
//!
//! Pitch (X) и yaw (Y) независимо из U[-spread, spread] градусов,
//! roll = 0. Порядок вращений YXZ (yaw поверх pitch).

use bevy::prelude::*;
use rand::Rng;

/// Вращение разброса по углам в градусах
pub fn spread_rotation(pitch_degrees: f32, yaw_degrees: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw_degrees.to_radians(),
        pitch_degrees.to_radians(),
        0.0,
    )
}

/// Применить случайный разброс к `forward`
pub fn spread_direction<R: Rng + ?Sized>(forward: Vec3, spread: f32, rng: &mut R) -> Vec3 {
    let spread = spread.abs();
    if spread == 0.0 {
        return forward;
    }

    let pitch = rng.gen_range(-spread..=spread);
    let yaw = rng.gen_range(-spread..=spread);
    spread_rotation(pitch, yaw) * forward
}
