//! Visual effects (muzzle flash, hit impact)
//!
//! ECS хранит только entity эффекта: prefab path + transform + lifetime.
//! Renderer резолвит `VisualEffect::prefab` в particle system.
//! Despawn по таймеру — `despawn_expired_effects`.

use bevy::prelude::*;

use crate::weapon::EffectSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum EffectKind {
    MuzzleFlash,
    HitImpact,
}

/// Заспавненный визуальный эффект
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct VisualEffect {
    pub kind: EffectKind,
    pub prefab: String,
}

/// Деспавн через `remaining` секунд
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DespawnAfter {
    pub remaining: f32,
}

/// Muzzle flash в мировых координатах дула
pub fn spawn_muzzle_flash(commands: &mut Commands, spec: &EffectSpec, at: Transform) -> Entity {
    commands
        .spawn((
            VisualEffect {
                kind: EffectKind::MuzzleFlash,
                prefab: spec.prefab.clone(),
            },
            DespawnAfter {
                remaining: spec.lifetime,
            },
            at,
        ))
        .id()
}

/// Hit effect как child задетого entity
///
/// `local` — transform в пространстве родителя (эффект двигается вместе
/// с целью).
pub fn spawn_hit_effect(
    commands: &mut Commands,
    spec: &EffectSpec,
    parent: Entity,
    local: Transform,
) -> Entity {
    commands
        .spawn((
            VisualEffect {
                kind: EffectKind::HitImpact,
                prefab: spec.prefab.clone(),
            },
            DespawnAfter {
                remaining: spec.lifetime,
            },
            local,
            ChildOf(parent),
        ))
        .id()
}

/// Мировой transform попадания: +Z эффекта смотрит вдоль нормали
pub fn impact_transform(point: Vec3, normal: Vec3) -> Transform {
    let normal = normal.try_normalize().unwrap_or(Vec3::Y);
    Transform::from_translation(point).with_rotation(Quat::from_rotation_arc(Vec3::Z, normal))
}

/// System: тик lifetime + despawn
pub fn despawn_expired_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut DespawnAfter)>,
) {
    for (entity, mut despawn) in effects.iter_mut() {
        despawn.remaining -= time.delta_secs();
        if despawn.remaining <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            despawn_expired_effects.in_set(crate::GunplaySet::Effects),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_transform_faces_normal() {
        let tf = impact_transform(Vec3::new(1.0, 2.0, 3.0), Vec3::X * 4.0);

        assert_eq!(tf.translation, Vec3::new(1.0, 2.0, 3.0));
        assert!((tf.rotation * Vec3::Z).abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn test_impact_transform_degenerate_normal() {
        let tf = impact_transform(Vec3::ZERO, Vec3::ZERO);
        assert!((tf.rotation * Vec3::Z).abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn test_effects_despawn_after_lifetime() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_millis(100),
        ));
        app.configure_sets(Update, crate::GunplaySet::Effects);
        app.add_plugins(EffectsPlugin);

        let effect = app
            .world_mut()
            .spawn((
                VisualEffect {
                    kind: EffectKind::MuzzleFlash,
                    prefab: "effects/test".to_string(),
                },
                DespawnAfter { remaining: 0.25 },
                Transform::IDENTITY,
            ))
            .id();

        // Первый update: delta = 0
        app.update();
        assert!(app.world().get_entity(effect).is_ok());

        for _ in 0..4 {
            app.update();
        }
        assert!(app.world().get_entity(effect).is_err());
    }
}
