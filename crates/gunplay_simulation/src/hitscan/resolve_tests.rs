//! Tests for the rapier ray resolver (headless App + RapierPhysicsPlugin).

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;
    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;
    use bevy_rapier3d::prelude::*;

    use crate::components::layers;
    use crate::hitscan::{HitscanHit, HitscanPlugin, HitscanRequest};
    use crate::weapon::WeaponStats;
    use crate::GunplaySet;

    #[derive(Resource, Default)]
    struct RecordedHits(Vec<HitscanHit>);

    fn record_hits(mut hits: EventReader<HitscanHit>, mut recorded: ResMut<RecordedHits>) {
        recorded.0.extend(hits.read().copied());
    }

    /// Луч вдоль -Z из начала координат:
    /// свой коллайдер (z = -2), trigger (z = -4), враг (z = -6)
    struct Range {
        app: App,
        weapon: Entity,
        own: Entity,
        trigger: Entity,
        enemy: Entity,
    }

    fn at(z: f32) -> (Transform, GlobalTransform) {
        let transform = Transform::from_xyz(0.0, 0.0, z);
        (transform, GlobalTransform::from(transform))
    }

    impl Range {
        fn new() -> Self {
            let mut app = App::new();
            app.add_plugins((
                MinimalPlugins,
                bevy::transform::TransformPlugin,
                RapierPhysicsPlugin::<NoUserData>::default(),
            ))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
            .configure_sets(Update, GunplaySet::Hitscan)
            .add_plugins(HitscanPlugin)
            .init_resource::<RecordedHits>()
            .add_systems(Last, record_hits);

            let world = app.world_mut();
            let weapon = world.spawn(WeaponStats::pistol()).id();
            let own = world
                .spawn((
                    at(-2.0),
                    Collider::ball(0.5),
                    CollisionGroups::new(Group::from_bits_truncate(layers::PLAYER), Group::ALL),
                ))
                .id();
            let trigger = world
                .spawn((at(-4.0), Collider::cuboid(1.0, 1.0, 0.25), Sensor))
                .id();
            let enemy = world
                .spawn((
                    at(-6.0),
                    Collider::ball(0.5),
                    CollisionGroups::new(Group::from_bits_truncate(layers::ENEMY), Group::ALL),
                ))
                .id();

            // Коллайдеры попадают в physics world + query pipeline
            for _ in 0..3 {
                app.update();
            }

            Self {
                app,
                weapon,
                own,
                trigger,
                enemy,
            }
        }

        fn shoot(&mut self, max_distance: f32, excluded_layers: u32) -> Vec<HitscanHit> {
            self.app.world_mut().resource_mut::<RecordedHits>().0.clear();
            self.app.world_mut().send_event(HitscanRequest {
                weapon: self.weapon,
                shooter: self.weapon,
                origin: Vec3::ZERO,
                direction: Vec3::NEG_Z,
                max_distance,
                damage: 10.0,
                excluded_layers,
            });
            self.app.update();
            self.app.world().resource::<RecordedHits>().0.clone()
        }
    }

    #[test]
    fn test_ray_skips_own_layer_and_triggers() {
        let mut range = Range::new();

        let hits = range.shoot(20.0, layers::PLAYER);

        assert_eq!(hits.len(), 1);
        let hit = hits[0];
        assert_eq!(hit.target, range.enemy);
        assert_ne!(hit.target, range.own);
        assert_ne!(hit.target, range.trigger);
        assert_eq!(hit.damage, 10.0);
        assert_relative_eq!(hit.point.z, -5.5, epsilon = 1e-3);
        assert!(hit.normal.abs_diff_eq(Vec3::Z, 1e-3));
    }

    #[test]
    fn test_ray_hits_own_collider_without_exclusion() {
        let mut range = Range::new();

        let hits = range.shoot(20.0, 0);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, range.own);
    }

    #[test]
    fn test_ray_misses_past_max_distance() {
        let mut range = Range::new();

        // Поверхность врага на 5.5
        let hits = range.shoot(5.0, layers::PLAYER);

        assert!(hits.is_empty());
    }
}
