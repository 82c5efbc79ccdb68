//! Rapier-backed ray resolver
//!
//! Фильтр луча:
//! - sensors (trigger volumes) игнорируются
//! - collider'ы, чьи memberships целиком в `excluded_layers`, игнорируются
//!   (владелец не попадает сам в себя)

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{HitscanHit, HitscanRequest};

/// Query filter для одного луча
pub fn hitscan_filter(excluded_layers: u32) -> QueryFilter<'static> {
    let excluded = Group::from_bits_truncate(excluded_layers);

    QueryFilter::default()
        .exclude_sensors()
        .groups(CollisionGroups::new(Group::ALL, Group::ALL.difference(excluded)))
}

/// System: `HitscanRequest` → rapier ray cast → `HitscanHit`
pub fn resolve_hitscan_rays(
    mut requests: EventReader<HitscanRequest>,
    rapier_context: ReadRapierContext,
    mut hits: EventWriter<HitscanHit>,
) {
    if requests.is_empty() {
        return;
    }

    let Ok(context) = rapier_context.single() else {
        // Нет physics world (headless без RapierPhysicsPlugin) — лучи
        // резолвит кто-то другой
        requests.clear();
        return;
    };

    for request in requests.read() {
        let Some(direction) = request.direction.try_normalize() else {
            continue;
        };

        let hit = context.cast_ray_and_get_normal(
            request.origin,
            direction,
            request.max_distance,
            true,
            hitscan_filter(request.excluded_layers),
        );

        let Some((target, intersection)) = hit else {
            crate::logger::log(&format!(
                "Hitscan from {:?}: miss (range {})",
                request.weapon, request.max_distance
            ));
            continue;
        };

        crate::logger::log(&format!(
            "Hitscan from {:?}: hit {:?} at {:?} (toi {:.2})",
            request.weapon, target, intersection.point, intersection.time_of_impact
        ));

        hits.write(HitscanHit::from_request(
            request,
            target,
            intersection.point,
            intersection.normal,
        ));
    }
}
