//! Segment casts against baked triangles.

use glam::Vec3;

use navtk_geometry::{segment_intersects_triangle, triangle_normal};

use crate::area::NavAreaData;
use crate::surface::NavSurface;
use crate::volume::NavVolume;

/// Hits at or below this segment parameter are ignored, so a cast that
/// starts on a triangle does not hit it.
pub const MIN_HIT_T: f32 = 0.01;

/// How a cast treats multiple hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaycastMode {
    /// Stop at the first triangle hit. Answers "is the segment blocked".
    AnyHit,
    /// Test every triangle and keep the closest hit.
    NearestHit,
}

/// A segment/triangle hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    /// Parameter along the segment, in `(MIN_HIT_T, 1)`.
    pub t: f32,
    /// Hit position, in the space the cast was made in.
    pub point: Vec3,
    /// Index of the hit triangle within the tested index array.
    pub triangle: usize,
    /// Unit normal of the hit triangle, following its winding.
    pub normal: Vec3,
}

/// Cast `start..end` against every triangle of `indices`.
///
/// Triangles whose three vertices all project before `start` or all
/// project past `end` along the segment direction are skipped without the
/// full intersection test.
pub fn raycast_triangles(
    vertices: &[Vec3],
    indices: &[u32],
    start: Vec3,
    end: Vec3,
    mode: RaycastMode,
) -> Option<RaycastHit> {
    let dir = end - start;
    let extent = dir.length_squared();
    let mut best: Option<RaycastHit> = None;

    for (triangle, tri) in indices.chunks_exact(3).enumerate() {
        let [v1, v2, v3] = [
            vertices[tri[0] as usize],
            vertices[tri[1] as usize],
            vertices[tri[2] as usize],
        ];
        let d = [v1, v2, v3].map(|v| (v - start).dot(dir));
        if d.iter().all(|&p| p < 0.0) || d.iter().all(|&p| p > extent) {
            continue;
        }

        let Some(t) = segment_intersects_triangle(start, end, v1, v2, v3) else {
            continue;
        };
        if t <= MIN_HIT_T || best.is_some_and(|b| b.t <= t) {
            continue;
        }
        best = Some(RaycastHit {
            t,
            point: start + dir * t,
            triangle,
            normal: triangle_normal(v1, v2, v3).normalize_or_zero(),
        });
        if mode == RaycastMode::AnyHit {
            break;
        }
    }
    best
}

/// Cast local-space `start..end` against the blocking triangles of
/// `volume`.
pub fn volume_raycast(
    volume: &NavVolume,
    start: Vec3,
    end: Vec3,
    mode: RaycastMode,
) -> Option<RaycastHit> {
    raycast_triangles(volume.vertices(), volume.blocking_indices(), start, end, mode)
}

/// Cast local-space `start..end` against every triangle of `surface`.
pub fn surface_raycast(
    surface: &NavSurface,
    start: Vec3,
    end: Vec3,
    mode: RaycastMode,
) -> Option<RaycastHit> {
    raycast_triangles(surface.vertices(), surface.triangle_indices(), start, end, mode)
}

impl NavVolume {
    /// [`volume_raycast`] for a world-space segment. The hit point and
    /// normal are returned in world space; `t` is unchanged.
    pub fn raycast_world(&self, start: Vec3, end: Vec3, mode: RaycastMode) -> Option<RaycastHit> {
        let hit = volume_raycast(self, self.to_local(start), self.to_local(end), mode)?;
        let normal = self
            .inverse_transform()
            .transpose()
            .transform_vector3(hit.normal)
            .normalize_or_zero();
        Some(RaycastHit {
            point: self.to_world(hit.point),
            normal,
            ..hit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{strip_parts, two_cell_parts};
    use glam::Mat4;

    #[test]
    fn cast_out_of_the_cell_hits_the_wall() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        let hit = volume_raycast(
            &volume,
            Vec3::new(0.3, 0.5, 0.6),
            Vec3::new(0.3, 2.5, 0.6),
            RaycastMode::NearestHit,
        )
        .unwrap();
        assert!((hit.t - 0.25).abs() < 1e-5);
        assert!(hit.point.abs_diff_eq(Vec3::new(0.3, 1.0, 0.6), 1e-5));
        assert!(hit.normal.y.abs() > 0.99);
    }

    #[test]
    fn shared_face_does_not_block() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        let hit = volume_raycast(
            &volume,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(1.5, 0.5, 0.5),
            RaycastMode::AnyHit,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn nearest_hit_picks_the_closer_wall() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        let start = Vec3::new(1.2, 0.5, 0.7);
        let end = Vec3::new(1.2, -3.5, 0.7);
        let nearest = volume_raycast(&volume, start, end, RaycastMode::NearestHit).unwrap();
        assert!(nearest.point.abs_diff_eq(Vec3::new(1.2, 0.0, 0.7), 1e-5));
        let any = volume_raycast(&volume, start, end, RaycastMode::AnyHit).unwrap();
        assert!(any.t >= nearest.t);
    }

    #[test]
    fn hits_near_the_start_are_ignored() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        // The floor is crossed at t = 0.005.
        let hit = volume_raycast(
            &volume,
            Vec3::new(0.3, 0.01, 0.6),
            Vec3::new(0.3, -1.99, 0.6),
            RaycastMode::NearestHit,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn world_cast_matches_local_cast() {
        let mut parts = two_cell_parts();
        let offset = Vec3::new(5.0, -2.0, 3.0);
        parts.transform = Mat4::from_translation(offset);
        let volume = NavVolume::from_parts(parts).unwrap();
        let hit = volume
            .raycast_world(
                Vec3::new(0.3, 0.6, 0.5) + offset,
                Vec3::new(0.3, 0.6, 2.5) + offset,
                RaycastMode::NearestHit,
            )
            .unwrap();
        assert!(hit.point.abs_diff_eq(Vec3::new(0.3, 0.6, 1.0) + offset, 1e-5));
        assert!((hit.t - 0.25).abs() < 1e-5);
    }

    #[test]
    fn surface_cast_from_above_hits_the_ramp() {
        let surface = NavSurface::from_parts(strip_parts(1.0)).unwrap();
        let hit = surface_raycast(
            &surface,
            Vec3::new(1.5, 5.0, 0.2),
            Vec3::new(1.5, -5.0, 0.2),
            RaycastMode::NearestHit,
        )
        .unwrap();
        assert!(hit.point.abs_diff_eq(Vec3::new(1.5, 0.5, 0.2), 1e-4));
    }
}
