//! Point location within volumes.

use glam::Vec3;

use crate::area::NavAreaData;
use crate::volume::NavVolume;

/// Points this far in front of a bound plane still count as inside it.
pub const PLANE_TOLERANCE: f32 = 1e-4;

/// Index of the region of `volume` containing local-space `point`.
///
/// A region contains a point when the point is behind or on every one of
/// the region's outward-facing bound planes. Regions whose bounds do not
/// contain the point are skipped first. Where regions touch, the lower
/// region index wins.
pub fn volume_region_containing(volume: &NavVolume, point: Vec3) -> Option<usize> {
    (0..volume.region_count()).find(|&region| {
        volume
            .region_bounds(region)
            .expanded(PLANE_TOLERANCE)
            .contains(point)
            && volume
                .region_planes(region)
                .iter()
                .all(|plane| plane.signed_distance(point) <= PLANE_TOLERANCE)
    })
}

impl NavVolume {
    /// [`volume_region_containing`] for a world-space point.
    pub fn region_containing_world(&self, point: Vec3) -> Option<usize> {
        volume_region_containing(self, self.to_local(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_cell_parts;
    use glam::Mat4;

    #[test]
    fn points_land_in_their_cells() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        assert_eq!(volume_region_containing(&volume, Vec3::new(0.5, 0.5, 0.5)), Some(0));
        assert_eq!(volume_region_containing(&volume, Vec3::new(1.5, 0.2, 0.9)), Some(1));
        assert_eq!(volume_region_containing(&volume, Vec3::new(2.5, 0.5, 0.5)), None);
        assert_eq!(volume_region_containing(&volume, Vec3::new(0.5, -0.1, 0.5)), None);
    }

    #[test]
    fn shared_face_goes_to_lower_index() {
        let volume = NavVolume::from_parts(two_cell_parts()).unwrap();
        assert_eq!(volume_region_containing(&volume, Vec3::new(1.0, 0.5, 0.5)), Some(0));
    }

    #[test]
    fn world_lookup_applies_inverse_transform() {
        let mut parts = two_cell_parts();
        parts.transform = Mat4::from_scale(Vec3::splat(2.0));
        let volume = NavVolume::from_parts(parts).unwrap();
        assert_eq!(volume.region_containing_world(Vec3::new(3.0, 1.0, 1.0)), Some(1));
        assert_eq!(volume.region_containing_world(Vec3::new(1.5, 1.5, 1.5)), Some(0));
    }
}
