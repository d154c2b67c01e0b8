//! Bake configuration.

use glam::{Mat4, Vec3};

use navtk_core::{AreaId, Layer};

use crate::error::BakeError;

/// Settings shared by [`bake_surface`](crate::bake_surface) and
/// [`bake_volume`](crate::bake_volume).
#[derive(Clone, Debug, PartialEq)]
pub struct BakeConfig {
    /// Id given to the baked area.
    pub area_id: AreaId,
    /// Layer tag given to the baked area.
    pub layer: Layer,
    /// Local-to-world transform of the source mesh.
    pub transform: Mat4,
    /// World up direction.
    pub up: Vec3,
    /// Triangles with area at or below this are skipped.
    pub degenerate_area_epsilon: f32,
    /// Triangles processed between cancellation checks.
    pub cancel_poll_interval: usize,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            area_id: AreaId(0),
            layer: Layer::default(),
            transform: Mat4::IDENTITY,
            up: Vec3::Y,
            degenerate_area_epsilon: 1e-8,
            cancel_poll_interval: 256,
        }
    }
}

impl BakeConfig {
    /// Set the area id.
    pub fn with_area_id(mut self, area_id: AreaId) -> Self {
        self.area_id = area_id;
        self
    }

    /// Set the layer tag.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Set the local-to-world transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Set the world up direction.
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Set the degenerate-triangle area threshold.
    pub fn with_degenerate_area_epsilon(mut self, epsilon: f32) -> Self {
        self.degenerate_area_epsilon = epsilon;
        self
    }

    /// Set how many triangles are processed between cancellation checks.
    pub fn with_cancel_poll_interval(mut self, interval: usize) -> Self {
        self.cancel_poll_interval = interval;
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), BakeError> {
        // 1. Transform must be finite and invertible.
        if !self.transform.is_finite() {
            return Err(BakeError::InvalidConfig {
                reason: "transform has non-finite entries".into(),
            });
        }
        let det = self.transform.determinant();
        if det.abs() <= f32::EPSILON {
            return Err(BakeError::InvalidConfig {
                reason: format!("transform is singular (determinant {det})"),
            });
        }
        // 2. Up must be finite and non-zero.
        if !self.up.is_finite() || self.up.length_squared() <= f32::EPSILON {
            return Err(BakeError::InvalidConfig {
                reason: format!("up direction must be finite and non-zero, got {}", self.up),
            });
        }
        // 3. Epsilon must be finite and non-negative.
        if !self.degenerate_area_epsilon.is_finite() || self.degenerate_area_epsilon < 0.0 {
            return Err(BakeError::InvalidConfig {
                reason: format!(
                    "degenerate_area_epsilon must be finite and >= 0, got {}",
                    self.degenerate_area_epsilon
                ),
            });
        }
        // 4. Poll interval >= 1.
        if self.cancel_poll_interval == 0 {
            return Err(BakeError::InvalidConfig {
                reason: "cancel_poll_interval must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// World up expressed in the mesh's local space, normalized.
    pub fn local_up(&self) -> Vec3 {
        self.transform
            .inverse()
            .transform_vector3(self.up)
            .normalize_or(Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BakeConfig::default().validate().is_ok());
    }

    #[test]
    fn singular_transform_is_rejected() {
        let cfg = BakeConfig::default().with_transform(Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0)));
        match cfg.validate() {
            Err(BakeError::InvalidConfig { reason }) => assert!(reason.contains("singular")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn nan_transform_is_rejected() {
        let mut m = Mat4::IDENTITY;
        m.x_axis.x = f32::NAN;
        assert!(BakeConfig::default().with_transform(m).validate().is_err());
    }

    #[test]
    fn zero_up_is_rejected() {
        assert!(BakeConfig::default().with_up(Vec3::ZERO).validate().is_err());
    }

    #[test]
    fn negative_epsilon_is_rejected() {
        let cfg = BakeConfig::default().with_degenerate_area_epsilon(-1.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let cfg = BakeConfig::default().with_cancel_poll_interval(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn local_up_follows_rotation() {
        let cfg = BakeConfig::default()
            .with_transform(Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));
        // World +Y is local +X after undoing a quarter turn about Z.
        assert!(cfg.local_up().abs_diff_eq(Vec3::X, 1e-6));
    }
}
