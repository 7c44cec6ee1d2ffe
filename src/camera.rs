//! Perspective camera derived from the rig's smoothed pose.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::util::plane::Ray;

/// Perspective camera defined by a world-space pose and projection
/// parameters.
pub struct ViewCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space.
    pub orientation: Quat,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl ViewCamera {
    /// Create a camera at the origin facing `-Z` with the given aspect ratio.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            aspect,
            fovy: 45.0,
            znear: 5.0,
            zfar: 2000.0,
        }
    }

    /// World-space forward direction (`-Z` at identity orientation).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-space right direction (`+X` at identity orientation).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// World-space up direction (`+Y` at identity orientation).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Build the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.forward(),
            self.up(),
        )
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unproject a pointer position (pixels, origin top-left) into a
    /// world-space ray through that pixel.
    #[must_use]
    pub fn screen_ray(&self, pointer: Vec2, viewport: Vec2) -> Ray {
        let ndc = Vec2::new(
            2.0 * pointer.x / viewport.x - 1.0,
            1.0 - 2.0 * pointer.y / viewport.y,
        );
        let inv = self.view_projection().inverse();
        // [0,1] depth: z=0 lands on the near plane, z=1 on the far plane
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        Ray::new(near, far - near)
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::plane::Plane;

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let mut camera = ViewCamera::new(1.0);
        camera.position = Vec3::new(3.0, 7.0, -2.0);
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.length() < 1e-4);
    }

    #[test]
    fn center_ray_points_along_forward() {
        let camera = ViewCamera::new(1.0);
        let viewport = Vec2::new(800.0, 800.0);
        let ray = camera.screen_ray(viewport * 0.5, viewport);
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
        // Origin sits on the near plane, not at the eye.
        assert!((ray.origin.z + camera.znear).abs() < 1e-3);
    }

    #[test]
    fn offset_pixels_bend_the_ray() {
        let camera = ViewCamera::new(1.0);
        let viewport = Vec2::new(800.0, 800.0);
        let right = camera.screen_ray(Vec2::new(700.0, 400.0), viewport);
        assert!(right.direction.x > 0.0);
        // Pixel rows grow downward, so a smaller y looks upward.
        let above = camera.screen_ray(Vec2::new(400.0, 100.0), viewport);
        assert!(above.direction.y > 0.0);
    }

    #[test]
    fn straight_down_ray_hits_ground_below() {
        let mut camera = ViewCamera::new(1.0);
        camera.position = Vec3::new(0.0, 50.0, 0.0);
        camera.orientation = Quat::from_rotation_x(-90f32.to_radians());
        let viewport = Vec2::new(1920.0, 1080.0);
        let ray = camera.screen_ray(viewport * 0.5, viewport);
        let plane = Plane::horizontal(-1.0);
        let t = plane.raycast(&ray).unwrap();
        let hit = ray.at(t);
        assert!((hit.y + 1.0).abs() < 1e-3);
        assert!(hit.x.abs() < 1e-2 && hit.z.abs() < 1e-2);
    }
}
