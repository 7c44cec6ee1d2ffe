//! Ray and infinite-plane intersection for pointer picking.

use glam::Vec3;

/// A ray with an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Ray direction (unit length).
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point along the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane defined by a unit normal and a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Any point on the plane.
    pub point: Vec3,
}

impl Plane {
    /// Horizontal plane (normal `+Y`) at the given world height.
    #[must_use]
    pub fn horizontal(height: f32) -> Self {
        Self {
            normal: Vec3::Y,
            point: Vec3::new(0.0, height, 0.0),
        }
    }

    /// Distance along `ray` to the intersection point, or `None` when the
    /// ray is parallel to the plane or the intersection lies behind the
    /// ray origin.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.point - ray.origin).dot(self.normal) / denom;
        (t > 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_ground_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let plane = Plane::horizontal(-1.0);
        let t = plane.raycast(&ray).unwrap();
        assert!((t - 11.0).abs() < 1e-5);
        assert!((ray.at(t).y - -1.0).abs() < 1e-5);
    }

    #[test]
    fn test_slanted_ray_hit_point() {
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, -1.0));
        let plane = Plane::horizontal(0.0);
        let hit = ray.at(plane.raycast(&ray).unwrap());
        assert!((hit - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert!(Plane::horizontal(0.0).raycast(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(Plane::horizontal(0.0).raycast(&ray).is_none());
    }
}
