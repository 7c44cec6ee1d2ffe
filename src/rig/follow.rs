//! Follow-target binding: an external object the rig can track.

use std::cell::{Cell, RefCell};

use glam::Vec3;

/// An external object whose world position the rig can follow.
///
/// The rig holds a [`Weak`](std::rc::Weak) reference, so dropping the
/// object lapses the binding rather than keeping it alive.
pub trait FollowTarget {
    /// Current world-space position of the object.
    fn position(&self) -> Vec3;
}

/// A bare shared position cell is the simplest possible follow target.
impl FollowTarget for Cell<Vec3> {
    fn position(&self) -> Vec3 {
        self.get()
    }
}

impl<T: FollowTarget> FollowTarget for RefCell<T> {
    fn position(&self) -> Vec3 {
        self.borrow().position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_reports_its_latest_position() {
        let cell = Cell::new(Vec3::ZERO);
        cell.set(Vec3::new(3.0, 0.0, -4.0));
        assert_eq!(cell.position(), Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn ref_cell_forwards_to_the_inner_target() {
        let inner = RefCell::new(Cell::new(Vec3::X));
        assert_eq!(inner.position(), Vec3::X);
    }
}
