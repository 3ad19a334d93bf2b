//! Reference frames the slider track lives in.
//!
//! The slider stores its track endpoints in local space and asks a
//! [`SpatialFrame`] to map them into world space every time they are read, so
//! a host can move the whole control rigidly without touching the slider.

use glam::{Affine3A, Vec3};
use std::cell::Cell;
use std::rc::Rc;

/// Read-only local <-> world mapping for a slider.
pub trait SpatialFrame {
    /// Map a local-space point into world space.
    fn transform_point(&self, local: Vec3) -> Vec3;
    /// Map a world-space point into local space.
    fn inverse_transform_point(&self, world: Vec3) -> Vec3;
}

impl SpatialFrame for Affine3A {
    #[inline]
    fn transform_point(&self, local: Vec3) -> Vec3 {
        self.transform_point3(local)
    }

    #[inline]
    fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.inverse().transform_point3(world)
    }
}

/// Frame handle shared between the host and a slider.
///
/// Clones observe the same transform; the host keeps one clone and calls
/// [`SharedFrame::set`] when the control moves.
#[derive(Clone, Debug, Default)]
pub struct SharedFrame(Rc<Cell<Affine3A>>);

impl SharedFrame {
    pub fn new(transform: Affine3A) -> Self {
        Self(Rc::new(Cell::new(transform)))
    }

    pub fn get(&self) -> Affine3A {
        self.0.get()
    }

    pub fn set(&self, transform: Affine3A) {
        self.0.set(transform);
    }
}

impl SpatialFrame for SharedFrame {
    fn transform_point(&self, local: Vec3) -> Vec3 {
        self.get().transform_point(local)
    }

    fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.get().inverse_transform_point(world)
    }
}
