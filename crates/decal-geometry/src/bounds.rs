//! Rotated bounding boxes.

use decal_core::{Component, Container, Size};
use glam::DVec2;

/// The geometric part of a component: where it is, how big, and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Center in container-local coordinates
    pub position: DVec2,
    pub size: Size,
    /// Radians
    pub rotation: f64,
}

impl Placement {
    pub fn new(position: DVec2, size: Size, rotation: f64) -> Self {
        Self { position, size, rotation }
    }

    /// Same placement with a different size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Same placement with a different rotation.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// The axis-aligned box enclosing this placement.
    pub fn bounding_box(&self) -> Size {
        rotated_bounding_box(self.size, self.rotation)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.size.is_finite() && self.rotation.is_finite()
    }
}

impl From<&Component> for Placement {
    fn from(component: &Component) -> Self {
        Self {
            position: component.position,
            size: component.size,
            rotation: component.rotation,
        }
    }
}

/// Compute the axis-aligned bounding box of a `size` rectangle rotated by `rotation`
/// radians about its center.
///
/// `width' = |w·cos θ| + |h·sin θ|`, `height' = |w·sin θ| + |h·cos θ|`.
pub fn rotated_bounding_box(size: Size, rotation: f64) -> Size {
    let (sin, cos) = rotation.sin_cos();
    Size {
        width: (size.width * cos).abs() + (size.height * sin).abs(),
        height: (size.width * sin).abs() + (size.height * cos).abs(),
    }
}

/// Check that the rotated box of `placement` lies inside `container`.
pub fn fits_container(placement: impl Into<Placement>, container: &Container, tolerance: f64) -> bool {
    let placement = placement.into();
    container.contains_box(placement.position, placement.bounding_box(), tolerance)
}
