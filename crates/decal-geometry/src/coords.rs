//! Mapping between pointer space and container-local space.
//!
//! The editor draws the container inside a scaled viewport (an SVG `viewBox` rendered at
//! some CSS size, possibly zoomed). Pointer events arrive in screen pixels; placement
//! math runs in container units. A [`CoordinateTransform`] carries that mapping explicitly.

use decal_core::Size;
use glam::DVec2;

/// Affine map without rotation: `screen = local * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    /// Screen pixels per container unit, per axis
    pub scale: DVec2,
    /// Screen position of the container-local origin
    pub offset: DVec2,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl CoordinateTransform {
    pub const fn identity() -> Self {
        Self {
            scale: DVec2::ONE,
            offset: DVec2::ZERO,
        }
    }

    pub fn new(scale: DVec2, offset: DVec2) -> Self {
        Self { scale, offset }
    }

    /// Same scale on both axes, no offset.
    pub fn uniform(scale: f64) -> Self {
        Self {
            scale: DVec2::splat(scale),
            offset: DVec2::ZERO,
        }
    }

    /// Transform for a viewport whose `view_box` is drawn into a `rendered` box of screen pixels.
    ///
    /// An unmeasured viewport yields an invalid transform (see [`is_valid`](Self::is_valid)).
    pub fn from_viewport(view_box: Size, rendered: Size) -> Self {
        Self {
            scale: rendered.to_vec() / view_box.to_vec(),
            offset: DVec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Apply an additional zoom around the screen origin.
    pub fn then_zoom(mut self, factor: f64) -> Self {
        self.scale *= factor;
        self.offset *= factor;
        self
    }

    /// The transform can be inverted.
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite()
            && self.offset.is_finite()
            && self.scale.x.abs() > f64::EPSILON
            && self.scale.y.abs() > f64::EPSILON
    }

    pub fn screen_to_local(&self, point: DVec2) -> DVec2 {
        (point - self.offset) / self.scale
    }

    pub fn local_to_screen(&self, point: DVec2) -> DVec2 {
        point * self.scale + self.offset
    }

    /// Convert a displacement; the offset does not apply.
    pub fn screen_delta_to_local(&self, delta: DVec2) -> DVec2 {
        delta / self.scale
    }

    pub fn local_delta_to_screen(&self, delta: DVec2) -> DVec2 {
        delta * self.scale
    }
}
