//! Containment clamping for moves and resizes.

use decal_core::{Container, GeometryError, Size};
use glam::DVec2;

use crate::bounds::{rotated_bounding_box, Placement};
use crate::coords::CoordinateTransform;

/// Clamp a proposed move so the rotated box stays inside `container`.
///
/// The allowed center range on each axis is
/// `origin + box/2 ..= origin + extent - box/2`. When the box is wider than the
/// container on an axis, that range collapses to the container center.
///
/// Returns the corrected delta (clamped position minus current position). A zero
/// `delta` still yields a correction if the placement is currently out of bounds.
pub fn clamp_position(delta: DVec2, placement: impl Into<Placement>, container: &Container) -> DVec2 {
    let placement = placement.into();
    if !delta.is_finite() || !placement.is_finite() || container.is_degenerate() {
        return DVec2::ZERO;
    }

    let bbox = placement.bounding_box();
    let candidate = placement.position + delta;
    let clamped = DVec2::new(
        clamp_axis(candidate.x, container.origin.x, container.width, bbox.width),
        clamp_axis(candidate.y, container.origin.y, container.height, bbox.height),
    );

    if clamped != candidate {
        log::trace!("clamped center {candidate} -> {clamped}");
    }
    clamped - placement.position
}

fn clamp_axis(candidate: f64, origin: f64, extent: f64, box_extent: f64) -> f64 {
    let half = box_extent / 2.0;
    let lo = origin + half;
    let hi = origin + extent - half;
    if lo > hi {
        origin + extent / 2.0
    } else {
        candidate.clamp(lo, hi)
    }
}

/// Clamp a proposed size change so the rotated box fits the container extent.
///
/// The center is held fixed for this computation; callers recenter with
/// [`clamp_position`] afterwards. The target size is floored at `min_dimension` and only
/// the axes that overflow are shrunk:
///
/// - When the rotated box is axis-aligned each axis is clamped on its own.
/// - Otherwise the axis the gesture did not grow keeps its requested length and the other
///   is shrunk until the box fits. With no single axis to blame, the option keeping the
///   larger area wins.
/// - If neither axis alone can absorb the overflow the target is scaled down uniformly,
///   pinning an axis at the floor if the scale would push it below.
///
/// An axis never ends up larger than requested. Returns the size delta to apply to
/// `current`.
pub fn clamp_size(
    delta: DVec2,
    current: Size,
    container: &Container,
    rotation: f64,
    min_dimension: f64,
) -> DVec2 {
    if !delta.is_finite() || !current.is_finite() || !rotation.is_finite() || container.is_degenerate() {
        return DVec2::ZERO;
    }

    let min = min_dimension.max(f64::MIN_POSITIVE);
    let target = Size::from_vec(current.to_vec() + delta).max(min);
    let fitted = fit_size(target, delta, rotation, container, min);
    if fitted != target {
        log::trace!(
            "clamped size {}x{} -> {}x{}",
            target.width,
            target.height,
            fitted.width,
            fitted.height
        );
    }
    fitted.to_vec() - current.to_vec()
}

const AXIS_EPS: f64 = 1e-12;

// box.width = cos·w + sin·h, box.height = sin·w + cos·h
fn fit_size(target: Size, delta: DVec2, rotation: f64, container: &Container, min: f64) -> Size {
    let bbox = rotated_bounding_box(target, rotation);
    if bbox.width <= container.width && bbox.height <= container.height {
        return target;
    }

    let (sin, cos) = rotation.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());

    if sin < AXIS_EPS || cos < AXIS_EPS {
        let (max_width, max_height) = if sin < AXIS_EPS {
            (container.width, container.height)
        } else {
            (container.height, container.width)
        };
        return Size::new(
            target.width.min(max_width).max(min),
            target.height.min(max_height).max(min),
        );
    }

    let keep_height = Size::new(
        target
            .width
            .min(axis_limit(container.width - sin * target.height, cos, container.height - cos * target.height, sin)),
        target.height,
    );
    let keep_width = Size::new(
        target.width,
        target
            .height
            .min(axis_limit(container.width - cos * target.width, sin, container.height - sin * target.width, cos)),
    );
    let feasible = |size: &Size| size.width >= min && size.height >= min;

    let candidates = match (delta.x > 0.0, delta.y > 0.0) {
        (true, false) => [Some(keep_height), None],
        (false, true) => [Some(keep_width), None],
        _ if keep_height.width * keep_height.height >= keep_width.width * keep_width.height => {
            [Some(keep_height), Some(keep_width)]
        }
        _ => [Some(keep_width), Some(keep_height)],
    };
    if let Some(size) = candidates.into_iter().flatten().find(feasible) {
        return size;
    }

    scale_to_fit(target, bbox, sin, cos, container, min)
}

fn scale_to_fit(target: Size, bbox: Size, sin: f64, cos: f64, container: &Container, min: f64) -> Size {
    let scale = (container.width / bbox.width).min(container.height / bbox.height).min(1.0);
    let mut width = target.width * scale;
    let mut height = target.height * scale;

    if width < min {
        width = min;
        let limit = axis_limit(container.width - cos * min, sin, container.height - sin * min, cos);
        height = height.max(min).min(limit).max(min);
    } else if height < min {
        height = min;
        let limit = axis_limit(container.width - sin * min, cos, container.height - cos * min, sin);
        width = width.max(min).min(limit).max(min);
    }

    Size::new(width.min(target.width), height.min(target.height))
}

/// Largest value satisfying `a_den·v ≤ a_num` and `b_den·v ≤ b_num`.
fn axis_limit(a_num: f64, a_den: f64, b_num: f64, b_den: f64) -> f64 {
    let a = if a_den > AXIS_EPS { a_num / a_den } else { f64::INFINITY };
    let b = if b_den > AXIS_EPS { b_num / b_den } else { f64::INFINITY };
    a.min(b)
}

/// Convert a pointer-space delta into container units and clamp it.
///
/// Fails with [`GeometryError::InvalidContext`] when there is no coordinate transform or it
/// cannot be inverted; the caller should drop the gesture.
pub fn clamp_transform(
    context: Option<&CoordinateTransform>,
    raw_delta: DVec2,
    placement: impl Into<Placement>,
    container: &Container,
) -> Result<DVec2, GeometryError> {
    let context = context.ok_or_else(|| GeometryError::invalid_context("no coordinate transform"))?;
    if !context.is_valid() {
        return Err(GeometryError::invalid_context(format!(
            "degenerate transform (scale {}, offset {})",
            context.scale, context.offset
        )));
    }

    let local = context.screen_delta_to_local(raw_delta);
    Ok(clamp_position(local, placement, container))
}
