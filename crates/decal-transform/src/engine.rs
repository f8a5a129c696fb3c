//! Gesture-end handling.

use decal_core::{
    normalize_angle, Component, Container, EngineOptions, GeometryError, Size, TransformResult,
};
use decal_geometry::{clamp_position, clamp_size, clamp_transform, CoordinateTransform, Placement};
use glam::DVec2;

use crate::gesture::{GestureEvent, GestureInput};

/// What a finished gesture amounts to.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Merge this into the component
    Commit(TransformResult),
    /// Nothing observable changes
    NoChange,
    /// The gesture could not be mapped into container space and was dropped
    Dropped(GeometryError),
}

impl GestureOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, GestureOutcome::Commit(_))
    }

    /// The transform result, if there is one to commit.
    pub fn result(&self) -> Option<&TransformResult> {
        match self {
            GestureOutcome::Commit(result) => Some(result),
            _ => None,
        }
    }
}

/// Computes clamped placements from gesture-end events.
///
/// The engine is stateless apart from its options; the component and container are
/// snapshots passed in with every call.
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    options: EngineOptions,
}

impl TransformEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Handle any gesture-end event for `component`.
    ///
    /// Drag and resize deltas arrive in screen space and are converted through `context`;
    /// rotation angles need no conversion.
    pub fn process(
        &self,
        event: &GestureEvent,
        component: &Component,
        context: Option<&CoordinateTransform>,
    ) -> GestureOutcome {
        debug_assert_eq!(event.component, component.id);

        match event.input {
            GestureInput::Drag { raw_delta } => {
                self.drag_end(context, raw_delta, component, &event.container)
            }
            GestureInput::Resize { raw_size_delta } => {
                if raw_size_delta == DVec2::ZERO {
                    return GestureOutcome::NoChange;
                }
                match to_local(context, raw_size_delta) {
                    Ok(delta) => self.resize_end(delta, component, &event.container),
                    Err(err) => dropped("resize", component, err),
                }
            }
            GestureInput::Rotate { angle } => self.rotate_end(angle, component, &event.container),
        }
    }

    /// Finish a drag: move by the clamped, container-local delta.
    pub fn drag_end(
        &self,
        context: Option<&CoordinateTransform>,
        raw_delta: DVec2,
        component: &Component,
        container: &Container,
    ) -> GestureOutcome {
        if raw_delta == DVec2::ZERO {
            return GestureOutcome::NoChange;
        }

        let delta = match clamp_transform(context, raw_delta, component, container) {
            Ok(delta) => delta,
            Err(err) => return dropped("drag", component, err),
        };

        self.commit_if_changed(component, component.position + delta, component.size, component.rotation)
    }

    /// Finish a resize with a container-local size delta.
    ///
    /// The size is clamped first, then the unchanged center is clamped against the new
    /// size. Both land in one result.
    pub fn resize_end(&self, size_delta: DVec2, component: &Component, container: &Container) -> GestureOutcome {
        let (position, size) = self.fit(component, component.rotation, size_delta, container);
        self.commit_if_changed(component, position, size, component.rotation)
    }

    /// Finish a rotation at the absolute `angle`.
    ///
    /// The angle itself is never clamped. If the rotated box no longer fits, the size
    /// shrinks and the position is reclamped.
    pub fn rotate_end(&self, angle: f64, component: &Component, container: &Container) -> GestureOutcome {
        if !angle.is_finite() {
            return GestureOutcome::NoChange;
        }
        let rotation = normalize_angle(angle);
        let (position, size) = self.fit(component, rotation, DVec2::ZERO, container);
        self.commit_if_changed(component, position, size, rotation)
    }

    /// Size first, then position against the corrected size.
    fn fit(&self, component: &Component, rotation: f64, size_delta: DVec2, container: &Container) -> (DVec2, Size) {
        let size_correction = clamp_size(
            size_delta,
            component.size,
            container,
            rotation,
            self.options.min_dimension,
        );
        let size = Size::from_vec(component.size.to_vec() + size_correction);

        let placement = Placement::new(component.position, size, rotation);
        let position = component.position + clamp_position(DVec2::ZERO, placement, container);
        (position, size)
    }

    fn commit_if_changed(&self, component: &Component, position: DVec2, size: Size, rotation: f64) -> GestureOutcome {
        let tolerance = self.options.tolerance;
        let mut result = TransformResult::default();

        if !position.abs_diff_eq(component.position, tolerance) {
            result.position = Some(position);
        }
        if !size.to_vec().abs_diff_eq(component.size.to_vec(), tolerance) {
            result.size = Some(size);
        }
        if normalize_angle(rotation - component.rotation).abs() > tolerance {
            result.rotation = Some(rotation);
        }

        if result.is_empty() {
            return GestureOutcome::NoChange;
        }
        log::debug!("commit for {}: {:?}", component.id, result);
        GestureOutcome::Commit(result)
    }
}

fn to_local(context: Option<&CoordinateTransform>, raw_delta: DVec2) -> Result<DVec2, GeometryError> {
    match context {
        Some(context) if context.is_valid() => Ok(context.screen_delta_to_local(raw_delta)),
        Some(_) => Err(GeometryError::invalid_context("degenerate transform")),
        None => Err(GeometryError::invalid_context("no coordinate transform")),
    }
}

fn dropped(gesture: &str, component: &Component, err: GeometryError) -> GestureOutcome {
    log::warn!("dropping {gesture} on {}: {err}", component.id);
    GestureOutcome::Dropped(err)
}
