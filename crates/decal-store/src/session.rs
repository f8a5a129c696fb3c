//! Edit session: the explicit handle the editor surface works through.

use decal_core::{Color, Component, ComponentId, ComponentKind, EngineOptions, Size, StoreError};
use decal_geometry::CoordinateTransform;
use decal_transform::{GestureEvent, GestureKind, GestureOutcome, GestureState, GestureTracker, TransformEngine};
use glam::DVec2;

use crate::design::{Design, DesignSnapshot};

/// One customization session: a design, the engine that edits it, and the current
/// screen-to-container mapping.
///
/// All mutation of the design goes through this type's operations. Gesture events are
/// applied strictly in the order they are dispatched.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    design: Design,
    engine: TransformEngine,
    context: Option<CoordinateTransform>,
    tracker: GestureTracker,
}

impl EditSession {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            design: Design::new().with_min_dimension(options.min_dimension),
            engine: TransformEngine::new(options),
            ..Self::default()
        }
    }

    /// Resume editing a previously loaded design.
    ///
    /// The design takes over the engine's size floor.
    pub fn with_design(mut self, design: Design) -> Self {
        self.design = design.with_min_dimension(self.engine.options().min_dimension);
        self
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    pub fn into_design(self) -> Design {
        self.design
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn context(&self) -> Option<&CoordinateTransform> {
        self.context.as_ref()
    }

    /// Update the screen-to-container mapping (on layout, resize or zoom).
    pub fn set_context(&mut self, context: Option<CoordinateTransform>) {
        self.context = context;
    }

    pub fn snapshot(&self) -> DesignSnapshot {
        self.design.snapshot()
    }

    /// Add a component and select it.
    pub fn add_component(&mut self, kind: ComponentKind, position: DVec2, size: Size) -> ComponentId {
        let id = self.design.add_component(kind, position, size);
        self.design.active = Some(id);
        id
    }

    /// Remove a component. If it was selected, the first remaining component becomes
    /// active, or nothing when the design is empty.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        let was_active = self.design.active() == Some(id);
        let removed = self.design.remove_component(id)?;
        if was_active {
            let fallback = self.design.components().next().map(|c| c.id);
            self.design.active = fallback;
        }
        Some(removed)
    }

    /// Remove whatever is selected.
    pub fn remove_active(&mut self) -> Option<Component> {
        let id = self.design.active()?;
        self.remove_component(id)
    }

    pub fn select(&mut self, id: Option<ComponentId>) -> Result<(), StoreError> {
        self.design.set_active(id)
    }

    /// Raise the selected component. Does nothing without a selection.
    pub fn bring_active_to_front(&mut self) -> Result<(), StoreError> {
        match self.design.active() {
            Some(id) => self.design.bring_to_front(id),
            None => Ok(()),
        }
    }

    /// Lower the selected component. Does nothing without a selection.
    pub fn send_active_to_back(&mut self) -> Result<(), StoreError> {
        match self.design.active() {
            Some(id) => self.design.send_to_back(id),
            None => Ok(()),
        }
    }

    /// Swap what the selected component shows (the "edit print" action).
    pub fn update_active_content(&mut self, kind: ComponentKind) -> Result<(), StoreError> {
        match self.design.active() {
            Some(id) => self.design.update_content(id, kind),
            None => Ok(()),
        }
    }

    /// Recolor the selected print. Fails unless it is a vector image.
    pub fn recolor_active(&mut self, fill: Option<Color>) -> Result<(), StoreError> {
        match self.design.active() {
            Some(id) => self.design.recolor(id, fill),
            None => Ok(()),
        }
    }

    /// Run a gesture-end event through the engine and commit the result.
    ///
    /// Only a stale component id is reported as an error; gestures that cannot be mapped
    /// come back as [`GestureOutcome::Dropped`] with the design untouched.
    pub fn dispatch(&mut self, event: &GestureEvent) -> Result<GestureOutcome, StoreError> {
        let component = self
            .design
            .get(event.component)
            .ok_or(StoreError::UnknownComponent { id: event.component })?;

        let outcome = self.engine.process(event, component, self.context.as_ref());
        if let GestureOutcome::Commit(result) = &outcome {
            self.design.apply_transform_result(event.component, result)?;
        }
        Ok(outcome)
    }

    pub fn gesture_state(&self) -> GestureState {
        self.tracker.state()
    }

    /// Start a gesture on a component. Returns false if another gesture is in progress.
    pub fn begin_gesture(&mut self, id: ComponentId, kind: GestureKind) -> Result<bool, StoreError> {
        if !self.design.contains(id) {
            return Err(StoreError::UnknownComponent { id });
        }
        Ok(self.tracker.begin(id, kind))
    }

    /// Finish the active gesture. End events that do not match it change nothing.
    pub fn end_gesture(&mut self, event: &GestureEvent) -> Result<GestureOutcome, StoreError> {
        match self.tracker.finish(*event) {
            Some(event) => self.dispatch(&event),
            None => Ok(GestureOutcome::NoChange),
        }
    }

    /// The pointer left the surface mid-gesture; discard it.
    pub fn abandon_gesture(&mut self) {
        let abandoned = self.tracker.abandon();
        if !abandoned.is_idle() {
            log::debug!("abandoned {abandoned:?}");
        }
    }
}
