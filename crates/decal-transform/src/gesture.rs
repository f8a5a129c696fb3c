//! Gesture events and the exclusive gesture state machine.

use decal_core::{ComponentId, Container};
use glam::DVec2;

/// The three kinds of gesture a component supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Drag,
    Resize,
    Rotate,
}

/// Payload of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Pointer displacement in screen space
    Drag { raw_delta: DVec2 },
    /// Size change in screen space
    Resize { raw_size_delta: DVec2 },
    /// New absolute angle in radians
    Rotate { angle: f64 },
}

impl GestureInput {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureInput::Drag { .. } => GestureKind::Drag,
            GestureInput::Resize { .. } => GestureKind::Resize,
            GestureInput::Rotate { .. } => GestureKind::Rotate,
        }
    }
}

/// A gesture-end event as delivered by the editor surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub component: ComponentId,
    pub input: GestureInput,
    /// Container snapshot at the time of the gesture
    pub container: Container,
}

impl GestureEvent {
    pub fn drag(component: ComponentId, raw_delta: DVec2, container: Container) -> Self {
        Self {
            component,
            input: GestureInput::Drag { raw_delta },
            container,
        }
    }

    pub fn resize(component: ComponentId, raw_size_delta: DVec2, container: Container) -> Self {
        Self {
            component,
            input: GestureInput::Resize { raw_size_delta },
            container,
        }
    }

    pub fn rotate(component: ComponentId, angle: f64, container: Container) -> Self {
        Self {
            component,
            input: GestureInput::Rotate { angle },
            container,
        }
    }

    pub fn kind(&self) -> GestureKind {
        self.input.kind()
    }
}

/// Which component, if any, is in the middle of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(ComponentId),
    Resizing(ComponentId),
    Rotating(ComponentId),
}

impl GestureState {
    fn active(component: ComponentId, kind: GestureKind) -> Self {
        match kind {
            GestureKind::Drag => GestureState::Dragging(component),
            GestureKind::Resize => GestureState::Resizing(component),
            GestureKind::Rotate => GestureState::Rotating(component),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn component(&self) -> Option<ComponentId> {
        match *self {
            GestureState::Idle => None,
            GestureState::Dragging(id) | GestureState::Resizing(id) | GestureState::Rotating(id) => Some(id),
        }
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging(_) => Some(GestureKind::Drag),
            GestureState::Resizing(_) => Some(GestureKind::Resize),
            GestureState::Rotating(_) => Some(GestureKind::Rotate),
        }
    }
}

/// Enforces that at most one gesture is in flight at a time.
///
/// `Idle -> Dragging | Resizing | Rotating -> Idle`. Starting a gesture while another
/// is active is ignored. A gesture that is abandoned never produces an end event, so
/// nothing reaches the engine.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Start a gesture. Returns false if another gesture is already active.
    pub fn begin(&mut self, component: ComponentId, kind: GestureKind) -> bool {
        if !self.state.is_idle() {
            log::debug!("ignoring {kind:?} on {component}: {:?} in progress", self.state);
            return false;
        }
        self.state = GestureState::active(component, kind);
        true
    }

    /// Finish the active gesture with its end event.
    ///
    /// Returns the event if it matches the active component and kind; anything else is
    /// ignored and leaves the state untouched.
    pub fn finish(&mut self, event: GestureEvent) -> Option<GestureEvent> {
        if self.state.component() != Some(event.component) || self.state.kind() != Some(event.kind()) {
            log::debug!("ignoring {:?} end for {}: state is {:?}", event.kind(), event.component, self.state);
            return None;
        }
        self.state = GestureState::Idle;
        Some(event)
    }

    /// Discard the active gesture without an end event (pointer left the surface).
    pub fn abandon(&mut self) -> GestureState {
        std::mem::take(&mut self.state)
    }
}
