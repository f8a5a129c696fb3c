//! Transform engine for decal editing.
//!
//! Turns the end of a drag, resize or rotate gesture into a clamped
//! [`TransformResult`](decal_core::TransformResult) for one component.
//!
//! # Ordering
//!
//! When a gesture needs both a size and a position correction, the size is corrected
//! first and the position is then clamped against the corrected size. Clamping the
//! position first can leave a center that was valid for the old size but not the new one.
//!
//! # Example
//!
//! ```
//! use decal_core::{Component, ComponentId, ComponentKind, Container, ImageContent, Size};
//! use decal_transform::{GestureOutcome, TransformEngine};
//! use glam::DVec2;
//!
//! let engine = TransformEngine::default();
//! let container = Container::new(800.0, 800.0);
//! let component = Component::new(
//!     ComponentId(0),
//!     ComponentKind::Image(ImageContent::new("logo.png")),
//!     DVec2::new(700.0, 400.0),
//!     Size::new(100.0, 100.0),
//! );
//!
//! match engine.resize_end(DVec2::new(300.0, 0.0), &component, &container) {
//!     GestureOutcome::Commit(result) => {
//!         assert_eq!(result.size, Some(Size::new(400.0, 100.0)));
//!         assert_eq!(result.position, Some(DVec2::new(600.0, 400.0)));
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

mod engine;
mod gesture;

pub use engine::{GestureOutcome, TransformEngine};
pub use gesture::{GestureEvent, GestureInput, GestureKind, GestureState, GestureTracker};
