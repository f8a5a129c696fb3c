//! Geometry utilities for decal placement.
//!
//! Pure functions over rectangles under rotation:
//! - **Bounds**: the axis-aligned box enclosing a rotated rectangle
//! - **Clamping**: constraining a move or resize so the rotated box stays in its container
//! - **Coordinates**: mapping pointer-space deltas into container-local units
//!
//! Nothing here fails on bad numbers. Non-finite input and unmeasured containers collapse
//! to a zero correction, so a transient bad value never moves a component.
//!
//! # Example
//!
//! ```
//! use decal_core::{Component, ComponentId, ComponentKind, Container, ImageContent, Size};
//! use decal_geometry::clamp_position;
//! use glam::DVec2;
//!
//! let container = Container::new(800.0, 800.0);
//! let component = Component::new(
//!     ComponentId(0),
//!     ComponentKind::Image(ImageContent::new("logo.png")),
//!     DVec2::new(400.0, 400.0),
//!     Size::new(100.0, 100.0),
//! );
//!
//! let delta = clamp_position(DVec2::new(450.0, 0.0), &component, &container);
//! assert_eq!(delta, DVec2::new(350.0, 0.0));
//! ```

mod bounds;
mod clamp;
mod coords;

pub use bounds::{fits_container, rotated_bounding_box, Placement};
pub use clamp::{clamp_position, clamp_size, clamp_transform};
pub use coords::CoordinateTransform;
