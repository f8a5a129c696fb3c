//! Placement store for decal designs.
//!
//! A [`Design`] owns the ordered components of one customization session and keeps their
//! paint order a gap-free permutation. An [`EditSession`] wraps a design together with the
//! transform engine and the current coordinate context, and is the handle the editor surface
//! talks to. [`SharedSession`] puts a session behind a single lock for multi-threaded hosts.

mod design;
mod session;
mod shared;

pub use design::{Design, DesignSnapshot};
pub use session::EditSession;
pub use shared::SharedSession;
