//! Core types and utilities for the decal placement engine.
//!
//! This crate provides the foundational types used across all other decal crates:
//! - The component model (placed images and text) and its container
//! - The transform result committed by the engine into the store
//! - Engine options
//! - Error types

pub mod errors;
pub mod options;
pub mod types;

pub use errors::*;
pub use options::*;
pub use types::*;
