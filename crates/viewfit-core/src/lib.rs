//! # Viewfit Core
//!
//! Resolution adaptation engine: maps a fixed virtual design resolution
//! onto an arbitrary physical display resolution.
//!
//! This crate provides:
//! - Viewport solving: the largest centered rectangle inside the physical
//!   backbuffer that preserves the virtual aspect ratio (letterboxed or
//!   pillarboxed)
//! - Scale transform caching behind an explicit Clean/Dirty state machine
//! - Physical-to-virtual coordinate mapping for pointer and touch input
//! - An owned context object wiring host resize events through the solver
//! - Display configuration loaded from TOML
//!
//! ## Architecture
//!
//! The host graphics framework reports a physical size change to
//! [`context::ResolutionContext::on_resize`]; the context solves the new
//! viewport and feeds it to the [`cache::ScaleTransformCache`], which marks
//! itself dirty only when the geometry actually changed. The next transform
//! read recomputes the draw and input scale pair in one step, so the two
//! are always exact component-wise inverses. Draw-time consumers compose
//! [`context::ResolutionContext::draw_matrix`] with their camera matrix;
//! input handlers convert pointer events through
//! [`mapper::CoordinateMapper`].
//!
//! The context carries no global state: hosts own it and pass it by
//! reference, or share it across threads through
//! [`shared::SharedResolutionContext`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod cache;
pub mod config;
pub mod context;
pub mod mapper;
pub mod shared;
pub mod viewport;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cache::*;
    pub use crate::config::*;
    pub use crate::context::*;
    pub use crate::mapper::*;
    pub use crate::shared::*;
    pub use crate::viewport::*;
    pub use viewfit_common::prelude::*;
}

pub use prelude::*;
