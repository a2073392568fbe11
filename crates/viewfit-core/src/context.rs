//! The owned resolution context.
//!
//! `ResolutionContext` replaces the usual process-wide resolution singleton
//! with an explicitly owned value the host passes by reference, which keeps
//! the engine reentrant and trivially unit-testable. It wires host resize
//! events through the viewport solver into the transform cache and exposes
//! the read-only query surface alongside the transform and mapping
//! delegates.

use glam::{Mat4, Vec2};
use tracing::debug;
use viewfit_common::error::ViewfitResult;
use viewfit_common::geom::{Extent, Rect, ScaleTransform};

use crate::cache::ScaleTransformCache;
use crate::config::DisplayConfig;
use crate::mapper::CoordinateMapper;
use crate::viewport::{solve_output, ScaleMode};

/// Resolution adaptation state for one rendering surface.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    cache: ScaleTransformCache,
    physical: Extent,
    mode: ScaleMode,
}

impl ResolutionContext {
    /// Creates a context for the given virtual and physical extents.
    pub fn new(
        virtual_extent: Extent,
        physical: Extent,
        mode: ScaleMode,
    ) -> ViewfitResult<Self> {
        let mut cache = ScaleTransformCache::new(virtual_extent, physical)?;
        let output = solve_output(virtual_extent, physical, mode)?;
        cache.notify_viewport_changed(output);
        Ok(Self {
            cache,
            physical,
            mode,
        })
    }

    /// Creates a context from a display configuration.
    pub fn from_config(config: &DisplayConfig) -> ViewfitResult<Self> {
        Self::new(
            config.virtual_extent(),
            config.window_extent(),
            config.scale_mode,
        )
    }

    /// Host resize entry point: stores the new physical extent and
    /// re-solves the viewport.
    ///
    /// On failure the context is left untouched.
    pub fn on_resize(&mut self, width: u32, height: u32) -> ViewfitResult<()> {
        let physical = Extent::new(width, height);
        let output = solve_output(self.cache.virtual_extent(), physical, self.mode)?;
        self.physical = physical;
        self.cache.notify_viewport_changed(output);
        debug!("resized to {}x{}, viewport {:?}", width, height, output);
        Ok(())
    }

    /// Reconfigures the virtual design extent, re-deriving the title-safe
    /// area and the viewport.
    pub fn set_virtual_size(&mut self, extent: Extent) -> ViewfitResult<()> {
        let output = solve_output(extent, self.physical, self.mode)?;
        self.cache.set_virtual_size(extent)?;
        self.cache.notify_viewport_changed(output);
        Ok(())
    }

    /// Switches between letterboxed and stretched scaling.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> ViewfitResult<()> {
        if mode == self.mode {
            return Ok(());
        }
        let output = solve_output(self.cache.virtual_extent(), self.physical, mode)?;
        self.mode = mode;
        self.cache.notify_viewport_changed(output);
        Ok(())
    }

    /// The viewport rectangle to apply to the rendering surface.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.cache.output_rect()
    }

    /// The virtual design extent.
    #[must_use]
    pub fn virtual_extent(&self) -> Extent {
        self.cache.virtual_extent()
    }

    /// The current physical backbuffer extent.
    #[must_use]
    pub fn physical_extent(&self) -> Extent {
        self.physical
    }

    /// The title-safe rectangle in virtual coordinates.
    #[must_use]
    pub fn title_safe_area(&self) -> Rect {
        self.cache.title_safe_area()
    }

    /// The whole screen in virtual coordinates.
    #[must_use]
    pub fn screen_area(&self) -> Rect {
        self.cache.screen_area()
    }

    /// The active scale mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.mode
    }

    /// The virtual→physical draw transform.
    pub fn draw_transform(&mut self) -> ViewfitResult<ScaleTransform> {
        self.cache.draw_transform()
    }

    /// The physical→virtual input transform.
    pub fn input_transform(&mut self) -> ViewfitResult<ScaleTransform> {
        self.cache.input_transform()
    }

    /// The draw transform as a 4x4 matrix for composing with a camera/view
    /// matrix before submitting draw calls.
    pub fn draw_matrix(&mut self) -> ViewfitResult<Mat4> {
        Ok(self.draw_transform()?.to_matrix())
    }

    /// Converts a physical-space point into virtual-space coordinates.
    pub fn to_virtual(&mut self, point: Vec2) -> ViewfitResult<Vec2> {
        CoordinateMapper::new(&mut self.cache).to_virtual(point)
    }

    /// Converts a virtual-space point into physical-space coordinates.
    pub fn to_physical(&mut self, point: Vec2) -> ViewfitResult<Vec2> {
        CoordinateMapper::new(&mut self.cache).to_physical(point)
    }
}
