//! Shared, lock-guarded access to a resolution context.
//!
//! Hosts that multiplex input handling and render submission across threads
//! share one context through this wrapper. Every delegate holds the lock
//! across the whole check-dirty/recompute/clear-dirty section, so no reader
//! can observe a half-updated transform pair.

use std::sync::Arc;

use glam::{Mat4, Vec2};
use parking_lot::{Mutex, MutexGuard};
use viewfit_common::error::ViewfitResult;
use viewfit_common::geom::{Extent, Rect, ScaleTransform};

use crate::context::ResolutionContext;

/// A clonable, thread-safe handle to a [`ResolutionContext`].
#[derive(Debug, Clone)]
pub struct SharedResolutionContext {
    inner: Arc<Mutex<ResolutionContext>>,
}

impl SharedResolutionContext {
    /// Wraps a context for shared access.
    #[must_use]
    pub fn new(context: ResolutionContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Locks the context for a multi-call critical section.
    pub fn lock(&self) -> MutexGuard<'_, ResolutionContext> {
        self.inner.lock()
    }

    /// Host resize entry point.
    pub fn on_resize(&self, width: u32, height: u32) -> ViewfitResult<()> {
        self.inner.lock().on_resize(width, height)
    }

    /// The viewport rectangle to apply to the rendering surface.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.inner.lock().viewport()
    }

    /// The title-safe rectangle in virtual coordinates.
    #[must_use]
    pub fn title_safe_area(&self) -> Rect {
        self.inner.lock().title_safe_area()
    }

    /// The virtual design extent.
    #[must_use]
    pub fn virtual_extent(&self) -> Extent {
        self.inner.lock().virtual_extent()
    }

    /// The current physical backbuffer extent.
    #[must_use]
    pub fn physical_extent(&self) -> Extent {
        self.inner.lock().physical_extent()
    }

    /// The virtual→physical draw transform.
    pub fn draw_transform(&self) -> ViewfitResult<ScaleTransform> {
        self.inner.lock().draw_transform()
    }

    /// The physical→virtual input transform.
    pub fn input_transform(&self) -> ViewfitResult<ScaleTransform> {
        self.inner.lock().input_transform()
    }

    /// The draw transform as a 4x4 matrix for camera composition.
    pub fn draw_matrix(&self) -> ViewfitResult<Mat4> {
        self.inner.lock().draw_matrix()
    }

    /// Converts a physical-space point into virtual-space coordinates.
    pub fn to_virtual(&self, point: Vec2) -> ViewfitResult<Vec2> {
        self.inner.lock().to_virtual(point)
    }

    /// Converts a virtual-space point into physical-space coordinates.
    pub fn to_physical(&self, point: Vec2) -> ViewfitResult<Vec2> {
        self.inner.lock().to_physical(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ScaleMode;

    fn shared(vw: u32, vh: u32, pw: u32, ph: u32) -> SharedResolutionContext {
        let context = ResolutionContext::new(
            Extent::new(vw, vh),
            Extent::new(pw, ph),
            ScaleMode::Letterbox,
        )
        .expect("context construction failed");
        SharedResolutionContext::new(context)
    }

    #[test]
    fn test_clones_observe_resize() {
        let shared = shared(100, 50, 200, 100);
        let input_side = shared.clone();

        shared.on_resize(400, 100).expect("resize failed");
        assert_eq!(input_side.physical_extent(), Extent::new(400, 100));
        assert_eq!(input_side.viewport(), Rect::new(100, 0, 200, 100));
    }

    #[test]
    fn test_resize_from_another_thread() {
        let shared = shared(100, 50, 200, 100);
        let render_side = shared.clone();

        let handle = std::thread::spawn(move || {
            render_side.on_resize(400, 200).expect("resize failed");
            render_side.draw_transform().expect("recompute failed")
        });
        let draw = handle.join().expect("thread panicked");
        assert_eq!(draw.x, 4.0);
        assert_eq!(draw.y, 4.0);

        let input = shared.input_transform().expect("recompute failed");
        assert_eq!(input.x, 0.25);
        assert_eq!(input.y, 0.25);
    }

    #[test]
    fn test_lock_spans_multiple_calls() {
        let shared = shared(100, 50, 200, 100);
        let mut guard = shared.lock();
        let (draw, input) = (
            guard.draw_transform().expect("recompute failed"),
            guard.input_transform().expect("recompute failed"),
        );
        let product = draw.component_mul(&input);
        assert!((product.x - 1.0).abs() < 1e-5);
        assert!((product.y - 1.0).abs() < 1e-5);
    }
}
