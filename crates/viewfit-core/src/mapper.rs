//! Physical-to-virtual coordinate mapping for pointer and touch input.
//!
//! The mapper uses the offset-aware contract: a physical point is first
//! translated by the output rectangle's origin (the letterbox bars), then
//! scaled into virtual space. When the output rectangle sits at the origin
//! (a direct physical size with no letterboxing) this degrades to a pure
//! scale.

use glam::Vec2;
use viewfit_common::error::ViewfitResult;

use crate::cache::ScaleTransformCache;

/// Maps points between physical and virtual space using cached transforms.
///
/// Borrows the cache mutably because a read may trigger a recomputation.
#[derive(Debug)]
pub struct CoordinateMapper<'a> {
    cache: &'a mut ScaleTransformCache,
}

impl<'a> CoordinateMapper<'a> {
    /// Creates a mapper over the given cache.
    pub fn new(cache: &'a mut ScaleTransformCache) -> Self {
        Self { cache }
    }

    /// Converts a physical-space point (mouse click, touch event) into
    /// virtual-space coordinates.
    pub fn to_virtual(&mut self, point: Vec2) -> ViewfitResult<Vec2> {
        let input = self.cache.input_transform()?;
        let origin = self.cache.output_rect().origin();
        Ok(input.apply(point - origin))
    }

    /// Converts a virtual-space point into physical-space coordinates.
    ///
    /// Exact right-inverse of [`to_virtual`](Self::to_virtual) up to float
    /// rounding.
    pub fn to_physical(&mut self, point: Vec2) -> ViewfitResult<Vec2> {
        let draw = self.cache.draw_transform()?;
        let origin = self.cache.output_rect().origin();
        Ok(draw.apply(point) + origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewfit_common::geom::{Extent, Rect};

    fn cache(vw: u32, vh: u32, pw: u32, ph: u32) -> ScaleTransformCache {
        ScaleTransformCache::new(Extent::new(vw, vh), Extent::new(pw, ph))
            .expect("cache construction failed")
    }

    #[test]
    fn test_to_virtual_pure_scale() {
        let mut cache = cache(100, 50, 200, 25);
        let point = CoordinateMapper::new(&mut cache)
            .to_virtual(Vec2::new(1000.0, 1000.0))
            .expect("mapping failed");
        assert_eq!(point, Vec2::new(500.0, 2000.0));
    }

    #[test]
    fn test_to_virtual_subtracts_letterbox_offset() {
        // 2:1 content pillarboxed in a 3:1 window: viewport 200x100 at x=50.
        let mut cache = cache(100, 50, 300, 100);
        cache.notify_viewport_changed(Rect::new(50, 0, 200, 100));

        let mut mapper = CoordinateMapper::new(&mut cache);
        assert_eq!(
            mapper.to_virtual(Vec2::new(50.0, 0.0)).expect("mapping failed"),
            Vec2::ZERO
        );
        assert_eq!(
            mapper
                .to_virtual(Vec2::new(250.0, 100.0))
                .expect("mapping failed"),
            Vec2::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_zero_offset_matches_pure_scale() {
        let mut scaled = cache(100, 50, 300, 100);
        scaled.notify_viewport_changed(Rect::new(0, 0, 200, 100));
        let mut direct = cache(100, 50, 200, 100);

        let point = Vec2::new(120.0, 60.0);
        let via_viewport = CoordinateMapper::new(&mut scaled)
            .to_virtual(point)
            .expect("mapping failed");
        let via_physical = CoordinateMapper::new(&mut direct)
            .to_virtual(point)
            .expect("mapping failed");
        assert_eq!(via_viewport, via_physical);
    }

    #[test]
    fn test_round_trip() {
        let mut cache = cache(100, 50, 300, 100);
        cache.notify_viewport_changed(Rect::new(50, 0, 200, 100));
        let mut mapper = CoordinateMapper::new(&mut cache);

        for (x, y) in [(0.0, 0.0), (33.0, 17.0), (100.0, 50.0), (99.5, 0.25)] {
            let original = Vec2::new(x, y);
            let physical = mapper.to_physical(original).expect("mapping failed");
            let back = mapper.to_virtual(physical).expect("mapping failed");
            assert!((back.x - original.x).abs() < 1e-4, "x for ({x}, {y})");
            assert!((back.y - original.y).abs() < 1e-4, "y for ({x}, {y})");
        }
    }

    #[test]
    fn test_mapping_fails_on_degenerate_viewport() {
        let mut cache = cache(100, 50, 200, 100);
        cache.notify_viewport_changed(Rect::new(0, 0, 200, 0));
        let result = CoordinateMapper::new(&mut cache).to_virtual(Vec2::ZERO);
        assert!(result.is_err());
    }
}
