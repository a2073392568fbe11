//! Scale transform caching behind an explicit Clean/Dirty state machine.
//!
//! The cache owns the virtual design extent and the current output
//! rectangle (the raw physical extent, or a solved viewport when the host
//! applies letterboxing), and lazily derives the draw and input scale
//! transforms from them. Size mutators transition to `Dirty`; the first
//! transform read after a change recomputes both transforms in one step and
//! transitions back to `Clean`, so the pair is always derived from the same
//! size snapshot and the two are exact component-wise inverses.

use tracing::{debug, trace, warn};
use viewfit_common::error::{ViewfitError, ViewfitResult};
use viewfit_common::geom::{Extent, Rect, ScaleTransform};

/// Cache freshness state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    /// Cached transforms were computed from the current size pair.
    Clean,
    /// A size changed since the transforms were last computed.
    #[default]
    Dirty,
}

/// Cached draw/input scale transform pair for a virtual/output size pair.
#[derive(Debug, Clone)]
pub struct ScaleTransformCache {
    virtual_extent: Extent,
    output: Rect,
    title_safe: Rect,
    screen_area: Rect,
    draw: ScaleTransform,
    input: ScaleTransform,
    state: CacheState,
}

impl ScaleTransformCache {
    /// Creates a cache for the given virtual and physical extents.
    ///
    /// The cache starts `Dirty`; transforms are computed on first read.
    pub fn new(virtual_extent: Extent, physical: Extent) -> ViewfitResult<Self> {
        virtual_extent.validate()?;
        physical.validate()?;
        Ok(Self {
            virtual_extent,
            output: Rect::from_extent(physical),
            title_safe: title_safe_area(virtual_extent),
            screen_area: Rect::from_extent(virtual_extent),
            draw: ScaleTransform::IDENTITY,
            input: ScaleTransform::IDENTITY,
            state: CacheState::Dirty,
        })
    }

    /// Sets the virtual design extent, re-deriving the title-safe and
    /// screen-area rectangles and marking the cache dirty.
    ///
    /// Fails with `InvalidDimension` on a zero axis, leaving all state
    /// untouched.
    pub fn set_virtual_size(&mut self, extent: Extent) -> ViewfitResult<()> {
        extent.validate()?;
        self.virtual_extent = extent;
        self.screen_area = Rect::from_extent(extent);
        self.title_safe = title_safe_area(extent);
        self.state = CacheState::Dirty;
        Ok(())
    }

    /// Stores a new physical extent as the output rectangle at the origin.
    ///
    /// Marks the cache dirty only if the extent actually differs, so
    /// repeated identical resize notifications are no-ops. Fails with
    /// `InvalidDimension` on a zero axis, leaving all state untouched.
    pub fn set_physical_size(&mut self, extent: Extent) -> ViewfitResult<()> {
        extent.validate()?;
        self.set_output(Rect::from_extent(extent));
        Ok(())
    }

    /// Stores a solved viewport (extent plus letterbox offset) as the
    /// output rectangle.
    ///
    /// Marks the cache dirty only on an actual change. A zero-axis viewport
    /// is accepted here; the failure surfaces as `DegenerateScale` on the
    /// next transform read.
    pub fn notify_viewport_changed(&mut self, viewport: Rect) {
        self.set_output(viewport);
    }

    fn set_output(&mut self, output: Rect) {
        if output == self.output {
            trace!("output rect unchanged at {:?}, cache stays {:?}", output, self.state);
            return;
        }
        self.output = output;
        self.state = CacheState::Dirty;
    }

    /// The virtual→output draw transform, recomputing first if dirty.
    pub fn draw_transform(&mut self) -> ViewfitResult<ScaleTransform> {
        self.ensure_clean()?;
        Ok(self.draw)
    }

    /// The output→virtual input transform, recomputing first if dirty.
    pub fn input_transform(&mut self) -> ViewfitResult<ScaleTransform> {
        self.ensure_clean()?;
        Ok(self.input)
    }

    /// Both transforms from the same recomputation, `(draw, input)`.
    pub fn transforms(&mut self) -> ViewfitResult<(ScaleTransform, ScaleTransform)> {
        self.ensure_clean()?;
        Ok((self.draw, self.input))
    }

    /// The virtual design extent.
    #[must_use]
    pub fn virtual_extent(&self) -> Extent {
        self.virtual_extent
    }

    /// The current output rectangle (physical extent or solved viewport).
    #[must_use]
    pub fn output_rect(&self) -> Rect {
        self.output
    }

    /// The title-safe rectangle in virtual coordinates.
    #[must_use]
    pub fn title_safe_area(&self) -> Rect {
        self.title_safe
    }

    /// The whole screen in virtual coordinates.
    #[must_use]
    pub fn screen_area(&self) -> Rect {
        self.screen_area
    }

    /// The current cache state.
    #[must_use]
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Recomputes both transforms if the cache is dirty.
    ///
    /// On `DegenerateScale` the previous transforms are retained and the
    /// state stays `Dirty`, so the caller can skip transform-dependent work
    /// for the frame and retry after the next valid size change.
    fn ensure_clean(&mut self) -> ViewfitResult<()> {
        if self.state == CacheState::Clean {
            return Ok(());
        }

        let output = self.output.extent();
        if self.virtual_extent.is_empty() || output.is_empty() {
            warn!(
                "degenerate scale: output {:?} against virtual {:?}",
                output, self.virtual_extent
            );
            return Err(self.degenerate(output));
        }

        let draw = ScaleTransform::new(
            output.width as f32 / self.virtual_extent.width as f32,
            output.height as f32 / self.virtual_extent.height as f32,
        );
        let input = ScaleTransform::new(
            self.virtual_extent.width as f32 / output.width as f32,
            self.virtual_extent.height as f32 / output.height as f32,
        );
        if !draw.is_finite() || !input.is_finite() {
            warn!(
                "non-finite scale factors for output {:?} against virtual {:?}",
                output, self.virtual_extent
            );
            return Err(self.degenerate(output));
        }

        debug!(
            "recomputed scale transforms: draw ({}, {}), input ({}, {})",
            draw.x, draw.y, input.x, input.y
        );
        self.draw = draw;
        self.input = input;
        self.state = CacheState::Clean;
        Ok(())
    }

    fn degenerate(&self, output: Extent) -> ViewfitError {
        ViewfitError::DegenerateScale {
            virtual_width: self.virtual_extent.width,
            virtual_height: self.virtual_extent.height,
            output_width: output.width,
            output_height: output.height,
        }
    }
}

/// Derives the title-safe rectangle for a virtual extent: a 5% inset on
/// every edge.
#[must_use]
pub fn title_safe_area(extent: Extent) -> Rect {
    let inset_x = extent.width / 20;
    let inset_y = extent.height / 20;
    Rect::new(
        inset_x as i32,
        inset_y as i32,
        extent.width - 2 * inset_x,
        extent.height - 2 * inset_y,
    )
}
