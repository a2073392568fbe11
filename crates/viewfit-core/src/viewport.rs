//! Viewport solving for aspect-ratio-preserving scaling.
//!
//! The solver computes the largest rectangle that fits inside a physical
//! backbuffer while preserving the virtual design aspect ratio, centered so
//! the unused area becomes symmetric letterbox or pillarbox bars.

use serde::{Deserialize, Serialize};
use tracing::trace;
use viewfit_common::error::ViewfitResult;
use viewfit_common::geom::{Extent, Rect};

/// Scaling mode for non-native aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Maintain aspect ratio with letterboxing/pillarboxing.
    #[default]
    Letterbox,
    /// Stretch to fill the physical bounds (may distort).
    Stretch,
}

/// Computes the largest centered rectangle inside `physical` that preserves
/// the aspect ratio of `virtual_extent`.
///
/// Width-fill is tried first; when the derived height overflows the
/// physical bounds the solver pillarboxes instead, fixing the height and
/// deriving the width. Rounding is half-up, and the result is clamped into
/// the physical bounds so containment holds even when rounding lands one
/// pixel outside. Centering uses integer division, so the viewport is
/// symmetric about the physical center within one pixel for odd
/// differences.
///
/// Fails with `InvalidDimension` if either extent has a zero axis; the
/// aspect ratio is never computed against a zero height.
pub fn solve_viewport(virtual_extent: Extent, physical: Extent) -> ViewfitResult<Rect> {
    virtual_extent.validate()?;
    physical.validate()?;

    let target_aspect = virtual_extent.aspect_ratio();

    let mut width = physical.width;
    let mut height = (width as f32 / target_aspect + 0.5) as u32;
    if height > physical.height {
        // Pillarbox: bars on the sides instead of top/bottom.
        height = physical.height;
        width = (height as f32 * target_aspect + 0.5) as u32;
    }

    width = width.min(physical.width);
    height = height.min(physical.height);

    let x = (physical.width / 2) as i32 - (width / 2) as i32;
    let y = (physical.height / 2) as i32 - (height / 2) as i32;

    let viewport = Rect::new(x, y, width, height);
    trace!(
        "solved viewport {:?} for virtual {:?} in physical {:?}",
        viewport,
        virtual_extent,
        physical
    );
    Ok(viewport)
}

/// Solves the output rectangle for the given scale mode.
///
/// `Letterbox` runs the viewport solver; `Stretch` covers the whole
/// physical extent, distorting if the aspect ratios differ.
pub fn solve_output(
    virtual_extent: Extent,
    physical: Extent,
    mode: ScaleMode,
) -> ViewfitResult<Rect> {
    match mode {
        ScaleMode::Letterbox => solve_viewport(virtual_extent, physical),
        ScaleMode::Stretch => {
            virtual_extent.validate()?;
            physical.validate()?;
            Ok(Rect::from_extent(physical))
        }
    }
}
