//! # Viewfit Common
//!
//! Common types shared across the Viewfit crates.
//!
//! This crate provides the foundational types used by the adaptation
//! engine:
//! - Geometry types (`Extent`, `Rect`, `ScaleTransform`)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod geom;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::geom::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_carries_offending_values() {
        let err = Extent::new(800, 0)
            .validate()
            .expect_err("zero height must be rejected");
        assert_eq!(
            err,
            ViewfitError::InvalidDimension {
                width: 800,
                height: 0
            }
        );
    }

    #[test]
    fn test_rect_extent_round_trip() {
        let extent = Extent::new(640, 360);
        assert_eq!(Rect::from_extent(extent).extent(), extent);
    }
}
