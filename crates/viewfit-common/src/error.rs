//! Error types for Viewfit operations.

use thiserror::Error;

/// Top-level error type for Viewfit operations.
///
/// Both variants are local, synchronous, and recoverable: the rejected call
/// leaves prior valid state untouched, and every operation is idempotent
/// given the same inputs, so callers may retry with corrected dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewfitError {
    /// A supplied width or height was zero
    #[error("invalid dimension {width}x{height}: both axes must be positive")]
    InvalidDimension {
        /// Supplied width
        width: u32,
        /// Supplied height
        height: u32,
    },

    /// Recomputing the scale transforms would divide by zero or produce a
    /// non-finite matrix entry
    #[error(
        "degenerate scale: output {output_width}x{output_height} \
         against virtual {virtual_width}x{virtual_height}"
    )]
    DegenerateScale {
        /// Virtual design width
        virtual_width: u32,
        /// Virtual design height
        virtual_height: u32,
        /// Output (physical or viewport) width
        output_width: u32,
        /// Output (physical or viewport) height
        output_height: u32,
    },
}

/// Result type alias for Viewfit operations.
pub type ViewfitResult<T> = Result<T, ViewfitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = ViewfitError::InvalidDimension {
            width: 0,
            height: 720,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension 0x720: both axes must be positive"
        );
    }

    #[test]
    fn test_degenerate_scale_display() {
        let err = ViewfitError::DegenerateScale {
            virtual_width: 100,
            virtual_height: 50,
            output_width: 0,
            output_height: 25,
        };
        assert_eq!(
            err.to_string(),
            "degenerate scale: output 0x25 against virtual 100x50"
        );
    }
}
