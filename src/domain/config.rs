// ============================================================================
// Scale Configuration
// Destination/source/mask bundle with overflow validation
// ============================================================================

use super::area::{DstArea, Mask, SrcArea};
use crate::numeric::Fixed32;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Errors
// ============================================================================

/// Problems detected by [`ScaleConfig::validate`].
///
/// Scaling itself never fails; these only flag configurations whose
/// fixed-point arithmetic would leave the representable range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Destination start and end are too far apart on this axis
    DestinationSpanOverflow { axis: usize },
    /// Source start and end are too far apart on this axis
    SourceSpanOverflow { axis: usize },
    /// The running source coordinate would leave the fixed-point range
    AccumulatorOverflow { axis: usize },
    /// Configuration could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::DestinationSpanOverflow { axis } => {
                write!(f, "destination span overflows on axis {}", axis)
            },
            ScaleError::SourceSpanOverflow { axis } => {
                write!(f, "source span overflows on axis {}", axis)
            },
            ScaleError::AccumulatorOverflow { axis } => {
                write!(f, "source coordinate overflows while walking axis {}", axis)
            },
            ScaleError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for ScaleError {}

/// Result type alias for configuration checks
pub type ScaleResult<T> = Result<T, ScaleError>;

// ============================================================================
// Configuration
// ============================================================================

/// Everything one scaling pass needs apart from the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleConfig<const N: usize> {
    /// Integer region to fill; reversed axes mirror the output
    pub destination: DstArea<N>,

    /// Fixed-point region to read from
    pub source: SrcArea<N>,

    /// Optional clip region. None means the whole destination
    pub mask: Option<Mask<N>>,
}

impl<const N: usize> ScaleConfig<N> {
    /// Create a new configuration with required parameters
    pub fn new(destination: DstArea<N>, source: SrcArea<N>) -> Self {
        Self {
            destination,
            source,
            mask: None,
        }
    }

    /// Builder method: Restrict visits to `mask`
    pub fn with_mask(mut self, mask: Mask<N>) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Builder method: Mirror the destination along `axis`
    pub fn mirrored(mut self, axis: usize) -> Self {
        self.destination.swap_axis(axis);
        self
    }

    /// The mask in effect: the explicit one, or the normalized destination.
    pub fn effective_mask(&self) -> Mask<N> {
        self.mask.unwrap_or_else(|| self.destination.normalized())
    }

    /// Check that walking this configuration stays inside the fixed-point
    /// range on every axis.
    ///
    /// Degenerate or fully masked configurations are valid: they simply
    /// visit nothing.
    pub fn validate(&self) -> ScaleResult<()> {
        for axis in 0..N {
            let mut dst = (
                i64::from(self.destination.start[axis]),
                i64::from(self.destination.end[axis]),
            );
            let mut src = (
                i64::from(self.source.start[axis].raw_value()),
                i64::from(self.source.end[axis].raw_value()),
            );
            if dst.0 > dst.1 {
                dst = (dst.1, dst.0);
                src = (src.1, src.0);
            }

            let dst_span = dst.1 - dst.0;
            let src_span = src.1 - src.0;
            if i32::try_from(dst_span).is_err() {
                return Err(ScaleError::DestinationSpanOverflow { axis });
            }
            if i32::try_from(src_span).is_err() {
                return Err(ScaleError::SourceSpanOverflow { axis });
            }
            if dst_span == 0 || src_span == 0 {
                continue;
            }

            // The accumulator is monotonic, so checking both ends of the
            // unclipped walk (including the step past the end) covers every
            // clip offset too.
            let delta = src_span / dst_span;
            let first = if delta >= 0 {
                src.0.min(src.1)
            } else {
                src.0.max(src.1) + delta
            };
            let last = first + delta * dst_span;
            if i32::try_from(first).is_err() || i32::try_from(last).is_err() {
                return Err(ScaleError::AccumulatorOverflow { axis });
            }
        }

        Ok(())
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Fixed-point coordinates are given as raw values (`value × 32768`).
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> ScaleResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScaleError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ScaleConfig<1> {
    /// One-to-one copy of `len` elements
    pub fn identity(len: i32) -> Self {
        Self::stretch(len, len)
    }

    /// Fit `src_len` source elements into `dst_len` destination elements
    pub fn stretch(dst_len: i32, src_len: i32) -> Self {
        Self::new(
            DstArea::new([0], [dst_len]),
            SrcArea::from_ints([0], [src_len]),
        )
    }
}

impl ScaleConfig<2> {
    /// Fit a `src_width × src_height` grid into a `dst_width × dst_height`
    /// grid. Axis 0 is the column, axis 1 the row.
    pub fn grid(dst_width: i32, dst_height: i32, src_width: i32, src_height: i32) -> Self {
        Self::new(
            DstArea::new([0, 0], [dst_width, dst_height]),
            SrcArea::new(
                [Fixed32::ZERO, Fixed32::ZERO],
                [Fixed32::from_int(src_width), Fixed32::from_int(src_height)],
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ScaleConfig::stretch(20, 10);
        assert_eq!(config.destination, DstArea::new([0], [20]));
        assert_eq!(config.source, SrcArea::from_ints([0], [10]));
        assert_eq!(config.mask, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScaleConfig::grid(8, 6, 4, 3)
            .mirrored(1)
            .with_mask(DstArea::new([0, 0], [4, 6]));

        assert_eq!(config.destination, DstArea::new([0, 6], [8, 0]));
        assert_eq!(config.effective_mask(), DstArea::new([0, 0], [4, 6]));
    }

    #[test]
    fn test_effective_mask_defaults_to_destination() {
        let config = ScaleConfig::identity(5).mirrored(0);
        assert_eq!(config.effective_mask(), DstArea::new([0], [5]));
    }

    #[test]
    fn test_degenerate_is_valid() {
        assert!(ScaleConfig::stretch(0, 10).validate().is_ok());
        assert!(ScaleConfig::stretch(10, 0).validate().is_ok());
    }

    #[test]
    fn test_validation_destination_span() {
        let config = ScaleConfig::new(
            DstArea::new([i32::MIN], [i32::MAX]),
            SrcArea::from_ints([0], [10]),
        );
        assert_eq!(
            config.validate(),
            Err(ScaleError::DestinationSpanOverflow { axis: 0 })
        );
    }

    #[test]
    fn test_validation_source_span() {
        let config = ScaleConfig::new(
            DstArea::new([0, 0], [10, 10]),
            SrcArea::new(
                [Fixed32::ZERO, Fixed32::MIN],
                [Fixed32::ONE, Fixed32::MAX],
            ),
        );
        assert_eq!(
            config.validate(),
            Err(ScaleError::SourceSpanOverflow { axis: 1 })
        );
    }

    #[test]
    fn test_validation_accumulator() {
        // Reversed walk starts at max + delta, then takes one step past the
        // lower end; ending at MIN leaves no room for that step.
        let config = ScaleConfig::new(
            DstArea::new([0], [1]),
            SrcArea::new([Fixed32::ZERO], [Fixed32::MIN]),
        );
        assert_eq!(
            config.validate(),
            Err(ScaleError::AccumulatorOverflow { axis: 0 })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScaleError::AccumulatorOverflow { axis: 2 }.to_string(),
            "source coordinate overflows while walking axis 2"
        );
        assert_eq!(
            ScaleError::InvalidConfig("missing field".to_string()).to_string(),
            "invalid configuration: missing field"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "destination": { "start": [0], "end": [4] },
            "source": { "start": [0], "end": [65536] },
            "mask": null
        }"#;
        let config = ScaleConfig::<1>::from_json(json).unwrap();
        assert_eq!(config, ScaleConfig::stretch(4, 2));

        let wrong_dims = r#"{
            "destination": { "start": [0, 0], "end": [4, 4] },
            "source": { "start": [0], "end": [65536] },
            "mask": null
        }"#;
        assert!(matches!(
            ScaleConfig::<1>::from_json(wrong_dims),
            Err(ScaleError::InvalidConfig(_))
        ));
    }
}
