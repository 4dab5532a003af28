// ============================================================================
// Scale Plan
// Axis normalization, per-axis source deltas and mask clipping
// ============================================================================

use crate::domain::{DstArea, Mask, SrcArea, SrcPoint};

/// A clipped, ready-to-walk scaling pass.
///
/// Every axis is handled on its own: the destination axis is normalized to
/// `start <= end` (mirroring the source axis with it), the source step per
/// destination step is computed, and the destination is clamped to the
/// mask. Clamping the start advances the source start by the skipped steps,
/// so each surviving destination coordinate maps to exactly the source
/// coordinate an unmasked pass would give it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan<const N: usize> {
    pub(super) area: DstArea<N>,
    pub(super) src_start: SrcPoint<N>,
    pub(super) delta: SrcPoint<N>,
}

impl<const N: usize> Plan<N> {
    /// Normalize and clip. Returns `None` when there is nothing to visit:
    /// no axes, a zero-extent destination or source axis, or a destination
    /// lying wholly outside the mask.
    pub fn new(destination: DstArea<N>, source: SrcArea<N>, mask: Mask<N>) -> Option<Self> {
        let mask = mask.normalized();

        if N == 0 || destination.is_degenerate() || source.is_degenerate() {
            tracing::debug!(dimensions = N, "zero-extent area, nothing to scale");
            return None;
        }

        let mut area = destination;
        let mut source = source;
        let mut src_start = SrcPoint::default();
        let mut delta = SrcPoint::default();

        for axis in 0..N {
            if area.is_reversed(axis) {
                area.swap_axis(axis);
                source.swap_axis(axis);
            }

            if area.end[axis] < mask.start[axis] || area.start[axis] >= mask.end[axis] {
                tracing::debug!(axis, "destination lies outside the mask, nothing to scale");
                return None;
            }

            let step = (source.end[axis] - source.start[axis])
                .div_int(area.end[axis] - area.start[axis]);

            // Walking the source backwards, the first sample sits one step
            // below the upper bound.
            let mut first = if step.is_negative() {
                source.start[axis].max(source.end[axis]) + step
            } else {
                source.start[axis].min(source.end[axis])
            };

            if area.start[axis] < mask.start[axis] {
                first += step.mul_int(mask.start[axis] - area.start[axis]);
                area.start[axis] = mask.start[axis];
            }
            if area.end[axis] >= mask.end[axis] {
                area.end[axis] = mask.end[axis];
            }

            src_start[axis] = first;
            delta[axis] = step;
        }

        let plan = Self {
            area,
            src_start,
            delta,
        };
        tracing::debug!(dimensions = N, visits = plan.visits(), "scale plan ready");
        Some(plan)
    }

    /// The clipped, normalized destination area that will be walked.
    pub fn area(&self) -> DstArea<N> {
        self.area
    }

    /// Source coordinate at the first visited destination coordinate.
    pub fn source_start(&self) -> SrcPoint<N> {
        self.src_start
    }

    /// Source step per unit destination step, per axis.
    pub fn delta(&self) -> SrcPoint<N> {
        self.delta
    }

    /// How many times the processor will be called.
    pub fn visits(&self) -> u64 {
        self.area.volume()
    }
}
