// ============================================================================
// Scale Entry Points
// ============================================================================

use super::plan::Plan;
use crate::domain::{DstArea, Mask, ScaleConfig, SrcArea};
use crate::interfaces::Processor;

/// Map every destination coordinate inside `mask` to its source coordinate
/// and hand both to `processor`.
///
/// Axes where `start > end` are walked mirrored. Zero-extent areas and
/// masks that miss the destination are silent no-ops. Nothing is allocated.
///
/// Source spans and the running source coordinate must stay inside the
/// [`Fixed32`](crate::numeric::Fixed32) range; [`ScaleConfig::validate`]
/// checks this up front.
///
/// # Example
/// ```
/// use ndscale::prelude::*;
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 6];
/// let area = DstArea::new([0], [6]);
/// scale(area, SrcArea::from_ints([0], [3]), &mut LinearWrite::new(&mut dst, &src), area);
/// assert_eq!(dst, [1, 1, 2, 2, 3, 3]);
/// ```
pub fn scale<P, const N: usize>(
    destination: DstArea<N>,
    source: SrcArea<N>,
    processor: &mut P,
    mask: Mask<N>,
) where
    P: Processor<N> + ?Sized,
{
    if let Some(plan) = Plan::new(destination, source, mask) {
        plan.run(processor);
    }
}

/// [`scale`] driven by a [`ScaleConfig`], using its effective mask.
pub fn scale_with<P, const N: usize>(config: &ScaleConfig<N>, processor: &mut P)
where
    P: Processor<N> + ?Sized,
{
    scale(
        config.destination,
        config.source,
        processor,
        config.effective_mask(),
    );
}
