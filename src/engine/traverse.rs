// ============================================================================
// Traversal
// Nested walk over a clipped plan, highest axis outermost
// ============================================================================

use super::plan::Plan;
use crate::domain::{DstPoint, SrcPoint};
use crate::interfaces::Processor;

impl<const N: usize> Plan<N> {
    /// Walk the plan, calling `processor` once per destination coordinate.
    ///
    /// Axis `N - 1` is the outermost loop and axis 0 the innermost. The walk
    /// always runs to completion.
    pub fn run<P>(&self, processor: &mut P)
    where
        P: Processor<N> + ?Sized,
    {
        let Some(outermost) = N.checked_sub(1) else {
            return;
        };
        let mut dst = DstPoint::<N>::default();
        let mut src = SrcPoint::<N>::default();
        walk_axis(self, outermost, &mut dst, &mut src, processor);
    }
}

fn walk_axis<P, const N: usize>(
    plan: &Plan<N>,
    axis: usize,
    dst: &mut DstPoint<N>,
    src: &mut SrcPoint<N>,
    processor: &mut P,
) where
    P: Processor<N> + ?Sized,
{
    dst[axis] = plan.area.start[axis];
    src[axis] = plan.src_start[axis];

    while dst[axis] < plan.area.end[axis] {
        if axis == 0 {
            processor.process(dst, src);
        } else {
            walk_axis(plan, axis - 1, dst, src, processor);
        }
        dst[axis] += 1;
        src[axis] += plan.delta[axis];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DstArea, Point, SrcArea};
    use crate::numeric::Fixed32;

    #[test]
    fn test_highest_axis_is_outermost() {
        let dst = DstArea::new([0, 0], [2, 2]);
        let plan = Plan::new(dst, SrcArea::from_ints([0, 0], [2, 2]), dst).unwrap();

        let mut order = Vec::new();
        plan.run(&mut |d: &DstPoint<2>, _: &SrcPoint<2>| order.push(d.0));
        assert_eq!(order, vec![[0, 0], [1, 0], [0, 1], [1, 1]]);
    }

    #[test]
    fn test_inner_axis_restarts_each_outer_step() {
        let dst = DstArea::new([0, 0], [2, 3]);
        let plan = Plan::new(dst, SrcArea::from_ints([0, 0], [4, 3]), dst).unwrap();

        let mut sources = Vec::new();
        plan.run(&mut |_: &DstPoint<2>, s: &SrcPoint<2>| sources.push(s.to_int().0));
        assert_eq!(
            sources,
            vec![[0, 0], [2, 0], [0, 1], [2, 1], [0, 2], [2, 2]]
        );
    }

    #[test]
    fn test_three_dimensions() {
        let dst = DstArea::new([0, 0, 0], [2, 3, 4]);
        let plan = Plan::new(dst, SrcArea::from_ints([0, 0, 0], [2, 3, 4]), dst).unwrap();

        let mut seen = Vec::new();
        plan.run(&mut |d: &DstPoint<3>, s: &SrcPoint<3>| {
            assert_eq!(s.to_int(), *d);
            seen.push(d.0);
        });
        assert_eq!(seen.len(), 24);
        assert_eq!(seen[0], [0, 0, 0]);
        assert_eq!(seen[1], [1, 0, 0]);
        assert_eq!(seen[2], [0, 1, 0]);
        assert_eq!(seen[23], [1, 2, 3]);
    }

    #[test]
    fn test_empty_axis_visits_nothing() {
        let dst = DstArea::new([0, 0], [4, 10]);
        let plan = Plan::new(
            dst,
            SrcArea::from_ints([0, 0], [4, 10]),
            DstArea::new([0, 10], [4, 20]),
        )
        .unwrap();

        let mut calls = 0;
        plan.run(&mut |_: &DstPoint<2>, _: &SrcPoint<2>| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_source_accumulates_fractional_delta() {
        let dst = DstArea::new([0], [4]);
        let src = SrcArea::new([Fixed32::ZERO], [Fixed32::ONE]);
        let plan = Plan::new(dst, src, dst).unwrap();

        let mut raws = Vec::new();
        plan.run(&mut |_: &DstPoint<1>, s: &SrcPoint<1>| raws.push(s[0].raw_value()));
        assert_eq!(raws, vec![0, 8192, 16384, 24576]);
        assert_eq!(plan.source_start(), Point([Fixed32::ZERO]));
    }
}
