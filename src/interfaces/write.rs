// ============================================================================
// Write Processors
// Nearest-below copies between slices
// ============================================================================

use super::Processor;
use crate::domain::{DstPoint, SrcPoint};

/// Copies `src[trunc(src_index)]` into `dst[dst_index]` for 1-D slices.
///
/// Sampling is nearest-below: no interpolation between neighbouring source
/// elements. Supply your own processor if you need filtering.
///
/// Indices outside either slice are skipped with a warning.
pub struct LinearWrite<'a, D, S> {
    dst: &'a mut [D],
    src: &'a [S],
}

impl<'a, D, S> LinearWrite<'a, D, S> {
    pub fn new(dst: &'a mut [D], src: &'a [S]) -> Self {
        Self { dst, src }
    }
}

impl<D, S> Processor<1> for LinearWrite<'_, D, S>
where
    S: Copy,
    D: From<S>,
{
    fn process(&mut self, dst: &DstPoint<1>, src: &SrcPoint<1>) {
        let (to, from) = (dst[0], src[0].to_int());
        match (slot(to, self.dst.len()), slot(from, self.src.len())) {
            (Some(to), Some(from)) => self.dst[to] = D::from(self.src[from]),
            _ => tracing::warn!(dst = to, src = from, "write out of bounds, skipped"),
        }
    }
}

/// Row-major 2-D variant of [`LinearWrite`]: axis 0 is the column, axis 1
/// the row.
pub struct GridWrite<'a, D, S> {
    dst: &'a mut [D],
    dst_width: usize,
    src: &'a [S],
    src_width: usize,
}

impl<'a, D, S> GridWrite<'a, D, S> {
    pub fn new(dst: &'a mut [D], dst_width: usize, src: &'a [S], src_width: usize) -> Self {
        Self {
            dst,
            dst_width,
            src,
            src_width,
        }
    }
}

impl<D, S> Processor<2> for GridWrite<'_, D, S>
where
    S: Copy,
    D: From<S>,
{
    fn process(&mut self, dst: &DstPoint<2>, src: &SrcPoint<2>) {
        let from = src.to_int();
        match (
            cell(dst, self.dst_width, self.dst.len()),
            cell(&from, self.src_width, self.src.len()),
        ) {
            (Some(to), Some(from)) => self.dst[to] = D::from(self.src[from]),
            _ => tracing::warn!(
                dst = ?dst.as_array(),
                src = ?from.as_array(),
                "write out of bounds, skipped"
            ),
        }
    }
}

fn slot(index: i32, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

fn cell(point: &DstPoint<2>, width: usize, len: usize) -> Option<usize> {
    let column = usize::try_from(point[0]).ok().filter(|&x| x < width)?;
    let row = usize::try_from(point[1]).ok()?;
    row.checked_mul(width)?
        .checked_add(column)
        .filter(|&i| i < len)
}
