// ============================================================================
// Processor Interface
// Callback invoked once per visited destination coordinate
// ============================================================================

use crate::domain::{DstPoint, SrcPoint};

/// Receives each (destination, source) coordinate pair of a scaling pass.
///
/// Both tuples are borrowed immutably; the engine owns them and keeps
/// advancing them after the call returns. Implementations usually write
/// into a buffer keyed by `dst`, reading from one keyed by a truncation of
/// `src`.
///
/// Any `FnMut(&DstPoint<N>, &SrcPoint<N>)` closure is a processor.
pub trait Processor<const N: usize> {
    /// Handle one destination coordinate
    fn process(&mut self, dst: &DstPoint<N>, src: &SrcPoint<N>);
}

impl<F, const N: usize> Processor<N> for F
where
    F: FnMut(&DstPoint<N>, &SrcPoint<N>),
{
    #[inline]
    fn process(&mut self, dst: &DstPoint<N>, src: &SrcPoint<N>) {
        self(dst, src)
    }
}

/// No-op processor for testing
pub struct NoOpProcessor;

impl<const N: usize> Processor<N> for NoOpProcessor {
    fn process(&mut self, _dst: &DstPoint<N>, _src: &SrcPoint<N>) {
        // Do nothing
    }
}

/// Wraps another processor, emitting a trace event and counting each visit.
pub struct TracingProcessor<P> {
    inner: P,
    visits: u64,
}

impl<P> TracingProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, visits: 0 }
    }

    /// Number of coordinates handled so far.
    pub fn visits(&self) -> u64 {
        self.visits
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Processor<N>, const N: usize> Processor<N> for TracingProcessor<P> {
    fn process(&mut self, dst: &DstPoint<N>, src: &SrcPoint<N>) {
        tracing::trace!(dst = ?dst.as_array(), src = ?src.as_array(), "visit");
        self.visits += 1;
        self.inner.process(dst, src);
    }
}
