use std::fmt::{Debug, Display};

use derive_getters::Dissolve;
use derive_more::Constructor;

/// Flank tolerance (in base pairs) used when two spans are tested for overlap.
///
/// The two sides are not interchangeable: `left` extends the end of the span that is already
/// stored (the master side), `right` extends the end of the span being compared against it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Constructor)]
pub struct Flanks {
    pub left: i64,
    pub right: i64,
}

impl Flanks {
    pub const NONE: Flanks = Flanks { left: 0, right: 0 };
}

impl Display for Flanks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "left={}, right={}", self.left, self.right)
    }
}

/// Span is a pair of genomic coordinates exactly as reported by an insertion or deletion caller.
/// It's not a validated half-open interval:
/// - start may exceed end, zero-length and negative coordinates are allowed;
/// - callers decide what the coordinates mean, the span only compares them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Dissolve, Constructor)]
pub struct Span {
    start: i64,
    end: i64,
}

impl Span {
    #[inline(always)]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Check if `other` overlaps this span once both ends are relaxed by the flanks:
    /// `self.start <= other.end + flanks.right` and `other.start <= self.end + flanks.left`.
    ///
    /// The test is asymmetric when `flanks.left != flanks.right`, swapping `self` and `other`
    /// may change the answer.
    pub fn overlaps_flanked(&self, other: &Self, flanks: &Flanks) -> bool {
        self.start <= other.end.saturating_add(flanks.right)
            && other.start <= self.end.saturating_add(flanks.left)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(i64, i64)> for Span {
    fn from((start, end): (i64, i64)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (i64, i64) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl PartialEq<(i64, i64)> for Span {
    fn eq(&self, other: &(i64, i64)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}
