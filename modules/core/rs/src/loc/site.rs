use std::fmt::Display;

use derive_getters::Dissolve;
use derive_more::Constructor;

use super::span::Span;

/// A site is a placement on a named contig: chromosome plus a coordinate span.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default, Dissolve, Constructor)]
pub struct Site {
    pub contig: String,
    pub span: Span,
}

impl Site {
    /// Check if both sites are placed on the same contig (exact string equality).
    pub fn same_contig(&self, other: &Self) -> bool {
        self.contig == other.contig
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.contig, self.span)
    }
}

impl<S: Into<String>> From<(S, i64, i64)> for Site {
    fn from((contig, start, end): (S, i64, i64)) -> Self {
        Self {
            contig: contig.into(),
            span: Span::new(start, end),
        }
    }
}
