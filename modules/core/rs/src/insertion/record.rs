use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use super::predicates::set_contains;
use crate::loc::Site;

/// A single TE insertion, either observed in one sample or merged from several.
///
/// `insertion` is the placement of the new copy, `reference` is the reference-genome TE locus that
/// corroborates its identity. `te_ids` and `sample_ids` keep the order in which identifiers were
/// first seen, but are compared as sets.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct Insertion {
    insertion: Site,
    reference: Site,
    te_ids: Vec<String>,
    sample_ids: Vec<String>,
}

impl Insertion {
    /// Constructs a new `Insertion`. Coordinates are taken as is, but both identifier lists must
    /// be non-empty.
    pub fn new(
        insertion: Site,
        reference: Site,
        te_ids: impl IntoIterator<Item = impl Into<String>>,
        sample_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let te_ids: Vec<String> = te_ids.into_iter().map(Into::into).collect();
        let sample_ids: Vec<String> = sample_ids.into_iter().map(Into::into).collect();

        ensure!(
            !te_ids.is_empty(),
            "Insertion at {} must carry at least one TE identifier",
            insertion
        );
        ensure!(
            !sample_ids.is_empty(),
            "Insertion at {} must carry at least one sample identifier",
            insertion
        );

        Ok(Self {
            insertion,
            reference,
            te_ids,
            sample_ids,
        })
    }

    /// Absorb the identifiers of another insertion: every sample and TE id of `other` that is not
    /// yet present is appended, in `other`'s order. Coordinates are left untouched.
    pub fn absorb(&mut self, other: &Insertion) -> &mut Self {
        for sample in &other.sample_ids {
            if !set_contains(&self.sample_ids, sample) {
                self.sample_ids.push(sample.clone());
            }
        }
        for te in &other.te_ids {
            if !set_contains(&self.te_ids, te) {
                self.te_ids.push(te.clone());
            }
        }
        self
    }
}
