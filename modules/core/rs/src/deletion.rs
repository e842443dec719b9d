use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use crate::insertion::set_contains;
use crate::loc::{Orientation, Site};

/// A reference TE that is missing from the samples listed in `sample_ids`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct Deletion {
    site: Site,
    orientation: Orientation,
    te_id: String,
    sample_ids: Vec<String>,
}

impl Deletion {
    pub fn new(
        site: Site,
        orientation: Orientation,
        te_id: impl Into<String>,
        sample_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let te_id = te_id.into();
        let sample_ids: Vec<String> = sample_ids.into_iter().map(Into::into).collect();
        ensure!(!te_id.is_empty(), "Deletion at {} has an empty TE identifier", site);
        ensure!(
            !sample_ids.is_empty(),
            "Deletion at {} must carry at least one sample identifier",
            site
        );

        Ok(Self {
            site,
            orientation,
            te_id,
            sample_ids,
        })
    }

    /// Identity of the call: two deletions are the same event iff their keys are equal.
    pub fn key(&self) -> (&Site, Orientation, &str) {
        (&self.site, self.orientation, &self.te_id)
    }

    /// Append every sample of `other` that is not listed yet.
    pub fn absorb_samples(&mut self, other: &Deletion) -> &mut Self {
        for sample in &other.sample_ids {
            if !set_contains(&self.sample_ids, sample) {
                self.sample_ids.push(sample.clone());
            }
        }
        self
    }

    /// Replace the sample list with `first` followed by `rest`, keeping the call itself.
    pub fn with_carriers(
        mut self,
        first: impl Into<String>,
        rest: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.sample_ids.clear();
        self.sample_ids.push(first.into());
        self.sample_ids.extend(rest.into_iter().map(Into::into));
        self
    }
}
