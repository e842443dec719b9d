use ahash::AHashMap;
use itertools::Itertools;
use log::info;
use temerge_core_rs::loc::{Orientation, Site};
use temerge_core_rs::Deletion;

type Key = (Site, Orientation, String);

fn key(deletion: &Deletion) -> Key {
    let (site, orientation, te_id) = deletion.key();
    (site.clone(), orientation, te_id.to_owned())
}

/// Collapse deletion calls from several samples. Calls are the same event only if chrom, start,
/// end, strand and TE identifier are all identical.
///
/// As with insertions, the first list is taken verbatim and later lists are folded into it: a
/// call joins the first master entry with the same identity, otherwise it is appended. Returns the
/// merged calls and the number of folded (not appended) calls.
pub fn merge_deletions(lists: impl IntoIterator<Item = Vec<Deletion>>) -> (Vec<Deletion>, usize) {
    let mut lists = lists.into_iter();
    let mut master = lists.next().unwrap_or_default();

    // First occurrence of each identity in the master
    let mut index: AHashMap<Key, usize> = AHashMap::with_capacity(master.len());
    for (ind, deletion) in master.iter().enumerate() {
        index.entry(key(deletion)).or_insert(ind);
    }

    let mut total = 0;
    for candidates in lists {
        let mut merged = 0;
        for candidate in candidates {
            let key = key(&candidate);
            match index.get(&key).copied() {
                Some(ind) => {
                    master[ind].absorb_samples(&candidate);
                    merged += 1;
                }
                None => {
                    index.insert(key, master.len());
                    master.push(candidate);
                }
            }
        }
        info!("Found {} mergeable deletions", merged);
        total += merged;
    }

    (master, total)
}

/// Turn "samples missing the TE" into "samples carrying the TE".
///
/// Every record gets a new sample list: `reference` first, then each of `samples` (in the given
/// order) that the record does not list. Names are not repeated.
pub fn flip_deletions(
    deletions: impl IntoIterator<Item = Deletion>,
    samples: &[String],
    reference: &str,
) -> Vec<Deletion> {
    deletions
        .into_iter()
        .map(|deletion| {
            let carriers = samples
                .iter()
                .filter(|x| x.as_str() != reference && !deletion.sample_ids().contains(*x))
                .unique()
                .cloned()
                .collect_vec();
            deletion.with_carriers(reference, carriers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deletion(start: i64, strand: Orientation, te: &str, samples: &[&str]) -> Deletion {
        Deletion::new(
            Site::from(("chr1", start, start + 100)),
            strand,
            te,
            samples.iter().copied(),
        )
        .unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_merge_deletions_requires_identical_calls() {
        let lists = vec![
            vec![deletion(10, Orientation::Forward, "TE1", &["a"])],
            vec![
                deletion(10, Orientation::Forward, "TE1", &["b"]),
                deletion(11, Orientation::Forward, "TE1", &["b"]),
                deletion(10, Orientation::Reverse, "TE1", &["b"]),
                deletion(10, Orientation::Forward, "TE2", &["b"]),
            ],
            vec![deletion(11, Orientation::Forward, "TE1", &["c"])],
        ];

        let (records, merged) = merge_deletions(lists);
        assert_eq!(merged, 2);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].sample_ids(), &["a", "b"]);
        assert_eq!(records[1].sample_ids(), &["b", "c"]);
        assert_eq!(records[2].sample_ids(), &["b"]);
    }

    #[test]
    fn test_merge_deletions_keeps_first_list_verbatim() {
        let first = vec![
            deletion(10, Orientation::Dual, "TE1", &["a"]),
            deletion(10, Orientation::Dual, "TE1", &["a"]),
        ];
        let second = vec![deletion(10, Orientation::Dual, "TE1", &["b"])];

        let (records, merged) = merge_deletions([first, second]);
        assert_eq!(merged, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sample_ids(), &["a", "b"]);
        assert_eq!(records[1].sample_ids(), &["a"]);
    }

    #[test]
    fn test_merge_deletions_with_empty_first_list() {
        let (records, merged) = merge_deletions([
            vec![],
            vec![
                deletion(10, Orientation::Dual, "TE1", &["b"]),
                deletion(10, Orientation::Dual, "TE1", &["b"]),
            ],
        ]);
        assert_eq!(merged, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sample_ids(), &["b"]);

        let (records, merged) = merge_deletions(Vec::<Vec<Deletion>>::new());
        assert!(records.is_empty());
        assert_eq!(merged, 0);
    }

    #[test]
    fn test_flip_deletions() {
        let deletions = vec![
            deletion(10, Orientation::Forward, "TE1", &["b", "d"]),
            deletion(500, Orientation::Forward, "TE2", &["a", "b", "c", "d"]),
        ];
        let flipped = flip_deletions(deletions, &strings(&["a", "b", "c", "d"]), "Col-0");

        assert_eq!(flipped[0].sample_ids(), &["Col-0", "a", "c"]);
        assert_eq!(flipped[0].te_id(), "TE1");
        assert_eq!(flipped[1].sample_ids(), &["Col-0"]);
    }

    #[test]
    fn test_flip_deletions_does_not_repeat_names() {
        let deletions = vec![deletion(10, Orientation::Forward, "TE1", &["b"])];
        let flipped = flip_deletions(deletions, &strings(&["Col-0", "a", "b", "a"]), "Col-0");
        assert_eq!(flipped[0].sample_ids(), &["Col-0", "a"]);
    }
}
