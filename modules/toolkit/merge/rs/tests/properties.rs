use eyre::Result;
use std::io::Cursor;
use temerge_core_rs::insertion::intervals_overlap;
use temerge_core_rs::loc::{Flanks, Site};
use temerge_core_rs::Insertion;
use temerge_io_rs::{insertion, ParsePolicy, ReadRecord, WriteRecord};
use temerge_merge_rs::{fold_records, merge_all, reduce, Master};

fn call(start: i64, end: i64, te_ids: &[&str], sample: &str) -> Insertion {
    Insertion::new(
        Site::from(("chr1", start, end)),
        Site::from(("chr1", 20000, 25000)),
        te_ids.iter().copied(),
        [sample],
    )
    .unwrap()
}

#[test]
fn overlap_is_symmetric_only_for_equal_flanks() {
    let (m, c) = (call(100, 200, &["X"], "m"), call(150, 250, &["X"], "c"));
    assert_eq!(
        intervals_overlap(&m, &c, &Flanks::NONE),
        intervals_overlap(&c, &m, &Flanks::NONE)
    );

    let (m, c) = (call(100, 200, &["X"], "m"), call(260, 300, &["X"], "c"));
    let flanks = Flanks::new(100, 0);
    assert!(intervals_overlap(&m, &c, &flanks));
    assert!(!intervals_overlap(&c, &m, &flanks));
}

#[test]
fn merging_nothing_is_a_no_op() {
    let master = vec![call(100, 200, &["X"], "a"), call(300, 400, &["Y"], "a")];
    let (records, merged) = merge_all(master.clone(), Vec::new(), &Flanks::new(0, 100));
    assert_eq!(records, master);
    assert_eq!(merged, 0);

    let (records, merged) = merge_all(Vec::new(), Vec::new(), &Flanks::new(0, 100));
    assert!(records.is_empty());
    assert_eq!(merged, 0);
}

#[test]
fn fold_is_a_duplicate_free_union() {
    let folded = fold_records(&call(1, 2, &["A", "B"], "a"), &call(1, 2, &["B", "C"], "b"));
    assert_eq!(folded.te_ids(), &["A", "B", "C"]);
}

#[test]
fn samples_accumulate_in_one_entry() {
    let lists = vec![
        vec![call(100, 200, &["TE"], "a")],
        vec![call(110, 210, &["TE"], "b")],
        vec![call(120, 220, &["TE"], "c")],
    ];
    let reduction = reduce(lists, Flanks::new(0, 100));
    assert_eq!(reduction.records().len(), 1);
    assert_eq!(reduction.records()[0].sample_ids(), &["a", "b", "c"]);
    assert_eq!(reduction.merged(), 2);
}

#[test]
fn chains_are_not_transitive() {
    // 1-2 share X and overlap, 2-3 share Y and overlap, 1-3 share nothing and are apart
    let one = call(100, 200, &["X"], "s1");
    let two = call(180, 300, &["X", "Y"], "s2");
    let three = call(290, 400, &["Y"], "s3");

    // Without flanks the folded 1 ∪ 2 entry keeps the coordinates of 1 and misses 3
    let reduction = reduce(
        [vec![one.clone()], vec![two.clone()], vec![three.clone()]],
        Flanks::NONE,
    );
    let records = reduction.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sample_ids(), &["s1", "s2"]);
    assert_eq!(records[0].te_ids(), &["X", "Y"]);
    assert_eq!(records[1], three);

    // A left flank reaching 3 lets it join through the TE id contributed by 2
    let reduction = reduce([vec![one], vec![two], vec![three]], Flanks::new(100, 0));
    assert_eq!(reduction.records().len(), 1);
    assert_eq!(reduction.records()[0].sample_ids(), &["s1", "s2", "s3"]);
}

#[test]
fn first_file_is_not_deduplicated() {
    let first = vec![call(100, 200, &["TE"], "a"), call(100, 200, &["TE"], "a")];
    let mut master = Master::new(first.clone(), Flanks::new(0, 100));
    assert_eq!(master.merge_all([call(100, 200, &["TE"], "b")]), 1);
    assert_eq!(master.records().len(), 2);
    assert_eq!(master.records()[0].sample_ids(), &["a", "b"]);
    assert_eq!(master.records()[1], first[1]);
}

#[test]
fn end_to_end_single_merged_row() -> Result<()> {
    let mut lists = Vec::new();
    for (sample, content) in [
        ("Col-0", "chr1\t100\t200\tchr1\t5000\t5500\tAT1G01010\n"),
        ("Ler-1", "chr1\t150\t250\tchr1\t5000\t5500\tAT1G01010\n"),
    ] {
        let mut reader = insertion::Reader::new(
            Cursor::new(content),
            format!("{}.bed", sample),
            vec![sample.to_owned()],
            ParsePolicy::Strict,
        )?;
        let mut records = Vec::new();
        reader.read_to_end(&mut records)?;
        lists.push(records);
    }

    let reduction = reduce(lists, Flanks::new(0, 100));
    let mut writer = insertion::Writer::new(Vec::new());
    writer.write_records(reduction.records())?;

    assert_eq!(
        String::from_utf8(writer.into_inner())?,
        "chr1\t100\t200\tchr1\t5000\t5500\tAT1G01010\tCol-0,Ler-1\n"
    );
    Ok(())
}
