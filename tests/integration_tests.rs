//! End-to-end comparison tests over realistic tool outputs.

use dupediff::compare::{compare_raw, FileGroup, RawOutput};
use dupediff::normalize::{NormalizeError, OutputFormat, Side};

fn line_blocks(bytes: &[u8]) -> RawOutput<'_> {
    RawOutput::new(bytes, OutputFormat::LineBlocks)
}

fn structured(bytes: &[u8]) -> RawOutput<'_> {
    RawOutput::new(bytes, OutputFormat::StructuredList)
}

#[test]
fn test_agreeing_tools_match_despite_ordering() {
    // jdupes prints groups in scan order, paths in discovery order.
    let reference = b"/data/photos/img_0042.jpg\n/data/backup/img_0042.jpg\n\n\
/data/notes/todo.txt\n/data/notes/todo (copy).txt\n\n";

    // The candidate found the same groups, listed in the opposite order,
    // with paths reversed and extra metadata fields attached.
    let candidate = br#"[
        {"file_list": ["/data/notes/todo (copy).txt", "/data/notes/todo.txt"], "size": 812},
        {"file_list": ["/data/backup/img_0042.jpg", "/data/photos/img_0042.jpg"], "size": 348211}
    ]"#;

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    assert!(report.is_match());
    assert_eq!(report.candidate_total, 2);
    assert_eq!(report.reference_total, 2);
}

#[test]
fn test_missing_group_is_attributed_to_the_right_side() {
    let reference = b"/a/1\n/a/2\n\n/b/1\n/b/2\n\n";
    let candidate = br#"[{"file_list": ["/a/1", "/a/2"]}]"#;

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    assert!(!report.is_match());
    assert!(report.only_in_candidate.is_empty());
    assert_eq!(
        report.only_in_reference,
        vec![FileGroup::from_paths(["/b/1", "/b/2"])]
    );
    assert_eq!(report.candidate_total, 1);
    assert_eq!(report.reference_total, 2);
}

#[test]
fn test_regrouping_shows_up_on_both_sides() {
    // The candidate split one three-file group into a pair and a straggler
    // merged elsewhere; neither composite matches the reference's group.
    let reference = b"/x/1\n/x/2\n/x/3\n\n";
    let candidate = br#"[{"file_list": ["/x/1", "/x/2"]}, {"file_list": ["/x/3", "/y/9"]}]"#;

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    assert_eq!(report.only_in_candidate.len(), 2);
    assert_eq!(report.only_in_reference.len(), 1);
}

#[test]
fn test_duplicate_group_multiplicity() {
    let reference = b"x\ny\n\n";
    let candidate = br#"[{"file_list": ["x", "y"]}, {"file_list": ["y", "x"]}]"#;

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    // One copy pairs off; exactly one is left over.
    assert_eq!(report.only_in_candidate, vec![FileGroup::from_paths(["x", "y"])]);
    assert!(report.only_in_reference.is_empty());
}

#[test]
fn test_empty_outputs_are_a_match() {
    let report = compare_raw(structured(b"[]"), line_blocks(b"")).unwrap();

    assert!(report.is_match());
    assert_eq!(report.candidate_total, 0);
    assert_eq!(report.reference_total, 0);
}

#[test]
fn test_empty_list_records_do_not_count() {
    let candidate = br#"[{"file_list": []}, {"file_list": ["a", "b"]}, {"file_list": []}]"#;
    let reference = b"a\nb\n";

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    assert!(report.is_match());
    assert_eq!(report.candidate_total, 1);
}

#[test]
fn test_malformed_candidate_aborts_before_comparison() {
    let err = compare_raw(
        structured(b"Segmentation fault (core dumped)"),
        line_blocks(b"a\nb\n"),
    )
    .unwrap_err();

    assert_eq!(err.side(), Side::Candidate);
    assert!(matches!(err, NormalizeError::MalformedRecords { .. }));
}

#[test]
fn test_non_utf8_reference_aborts_before_comparison() {
    let err = compare_raw(
        structured(b"[]"),
        line_blocks(&[b'/', b'a', 0xff, b'\n']),
    )
    .unwrap_err();

    assert_eq!(err.side(), Side::Reference);
    assert!(matches!(err, NormalizeError::InvalidEncoding { .. }));
}

#[test]
fn test_paths_are_compared_as_opaque_strings() {
    // `./a` and `a` are different strings, so they are different paths.
    let reference = b"./a\n./b\n\n";
    let candidate = br#"[{"file_list": ["a", "b"]}]"#;

    let report = compare_raw(structured(candidate), line_blocks(reference)).unwrap();

    assert!(!report.is_match());
    assert_eq!(report.only_in_candidate.len(), 1);
    assert_eq!(report.only_in_reference.len(), 1);
}
