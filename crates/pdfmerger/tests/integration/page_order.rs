//! Page order and page tree handling of the lopdf backend.

use pdfmerger::CompressionLevel;
use pdfmerger::merge::{LopdfMerger, MergeCapability};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{
    page_rotations, page_widths, write_nested_pdf, write_pdf, write_rotated_pdf,
};

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
fn test_multi_page_order_preserved(#[case] compression: CompressionLevel) {
    let temp_dir = TempDir::new().unwrap();
    let first = write_pdf(temp_dir.path(), "first.pdf", &[101, 102, 103]);
    let second = write_pdf(temp_dir.path(), "second.pdf", &[201, 202]);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::with_compression(compression);
    merger.register(&first).unwrap();
    merger.register(&second).unwrap();
    let stats = merger.merge_all(&out).unwrap();

    assert_eq!(stats.total_pages, 5);
    assert_eq!(page_widths(&out), vec![101, 102, 103, 201, 202]);
}

#[test]
fn test_duplicate_entries_are_merged_twice() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::new();
    for path in [&a, &b, &a] {
        merger.register(path).unwrap();
    }
    merger.merge_all(&out).unwrap();

    assert_eq!(page_widths(&out), vec![100, 200, 100]);
}

#[test]
fn test_inherited_attributes_survive_merge() {
    let temp_dir = TempDir::new().unwrap();
    let flat = write_pdf(temp_dir.path(), "flat.pdf", &[100]);
    let nested = write_nested_pdf(temp_dir.path(), "nested.pdf", 400, 2);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::new();
    merger.register(&flat).unwrap();
    merger.register(&nested).unwrap();
    merger.merge_all(&out).unwrap();

    assert_eq!(page_widths(&out), vec![100, 400, 400]);
}

#[test]
fn test_nested_document_as_base() {
    let temp_dir = TempDir::new().unwrap();
    let nested = write_nested_pdf(temp_dir.path(), "nested.pdf", 300, 1);
    let flat = write_pdf(temp_dir.path(), "flat.pdf", &[150, 160]);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::new();
    merger.register(&nested).unwrap();
    merger.register(&flat).unwrap();
    let stats = merger.merge_all(&out).unwrap();

    assert_eq!(stats.total_pages, 3);
    assert_eq!(page_widths(&out), vec![300, 150, 160]);
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Maximum)]
fn test_base_root_attributes_stay_with_base_pages(#[case] compression: CompressionLevel) {
    let temp_dir = TempDir::new().unwrap();
    let rotated = write_rotated_pdf(temp_dir.path(), "rotated.pdf", &[100, 110], 90);
    let upright = write_pdf(temp_dir.path(), "upright.pdf", &[200]);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::with_compression(compression);
    merger.register(&rotated).unwrap();
    merger.register(&upright).unwrap();
    merger.merge_all(&out).unwrap();

    assert_eq!(page_widths(&out), vec![100, 110, 200]);
    assert_eq!(page_rotations(&out), vec![90, 90, 0]);
}

#[test]
fn test_appended_root_attributes_stay_with_appended_pages() {
    let temp_dir = TempDir::new().unwrap();
    let upright = write_pdf(temp_dir.path(), "upright.pdf", &[100]);
    let rotated = write_rotated_pdf(temp_dir.path(), "rotated.pdf", &[200], 270);
    let out = temp_dir.path().join("out.pdf");

    let mut merger = LopdfMerger::new();
    merger.register(&upright).unwrap();
    merger.register(&rotated).unwrap();
    merger.register(&upright).unwrap();
    merger.merge_all(&out).unwrap();

    assert_eq!(page_rotations(&out), vec![0, 270, 0]);
}
