mod common;

use tempfile::tempdir;

#[test]
fn test_pdf_split_writes_one_file_per_page() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    common::write_sample_pdf(&input, &["one", "two", "three"]);

    let output = common::run(dir.path(), &["pdf", "split", "report.pdf", "pages"]);
    assert!(output.status.success(), "{}", common::stderr(&output));

    let out_dir = dir.path().join("pages");
    for name in ["page_001.pdf", "page_002.pdf", "page_003.pdf"] {
        let page = out_dir.join(name);
        assert!(page.exists(), "missing {name}");
        assert_eq!(common::pdf_page_count(&page), 1);
    }
}

#[test]
fn test_pdf_split_default_folder_with_yes() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    common::write_sample_pdf(&input, &["only"]);

    let output = common::run(dir.path(), &["pdf", "split", "report.pdf", "--yes"]);
    assert!(output.status.success(), "{}", common::stderr(&output));

    // Default folder name is the input stem plus "_pages", next to the input.
    assert!(dir.path().join("report_pages/page_001.pdf").exists());
}

#[test]
fn test_pdf_merge_concatenates_in_order() {
    let dir = tempdir().unwrap();
    common::write_sample_pdf(&dir.path().join("a.pdf"), &["a1", "a2"]);
    common::write_sample_pdf(&dir.path().join("b.pdf"), &["b1"]);

    let output = common::run(
        dir.path(),
        &["pdf", "merge", "a.pdf", "b.pdf", "-o", "combined.pdf"],
    );
    assert!(output.status.success(), "{}", common::stderr(&output));

    let merged = dir.path().join("combined.pdf");
    assert!(merged.exists());
    assert_eq!(common::pdf_page_count(&merged), 3);
}

#[test]
fn test_pdf_merge_with_no_inputs_fails_before_writing() {
    let dir = tempdir().unwrap();
    let output = common::run(dir.path(), &["pdf", "merge", "-o", "combined.pdf"]);
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("no input files"));
    assert!(!dir.path().join("combined.pdf").exists());
}

#[test]
fn test_pdf_merge_missing_input_fails() {
    let dir = tempdir().unwrap();
    common::write_sample_pdf(&dir.path().join("a.pdf"), &["a1"]);

    let output = common::run(
        dir.path(),
        &["pdf", "merge", "a.pdf", "missing.pdf", "-o", "out.pdf"],
    );
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("missing.pdf"));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_pdf_split_then_merge_folder_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    common::write_sample_pdf(&input, &["one", "two", "three", "four"]);

    let output = common::run(dir.path(), &["pdf", "split", "report.pdf", "pages"]);
    assert!(output.status.success(), "{}", common::stderr(&output));

    let output = common::run(
        dir.path(),
        &["pdf", "merge-folder", "pages", "rebuilt.pdf"],
    );
    assert!(output.status.success(), "{}", common::stderr(&output));

    // Zero-padded page names sort in page order, so the rebuilt document has
    // the same page count and order as the original.
    assert_eq!(common::pdf_page_count(&dir.path().join("rebuilt.pdf")), 4);
}

#[test]
fn test_pdf_extract_text_reads_text_layer() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    common::write_sample_pdf(&input, &["FirstPageWord", "SecondPageWord"]);

    let output = common::run(
        dir.path(),
        &["pdf", "extract-text", "report.pdf", "-n", "out"],
    );
    assert!(output.status.success(), "{}", common::stderr(&output));

    let text = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(text.contains("FirstPageWord"), "{text}");
    assert!(text.contains("SecondPageWord"), "{text}");
}

#[test]
fn test_pdf_split_handles_link_annotations() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("linked.pdf");
    common::write_annotated_pdf(&input);

    // The annotation's /P back-reference forms a cycle in the page's object
    // graph; the split must still terminate and produce a valid page.
    let output = common::run(dir.path(), &["pdf", "split", "linked.pdf", "pages"]);
    assert!(output.status.success(), "{}", common::stderr(&output));

    let page = dir.path().join("pages/page_001.pdf");
    assert!(page.exists());
    assert_eq!(common::pdf_page_count(&page), 1);
}

#[test]
fn test_pdf_merge_annotated_pages() {
    let dir = tempdir().unwrap();
    common::write_annotated_pdf(&dir.path().join("a.pdf"));
    common::write_annotated_pdf(&dir.path().join("b.pdf"));

    let output = common::run(
        dir.path(),
        &["pdf", "merge", "a.pdf", "b.pdf", "-o", "combined.pdf"],
    );
    assert!(output.status.success(), "{}", common::stderr(&output));
    assert_eq!(common::pdf_page_count(&dir.path().join("combined.pdf")), 2);
}

#[test]
fn test_pdf_merge_folder_without_pdfs_fails_before_resolving() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    // No output argument: the empty folder must be rejected up front, not
    // after an output-path resolution round.
    let output = common::run(dir.path(), &["pdf", "merge-folder", "empty"]);
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("no input files"));
    assert!(!dir.path().join("empty/merged.pdf").exists());
}

#[test]
fn test_pdf_split_nonexistent_input_fails() {
    let dir = tempdir().unwrap();
    let output = common::run(dir.path(), &["pdf", "split", "nope.pdf", "pages"]);
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("input not found"));
    assert!(!dir.path().join("pages").exists());
}
