use std::fs;

use docpdf::batch::{self, ConvertError, Job};
use docpdf::fonts;
use docpdf::layout::PageSetup;
use docpdf::render::DocumentHeader;
use docpdf::styles::StyleSheet;

fn skip(test: &str) {
    eprintln!(
        "Skipping {}: bundled fonts missing. Set DOCPDF_FONTS_DIR or copy assets/fonts next to the binary.",
        test
    );
}

#[test]
fn batch_continues_past_a_missing_source() {
    if !fonts::default_fonts_available() {
        skip("batch_continues_past_a_missing_source");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");
    fs::write(&first, "# First\n\nSome body text.\n").expect("write first source");
    fs::write(&second, "## Second\n- item\n").expect("write second source");

    let jobs = vec![
        Job::new(&first, dir.path().join("out/first.pdf")),
        Job::new(dir.path().join("nope.md"), dir.path().join("out/nope.pdf")),
        Job::new(&second, dir.path().join("out/second.pdf")),
    ];

    let header = DocumentHeader::new("Batch Test", "June 28, 2025");
    let summary = batch::run(
        &jobs,
        &StyleSheet::documentation(),
        &PageSetup::default(),
        Some(&header),
    );

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.succeeded(), 2);

    assert!(dir.path().join("out/first.pdf").is_file());
    assert!(dir.path().join("out/second.pdf").is_file());
    assert!(!dir.path().join("out/nope.pdf").exists());

    let results: Vec<_> = summary
        .outcomes()
        .iter()
        .map(|outcome| outcome.result.is_ok())
        .collect();
    assert_eq!(results, [true, false, true]);
    assert!(matches!(
        summary.outcomes()[1].result,
        Err(ConvertError::MissingSource(_))
    ));
}

#[test]
fn conversion_creates_missing_output_directories() {
    if !fonts::default_fonts_available() {
        skip("conversion_creates_missing_output_directories");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let source = dir.path().join("doc.md");
    fs::write(&source, "# Doc\n\ntext\n").expect("write source");

    let job = Job::new(&source, dir.path().join("deep/nested/doc.pdf"));
    let written = batch::convert_file(
        &job,
        &StyleSheet::documentation(),
        &PageSetup::default(),
        None,
    )
    .expect("convert into nested directory");

    assert!(written > 0);
    assert!(dir.path().join("deep/nested/doc.pdf").is_file());
}
