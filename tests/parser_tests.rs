use fragsize_report::host::NameCleaner;
use fragsize_report::parser::{parse_fragment_size_file, Histogram, SampleHistograms};
use pretty_assertions::assert_eq;
use std::path::Path;

fn identity(name: &str, _root: &Path) -> String {
    name.to_string()
}

#[test]
fn test_header_lines_only() {
    let content = "#bamPEFragmentSize\nSize\tOccurrences\tSample\n";
    let parsed = parse_fragment_size_file(content, Path::new("run1"), &identity);

    assert_eq!(parsed.samples, SampleHistograms::new());
}

#[test]
fn test_single_sample_rows() {
    let content = "#bamPEFragmentSize\n\
                   Size\tOccurrences\tSample\n\
                   100\t5\t/path/to/sampleA.bam\n\
                   150\t3\t/path/to/sampleA.bam\n";
    let parsed = parse_fragment_size_file(content, Path::new(""), &identity);

    let mut expected = SampleHistograms::new();
    expected.insert(
        "sampleA.bam".to_string(),
        [(100, 5), (150, 3)].into_iter().collect::<Histogram>(),
    );
    assert_eq!(parsed.samples, expected);
}

#[test]
fn test_default_cleaner_strips_extension() {
    let content = "100\t5\t/path/to/sampleA.bam\n150\t3\t/path/to/sampleA.bam\n";
    let parsed = parse_fragment_size_file(content, Path::new(""), &NameCleaner::new());

    let mut expected = SampleHistograms::new();
    expected.insert(
        "sampleA".to_string(),
        [(100, 5), (150, 3)].into_iter().collect::<Histogram>(),
    );
    assert_eq!(parsed.samples, expected);
}

#[test]
fn test_root_passed_to_cleaner() {
    let content = "100\t5\t/data/s1.bam\n";
    let cleaner = NameCleaner::new().with_prepend_dirs(true);
    let parsed = parse_fragment_size_file(content, Path::new("batch2"), &cleaner);

    assert!(parsed.samples.contains_key("batch2 | s1"));
}

#[test]
fn test_multiple_samples_in_one_file() {
    let content = "100\t5\t/d/A.bam\n110\t6\t/d/A.bam\n100\t1\t/d/B.bam\n";
    let parsed = parse_fragment_size_file(content, Path::new(""), &NameCleaner::new());

    assert_eq!(parsed.samples.len(), 2);
    assert_eq!(parsed.samples["A"].len(), 2);
    assert_eq!(parsed.samples["B"][&100], 1);
}

#[test]
fn test_repeated_size_overwrites() {
    let content = "100\t5\tA\n100\t7\tA\n";
    let parsed = parse_fragment_size_file(content, Path::new(""), &identity);

    assert_eq!(parsed.samples["A"][&100], 7);
}

#[test]
fn test_malformed_rows_skipped() {
    let content = "#bamPEFragmentSize\n\
                   Size\tOccurrences\tSample\n\
                   100\t5\n\
                   x\t5\tA\n\
                   100\tnan\tA\n\
                   \n\
                   120\t4\tA\n";
    let parsed = parse_fragment_size_file(content, Path::new(""), &identity);

    assert_eq!(parsed.skipped_rows, 3);
    assert_eq!(parsed.samples["A"], [(120, 4)].into_iter().collect::<Histogram>());
}
