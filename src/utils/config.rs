//! Configuration and constants for parsing and reporting.

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Category tag used to discover bamPEFragmentSize raw length files
pub const FRAGMENT_SIZE_CATEGORY: &str = "deeptools/bamPEFragmentSizeDistribution";

/// Section tag recorded against each contributing data source
pub const FRAGMENT_SIZE_SECTION: &str = "bamPEFragmentSizeDistribution";

// Markers in the bamPEFragmentSize --outRawFragmentLengths output
pub const HEADER_MARKER: &str = "#bamPEFragmentSize";
pub const COLUMN_HEADER_MARKER: &str = "Size";

/// Search patterns: category tag -> marker the first line must start with
pub const SEARCH_PATTERNS: &[(&str, &str)] = &[(FRAGMENT_SIZE_CATEGORY, HEADER_MARKER)];

/// Files above this size are never read during discovery (50 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

// Report section
pub const SECTION_NAME: &str = "Fragment size distribution";
pub const SECTION_ANCHOR: &str = "fragment_size_distribution";
pub const SECTION_DESCRIPTION: &str = "Distribution of paired-end fragment sizes";

// Line chart
pub const PLOT_ID: &str = "fragment_size_distribution_plot";
pub const PLOT_TITLE: &str = "deeptools: Fragment Size Distribution Plot";
pub const PLOT_YLAB: &str = "Occurrence";
pub const PLOT_XLAB: &str = "Fragment Size (bp)";
pub const PLOT_SMOOTH_POINTS: usize = 50;
pub const PLOT_XMAX: u64 = 1000;
pub const PLOT_TT_LABEL: &str = "<b>Fragment Size (bp) {point.x}</b>: {point.y} Occurrence";

/// Separator used when root directories are prepended to sample names
pub const DIR_NAME_SEPARATOR: &str = " | ";

/// Name fragments truncated off raw sample names (first occurrence wins)
pub const DEFAULT_CLEAN_EXTENSIONS: &[&str] = &[
    ".gz",
    ".fastq",
    ".fq",
    ".bam",
    ".sam",
    ".cram",
    ".sra",
    ".sorted",
    "_sorted",
    ".dedup",
    ".deduplicated",
    ".markdup",
    ".aligned",
    ".merge",
    ".clean",
    ".log",
    ".txt",
    ".tsv",
    ".csv",
    ".out",
];
