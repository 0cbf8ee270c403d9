//! Required external tool groups.
//!
//! Each group names the programs the pipeline shells out to and the
//! package that provides them. Groups are checked in table order so
//! diagnostics come out the same on every run.

/// Built-in groups: (group name, programs, provider package).
const BUILTIN_GROUPS: &[(&str, &[&str], &str)] = &[
    ("flexbar", &["flexbar"], "flexbar"),
    ("STAR", &["STAR"], "STAR"),
    ("bowtie2", &["bowtie2", "bowtie2-build-s"], "bowtie2"),
    (
        "bedtools",
        &["intersectBed", "bedToBam", "fastaFromBed"],
        "bedtools",
    ),
    ("samtools", &["samtools"], "SAMtools"),
    ("gffread", &["gffread"], "cufflinks"),
];

/// A named set of required executables and the package providing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolGroup {
    /// Group name (e.g., "bedtools").
    pub name: String,
    /// Executable names that must resolve on the search path.
    pub programs: Vec<String>,
    /// Package named in remediation hints (e.g., "SAMtools").
    pub provider: String,
}

impl ToolGroup {
    /// Create a group.
    pub fn new<I, S>(name: impl Into<String>, programs: I, provider: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            programs: programs.into_iter().map(Into::into).collect(),
            provider: provider.into(),
        }
    }
}

/// The pipeline's required tool groups, in check order.
pub fn builtin_tool_groups() -> Vec<ToolGroup> {
    BUILTIN_GROUPS
        .iter()
        .map(|(name, programs, provider)| ToolGroup::new(*name, programs.iter().copied(), *provider))
        .collect()
}
