//! Tool availability checking.
//!
//! A group check never fails fast: every program in the group is looked
//! up, and whatever is missing is reported together in one warning,
//! followed by one remediation hint naming the provider package.

use std::collections::HashSet;

use serde::Serialize;

use crate::diagnostics::DiagnosticSink;
use crate::tools::path::ExecutableResolver;
use crate::tools::registry::ToolGroup;

/// Name of the pipeline the tools are required for.
pub const PIPELINE_NAME: &str = "Rp-Bp";

/// Outcome of checking one tool group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    /// Group that was checked.
    pub group: String,
    /// Package the group's programs come from.
    pub provider: String,
    /// Programs that did not resolve, in input order.
    pub missing: Vec<String>,
}

impl GroupReport {
    /// Whether every program in the group was found.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Warning text listing missing programs.
pub fn missing_programs_message(missing: &[String]) -> String {
    format!("Missing programs: {}", missing.join(" "))
}

/// Warning text telling the operator which package to install.
pub fn remediation_message(provider: &str) -> String {
    format!(
        "Please install {} before using the {} pipeline.",
        provider, PIPELINE_NAME
    )
}

/// Checks required programs against an executable resolver.
pub struct ToolChecker<'a> {
    resolver: &'a dyn ExecutableResolver,
}

impl<'a> ToolChecker<'a> {
    /// Create a checker backed by `resolver`.
    pub fn new(resolver: &'a dyn ExecutableResolver) -> Self {
        Self { resolver }
    }

    /// Programs from `programs` that cannot be resolved.
    ///
    /// Duplicate names are looked up once.
    pub fn missing_programs<S: AsRef<str>>(&self, programs: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        programs
            .iter()
            .map(|p| AsRef::<str>::as_ref(p))
            .filter(|p| seen.insert(*p))
            .filter(|p| {
                let found = self.resolver.resolve(p);
                tracing::debug!("Resolved {} -> {:?}", p, found);
                found.is_none()
            })
            .map(str::to_string)
            .collect()
    }

    /// Check `programs` and report missing ones on `sink`.
    ///
    /// Emits nothing when all are present; otherwise exactly two warnings:
    /// the missing list, then the remediation hint. Returns the missing set.
    pub fn check<S: AsRef<str>>(
        &self,
        programs: &[S],
        provider: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<String> {
        let missing = self.missing_programs(programs);
        if !missing.is_empty() {
            sink.warning(&missing_programs_message(&missing));
            sink.warning(&remediation_message(provider));
        }
        missing
    }

    /// Check a single group.
    pub fn check_group(&self, group: &ToolGroup, sink: &mut dyn DiagnosticSink) -> GroupReport {
        let missing = self.check(&group.programs, &group.provider, sink);
        GroupReport {
            group: group.name.clone(),
            provider: group.provider.clone(),
            missing,
        }
    }

    /// Check every group in order. A deficient group never stops later ones.
    pub fn check_all(&self, groups: &[ToolGroup], sink: &mut dyn DiagnosticSink) -> Vec<GroupReport> {
        groups.iter().map(|g| self.check_group(g, sink)).collect()
    }

    /// Report missing programs without emitting diagnostics.
    pub fn inspect_group(&self, group: &ToolGroup) -> GroupReport {
        GroupReport {
            group: group.name.clone(),
            provider: group.provider.clone(),
            missing: self.missing_programs(&group.programs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, MockSink};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    /// Resolver that knows a fixed set of programs and counts lookups.
    struct FakeResolver {
        present: HashSet<&'static str>,
        lookups: RefCell<Vec<String>>,
    }

    impl FakeResolver {
        fn with(present: &[&'static str]) -> Self {
            Self {
                present: present.iter().copied().collect(),
                lookups: RefCell::new(Vec::new()),
            }
        }
    }

    impl ExecutableResolver for FakeResolver {
        fn resolve(&self, program: &str) -> Option<PathBuf> {
            self.lookups.borrow_mut().push(program.to_string());
            self.present
                .contains(program)
                .then(|| PathBuf::from("/usr/bin").join(program))
        }
    }

    #[test]
    fn satisfied_group_is_silent() {
        let resolver = FakeResolver::with(&["bowtie2", "bowtie2-build-s"]);
        let checker = ToolChecker::new(&resolver);
        let mut sink = MockSink::new();

        let group = ToolGroup::new("bowtie2", ["bowtie2", "bowtie2-build-s"], "bowtie2");
        let report = checker.check_group(&group, &mut sink);

        assert!(report.is_satisfied());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn missing_samtools_emits_list_then_hint() {
        let resolver = FakeResolver::with(&[]);
        let checker = ToolChecker::new(&resolver);
        let mut sink = MockSink::new();

        let group = ToolGroup::new("samtools", ["samtools"], "SAMtools");
        let report = checker.check_group(&group, &mut sink);

        assert_eq!(report.missing, vec!["samtools"]);
        assert_eq!(
            sink.records(),
            &[
                (Level::Warning, "Missing programs: samtools".to_string()),
                (
                    Level::Warning,
                    "Please install SAMtools before using the Rp-Bp pipeline.".to_string()
                ),
            ]
        );
    }

    #[test]
    fn all_missing_programs_reported_in_one_warning() {
        let resolver = FakeResolver::with(&["bedToBam"]);
        let checker = ToolChecker::new(&resolver);
        let mut sink = MockSink::new();

        let missing = checker.check(
            &["intersectBed", "bedToBam", "fastaFromBed"],
            "bedtools",
            &mut sink,
        );

        assert_eq!(missing, vec!["intersectBed", "fastaFromBed"]);
        assert_eq!(sink.warnings().len(), 2);
        assert_eq!(sink.warnings()[0], "Missing programs: intersectBed fastaFromBed");
    }

    #[test]
    fn groups_report_independently() {
        let resolver = FakeResolver::with(&["flexbar"]);
        let checker = ToolChecker::new(&resolver);
        let mut sink = MockSink::new();

        let groups = vec![
            ToolGroup::new("flexbar", ["flexbar"], "flexbar"),
            ToolGroup::new("gffread", ["gffread"], "cufflinks"),
        ];
        let reports = checker.check_all(&groups, &mut sink);

        assert!(reports[0].is_satisfied());
        assert_eq!(reports[1].missing, vec!["gffread"]);
        assert_eq!(sink.warnings().len(), 2);
        assert!(sink.warnings().iter().all(|w| !w.contains("flexbar")));
        assert!(sink.has_warning("gffread"));
        assert!(sink.has_warning("cufflinks"));
    }

    #[test]
    fn missing_set_is_order_insensitive() {
        let resolver = FakeResolver::with(&["bedToBam"]);
        let checker = ToolChecker::new(&resolver);

        let forward: BTreeSet<_> = checker
            .missing_programs(&["intersectBed", "bedToBam", "fastaFromBed"])
            .into_iter()
            .collect();
        let reversed: BTreeSet<_> = checker
            .missing_programs(&["fastaFromBed", "bedToBam", "intersectBed"])
            .into_iter()
            .collect();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn duplicate_names_checked_once() {
        let resolver = FakeResolver::with(&[]);
        let checker = ToolChecker::new(&resolver);

        let missing = checker.missing_programs(&["STAR", "STAR"]);

        assert_eq!(missing, vec!["STAR"]);
        assert_eq!(resolver.lookups.borrow().len(), 1);
    }

    #[test]
    fn empty_program_list_is_satisfied() {
        let resolver = FakeResolver::with(&[]);
        let checker = ToolChecker::new(&resolver);
        let mut sink = MockSink::new();

        let missing = checker.check::<&str>(&[], "nothing", &mut sink);

        assert!(missing.is_empty());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn inspect_group_emits_nothing() {
        let resolver = FakeResolver::with(&[]);
        let checker = ToolChecker::new(&resolver);

        let report = checker.inspect_group(&ToolGroup::new("STAR", ["STAR"], "STAR"));

        assert!(!report.is_satisfied());
        assert_eq!(report.missing, vec!["STAR"]);
    }
}
