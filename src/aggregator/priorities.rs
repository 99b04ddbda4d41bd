//! Priority rules
//!
//! Each rule looks at the analyzer results and emits at most one entry.
//! Rules run in a fixed order and the result is sorted with [`compare`]:
//! priority rank descending, then count descending. The sort is stable, so
//! equal entries keep the order their rules emitted them in.

use crate::models::{AnalyzerResult, Priority, PriorityEntry};
use serde::Deserialize;
use std::cmp::Ordering;

pub const HIGH_PRIORITY_VIOLATIONS: &str = "High-priority code violations";
pub const INLINE_ASSET_TEMPLATES: &str = "Templates with inline CSS/JS";
pub const LINT_ERRORS: &str = "Lint errors";

/// Opt-in rules beyond the always-on violations rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PriorityRules {
    /// Emit a medium entry for high-priority templates
    #[serde(default)]
    pub templates: bool,

    /// Emit a low entry for lint errors
    #[serde(default)]
    pub errors: bool,
}

struct RuleInput<'a> {
    violations: &'a AnalyzerResult,
    templates: &'a AnalyzerResult,
    errors: &'a AnalyzerResult,
}

type Rule = fn(&RuleInput<'_>) -> Option<PriorityEntry>;

fn violations_rule(input: &RuleInput<'_>) -> Option<PriorityEntry> {
    entry(
        HIGH_PRIORITY_VIOLATIONS,
        Priority::High,
        input.violations.high_priority(),
    )
}

fn templates_rule(input: &RuleInput<'_>) -> Option<PriorityEntry> {
    entry(
        INLINE_ASSET_TEMPLATES,
        Priority::Medium,
        input.templates.high_priority(),
    )
}

fn errors_rule(input: &RuleInput<'_>) -> Option<PriorityEntry> {
    entry(
        LINT_ERRORS,
        Priority::Low,
        input.errors.metadata_count("total_errors"),
    )
}

fn entry(title: &str, priority: Priority, count: u64) -> Option<PriorityEntry> {
    (count > 0).then(|| PriorityEntry {
        title: title.to_string(),
        priority,
        count,
    })
}

/// Run the enabled rules and return the sorted priority list
pub fn build_priorities(
    rules: &PriorityRules,
    violations: &AnalyzerResult,
    templates: &AnalyzerResult,
    errors: &AnalyzerResult,
) -> Vec<PriorityEntry> {
    let mut active: Vec<Rule> = vec![violations_rule];
    if rules.templates {
        active.push(templates_rule);
    }
    if rules.errors {
        active.push(errors_rule);
    }

    let input = RuleInput {
        violations,
        templates,
        errors,
    };
    let mut entries: Vec<PriorityEntry> = active.iter().filter_map(|rule| rule(&input)).collect();
    sort_priorities(&mut entries);
    entries
}

/// Most urgent first: higher rank, then larger count
pub fn compare(a: &PriorityEntry, b: &PriorityEntry) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.count.cmp(&a.count))
}

/// Stable sort by [`compare`]
pub fn sort_priorities(entries: &mut [PriorityEntry]) {
    entries.sort_by(compare);
}
