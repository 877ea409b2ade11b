//! GitHub Actions workflow rules
//!
//! This module provides rules for checking GitHub Actions workflows, including:
//! - A `jobs` section (`gha.missingJobs`)
//! - Steps on every job (`gha.missingSteps`)
//! - Each step doing something via `uses` or `run` (`gha.stepNoUsesOrRun`)
//! - Actions pinned to a version tag (`gha.pinVersion`)
//! - A runner for every job (`gha.missingRunsOn`)
//! - Workflow triggers (`gha.missingOn`)

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Node;
use crate::rules::results::Issue;

lazy_static! {
    /// `@` followed by an optional `v` and one to three numeric components
    /// at the end of a `uses` reference
    static ref PINNED_VERSION: Regex =
        Regex::new(r"@v?[0-9]+(\.[0-9]+)?(\.[0-9]+)?$").expect("valid version regex");
}

/// Whether an action reference ends in a version tag such as `@v4` or `@1.2.3`
pub fn is_pinned(uses: &str) -> bool {
    PINNED_VERSION.is_match(uses)
}

pub fn check(root: &Node) -> Vec<Issue> {
    let mut issues = Vec::new();

    match root.get("jobs") {
        Some(jobs) if jobs.is_truthy() && jobs.is_object() => {
            for (job_name, job) in jobs.entries() {
                check_job(&job_name, job, &mut issues);
            }
        }
        _ => issues.push(Issue::error("gha.missingJobs", "Missing \"jobs\" field")),
    }

    if !root.truthy("on") {
        issues.push(Issue::info("gha.missingOn", "Missing \"on\" field (triggers)"));
    }

    issues
}

fn check_job(job_name: &str, job: &Node, issues: &mut Vec<Issue>) {
    if !job.is_truthy() || !job.is_object() {
        return;
    }

    let steps = match job.get("steps") {
        Some(steps) if steps.is_truthy() => steps,
        _ => {
            issues.push(Issue::warn(
                "gha.missingSteps",
                format!("Job \"{}\" without \"steps\"", job_name),
            ));
            return;
        }
    };

    if let Some(steps) = steps.as_sequence() {
        for (index, step) in steps.iter().enumerate() {
            let position = index + 1;

            if !step.truthy("uses") && !step.truthy("run") {
                issues.push(Issue::warn(
                    "gha.stepNoUsesOrRun",
                    format!(
                        "Job \"{}\", step {}: use \"uses\" or \"run\"",
                        job_name, position
                    ),
                ));
            }

            if let Some(uses) = step.get("uses").and_then(Node::as_str) {
                if !uses.is_empty() && !is_pinned(uses) {
                    issues.push(Issue::info(
                        "gha.pinVersion",
                        format!(
                            "Job \"{}\", step {}: pin version (e.g. @v4)",
                            job_name, position
                        ),
                    ));
                }
            }
        }
    }

    if !job.truthy("runs-on") {
        issues.push(Issue::warn(
            "gha.missingRunsOn",
            format!("Job \"{}\" without \"runs-on\"", job_name),
        ));
    }
}
