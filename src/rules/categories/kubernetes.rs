//! Kubernetes manifest rules
//!
//! Top-level checks for `apiVersion`, `kind` and `metadata.name`, then four
//! checks per container found anywhere in the manifest:
//! - `k8s.image` - the container has an image
//! - `k8s.latestTag` - the image is not `:latest`
//! - `k8s.limits` - `resources.limits` is defined
//! - `k8s.probes` - a liveness or startup probe is defined

use crate::document::Node;
use crate::rules::containers::find_containers;
use crate::rules::results::Issue;

pub fn check(root: &Node) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !root.truthy("apiVersion") {
        issues.push(Issue::error("k8s.apiVersion", "Missing apiVersion"));
    }

    if !root.truthy("kind") {
        issues.push(Issue::error("k8s.kind", "Missing kind"));
    }

    let has_name = root
        .get("metadata")
        .filter(|m| m.is_truthy())
        .is_some_and(|m| m.truthy("name"));
    if !has_name {
        issues.push(Issue::error("k8s.metadata", "Missing metadata.name"));
    }

    for located in find_containers(root) {
        let container = &located.container;
        let path = &located.path;

        if !container.has_image() {
            issues.push(Issue::warn(
                "k8s.image",
                format!("{}: container without \"image\"", path),
            ));
        }

        if container.uses_latest_tag() {
            issues.push(Issue::warn(
                "k8s.latestTag",
                format!("{}: image uses \"latest\" tag", path),
            ));
        }

        if !container.has_limits() {
            issues.push(Issue::warn(
                "k8s.limits",
                format!("{}: define \"resources.limits\"", path),
            ));
        }

        if !container.has_probe() {
            issues.push(Issue::info(
                "k8s.probes",
                format!("{}: consider liveness/startup probes", path),
            ));
        }
    }

    issues
}
