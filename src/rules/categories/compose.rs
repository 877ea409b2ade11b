//! Docker Compose rules
//!
//! Checks every service of a Compose file for:
//! - An `image` or a `build` section (`compose.imageOrBuild`)
//! - Images pinned to something other than `:latest` (`compose.latestTag`)
//! - A `restart` policy (`compose.restart`)
//!
//! A file without a `services` object only gets `compose.missingServices`.

use crate::document::Node;
use crate::rules::results::Issue;

pub fn check(root: &Node) -> Vec<Issue> {
    let mut issues = Vec::new();

    let services = match root.get("services") {
        Some(services) if services.is_truthy() && services.is_object() => services,
        _ => {
            issues.push(Issue::error(
                "compose.missingServices",
                "Missing \"services\" field",
            ));
            return issues;
        }
    };

    for (name, service) in services.entries() {
        if !service.is_truthy() || !service.is_object() {
            continue;
        }

        let image = service.get("image").and_then(Node::as_str);

        if image.is_none() && !service.truthy("build") {
            issues.push(Issue::warn(
                "compose.imageOrBuild",
                format!("Service \"{}\" without \"image\" or \"build\"", name),
            ));
        }

        if image.is_some_and(|image| image.ends_with(":latest")) {
            issues.push(Issue::warn(
                "compose.latestTag",
                format!(
                    "Service \"{}\" uses \"latest\" tag (non-deterministic)",
                    name
                ),
            ));
        }

        if !service.truthy("restart") {
            issues.push(Issue::info(
                "compose.restart",
                format!("Service \"{}\" without \"restart\" policy", name),
            ));
        }
    }

    issues
}
