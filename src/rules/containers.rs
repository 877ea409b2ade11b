//! Container lookup in Kubernetes manifests
//!
//! Pods, Deployments, Jobs, CronJobs and custom resources nest their
//! container lists at different depths, so the finder walks the whole
//! document instead of following known paths.

use crate::document::Node;

/// A container specification found in a manifest.
///
/// Fields are kept as raw nodes so rules can apply presence and truthiness
/// checks. A container that is not a mapping has every field absent.
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    pub image: Option<&'a Node>,
    pub resources: Option<&'a Node>,
    pub liveness_probe: Option<&'a Node>,
    pub startup_probe: Option<&'a Node>,
}

impl<'a> Container<'a> {
    pub fn from_node(node: &'a Node) -> Self {
        Self {
            image: node.get("image"),
            resources: node.get("resources"),
            liveness_probe: node.get("livenessProbe"),
            startup_probe: node.get("startupProbe"),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some_and(Node::is_truthy)
    }

    pub fn uses_latest_tag(&self) -> bool {
        self.image
            .and_then(Node::as_str)
            .is_some_and(|image| image.ends_with(":latest"))
    }

    /// `resources.limits` present and truthy
    pub fn has_limits(&self) -> bool {
        self.resources
            .filter(|r| r.is_truthy())
            .is_some_and(|r| r.truthy("limits"))
    }

    pub fn has_probe(&self) -> bool {
        self.liveness_probe.is_some_and(Node::is_truthy)
            || self.startup_probe.is_some_and(Node::is_truthy)
    }
}

/// A container together with its synthetic location,
/// e.g. `$.spec.template.spec.containers[0]`
#[derive(Debug, Clone)]
pub struct LocatedContainer<'a> {
    pub container: Container<'a>,
    pub path: String,
}

/// Find every element of every `containers` sequence in the document.
///
/// The walk is depth-first in key order. Finding a `containers` list does not
/// stop the descent: the list itself and all sibling fields are walked too.
/// Sequence elements reached by the walk use `.<index>` path segments.
pub fn find_containers(root: &Node) -> Vec<LocatedContainer<'_>> {
    let mut found = Vec::new();
    walk(root, "$", &mut found);
    found
}

fn walk<'a>(node: &'a Node, path: &str, found: &mut Vec<LocatedContainer<'a>>) {
    if !node.is_object() {
        return;
    }

    if let Some(containers) = node.get("containers").and_then(Node::as_sequence) {
        for (index, container) in containers.iter().enumerate() {
            found.push(LocatedContainer {
                container: Container::from_node(container),
                path: format!("{}.containers[{}]", path, index),
            });
        }
    }

    for (key, value) in node.entries() {
        walk(value, &format!("{}.{}", path, key), found);
    }
}
