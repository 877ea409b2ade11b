//! File type detection

use crate::document::Node;
use crate::rules::results::FileType;

/// Path segment that marks a GitHub Actions workflow
const WORKFLOWS_DIR: &str = ".github/workflows/";

/// Classify a parsed document.
///
/// `path` is the forward-slash relative path of the file. The path check wins
/// over content, then a `services` key selects Docker Compose, then
/// `apiVersion` + `kind` select Kubernetes. Anything else, including every
/// non-mapping root, is generic.
pub fn detect_type(path: &str, root: &Node) -> FileType {
    if path.to_lowercase().contains(WORKFLOWS_DIR) {
        return FileType::GithubActions;
    }

    if root.has_key("services") {
        return FileType::DockerCompose;
    }

    if root.has_key("apiVersion") && root.has_key("kind") {
        return FileType::Kubernetes;
    }

    FileType::Generic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;

    #[test]
    fn test_workflow_path_wins() {
        let doc = parse("services: {}\n").unwrap();
        assert_eq!(
            detect_type(".github/workflows/ci.yml", &doc),
            FileType::GithubActions
        );
        assert_eq!(
            detect_type("sub/.GitHub/Workflows/ci.yml", &Node::Null),
            FileType::GithubActions
        );
    }

    #[test]
    fn test_services_precedes_kubernetes() {
        let doc = parse("apiVersion: v1\nkind: Pod\nservices: {}\n").unwrap();
        assert_eq!(detect_type("x.yml", &doc), FileType::DockerCompose);
    }

    #[test]
    fn test_kubernetes() {
        let doc = parse("apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\n").unwrap();
        assert_eq!(detect_type("pod.yaml", &doc), FileType::Kubernetes);
    }

    #[test]
    fn test_kind_alone_is_generic() {
        let doc = parse("kind: Pod\n").unwrap();
        assert_eq!(detect_type("pod.yaml", &doc), FileType::Generic);
    }

    #[test]
    fn test_non_mapping_roots_are_generic() {
        for text in ["- services\n- apiVersion\n", "just a string", "42", ""] {
            let doc = parse(text).unwrap();
            assert_eq!(detect_type("x.yml", &doc), FileType::Generic, "{text:?}");
        }
    }

    #[test]
    fn test_workflows_without_trailing_slash_is_not_matched() {
        let doc = parse("a: 1\n").unwrap();
        assert_eq!(detect_type(".github/workflows.yml", &doc), FileType::Generic);
    }
}
