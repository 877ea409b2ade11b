//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const COMPOSE: &str = "\
services:
  web:
    image: nginx:latest
  worker:
    build: .
    restart: always
";

pub const DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: api
spec:
  template:
    spec:
      containers:
        - name: api
          image: api:1.2.3
          resources:
            limits:
              cpu: \"1\"
          livenessProbe:
            httpGet:
              path: /health
              port: 8080
";

pub const WORKFLOW: &str = "\
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@main
      - run: cargo test
";

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small project with one file of each type plus an ignored directory.
///
/// Expected result: 4 files, 0 errors, 1 warning, 2 info, score 94.
pub fn create_sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "docker-compose.yml", COMPOSE);
    write(root, "k8s/deploy.yaml", DEPLOYMENT);
    write(root, ".github/workflows/ci.yml", WORKFLOW);
    write(root, "notes.yaml", "title: hello\n");
    write(root, "node_modules/pkg/broken.yml", "a: [\n");
    write(root, "README.md", "# sample\n");

    temp_dir
}
