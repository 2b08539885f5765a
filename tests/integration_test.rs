/// Integration tests for the application layer
mod test_utilities;

use sbom_collect::application::use_cases::{
    FULL_LIST_FILE, UNDEFINED_LICENSES_FILE, UNIQUE_LICENSES_FILE,
};
use sbom_collect::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

fn component(name: &str, version: &str, licenses: Option<&[&str]>) -> ComponentRecord {
    ComponentRecord::new(
        name.to_string(),
        None,
        version.to_string(),
        format!("{}@{}", name, version),
        None,
        licenses.map(|l| l.iter().map(|s| s.to_string()).collect()),
    )
}

/// Creates `<root>/<rel>/package.json` and returns its path
fn manifest(root: &Path, rel: &str) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("package.json");
    fs::write(&path, "{}").unwrap();
    path
}

fn catalog() -> LicenseCatalog {
    BundledLicenseRepository::new().load_catalog().unwrap()
}

#[tokio::test]
async fn test_nested_node_modules_manifest_is_skipped() {
    let temp = TempDir::new().unwrap();
    let app = manifest(temp.path(), "a");
    let vendored = manifest(temp.path(), "a/node_modules/b");

    let generator = MockBomGenerator::new()
        .with_components(app.clone(), vec![component("react", "18.2.0", Some(&["MIT"]))])
        .with_components(vendored, vec![component("should-not-appear", "1.0.0", None)]);
    let reporter = MockProgressReporter::new();

    let use_case = CollectComponentsUseCase::new(FileSystemWalker::new(), generator, &reporter);
    let request = ScanRequest::builder()
        .root(temp.path().to_path_buf())
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.manifests_found, 1);
    assert_eq!(response.components.len(), 1);
    assert_eq!(response.components[0].name(), "react");
    assert!(reporter.contains("Skipping excluded directory"));
    assert!(!reporter.contains("should-not-appear"));
}

#[tokio::test]
async fn test_bruno_directory_is_skipped() {
    let temp = TempDir::new().unwrap();
    let app = manifest(temp.path(), "service");
    manifest(temp.path(), "bruno/collection");

    let generator = MockBomGenerator::new()
        .with_components(app, vec![component("express", "4.18.2", Some(&["MIT"]))]);

    let use_case = CollectComponentsUseCase::new(
        FileSystemWalker::new(),
        generator,
        MockProgressReporter::new(),
    );
    let request = ScanRequest::builder()
        .root(temp.path().to_path_buf())
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.manifests_found, 1);
    assert!(response.failed_manifests.is_empty());
}

#[tokio::test]
async fn test_failing_manifest_is_isolated() {
    let temp = TempDir::new().unwrap();
    let good = manifest(temp.path(), "good");
    let broken = manifest(temp.path(), "broken");

    let generator = MockBomGenerator::new().with_components(
        good,
        vec![
            component("lodash", "4.17.21", Some(&["MIT"])),
            component("tslib", "2.6.2", Some(&["0BSD"])),
        ],
    );
    let reporter = MockProgressReporter::new();

    let use_case = CollectComponentsUseCase::new(FileSystemWalker::new(), generator, &reporter);
    let request = ScanRequest::builder()
        .root(temp.path().to_path_buf())
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.manifests_found, 2);
    assert_eq!(response.components.len(), 2);
    assert_eq!(response.failed_manifests, vec![broken.clone()]);

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(&broken.display().to_string()));
}

#[tokio::test]
async fn test_components_follow_sorted_discovery_order() {
    let temp = TempDir::new().unwrap();
    let root_manifest = manifest(temp.path(), "");
    let b = manifest(temp.path(), "b");
    let a = manifest(temp.path(), "a");

    let generator = MockBomGenerator::new()
        .with_components(root_manifest, vec![component("root-dep", "1.0.0", None)])
        .with_components(a, vec![component("a-dep", "1.0.0", None)])
        .with_components(b, vec![component("b-dep", "1.0.0", None)]);

    let use_case = CollectComponentsUseCase::new(
        FileSystemWalker::new(),
        generator,
        MockProgressReporter::new(),
    );
    let request = ScanRequest::builder()
        .root(temp.path().to_path_buf())
        .max_concurrent_generators(3)
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    let names: Vec<&str> = response.components.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["root-dep", "a-dep", "b-dep"]);
}

#[tokio::test]
async fn test_full_pipeline_reports() {
    let temp = TempDir::new().unwrap();
    let web = manifest(temp.path(), "apps/web");
    let api = manifest(temp.path(), "apps/api");

    let generator = MockBomGenerator::new()
        .with_components(
            web,
            vec![
                component("react", "18.2.0", Some(&["MIT"])),
                component("mystery", "0.0.1", None),
            ],
        )
        .with_components(
            api,
            vec![
                component("express", "4.18.2", Some(&["MIT"])),
                component("inhouse", "2.0.0", Some(&["Custom Corp License"])),
            ],
        );
    let reporter = MockProgressReporter::new();

    let collect = CollectComponentsUseCase::new(FileSystemWalker::new(), generator, &reporter);
    let request = ScanRequest::builder()
        .root(temp.path().to_path_buf())
        .build()
        .unwrap();
    let response = collect.execute(request).await.unwrap();
    assert_eq!(response.components.len(), 4);

    let writer = MockReportWriter::new();
    let publish = PublishReportsUseCase::new(writer.clone(), &reporter);
    let written = publish.execute(&response.components, &catalog()).unwrap();
    assert_eq!(written.len(), 3);

    let full = writer.get(FULL_LIST_FILE).unwrap();
    assert!(full.starts_with("OSS LIST\n"));
    assert_eq!(full.matches("Name: ").count(), 4);
    assert!(full.contains("Name: mystery\n"));
    assert!(full.contains("Licenses: No licenses found\n"));

    // MIT from both manifests is listed and explained once
    let unique = writer.get(UNIQUE_LICENSES_FILE).unwrap();
    assert!(unique.starts_with("- MIT\n- Custom Corp License\n"));
    assert_eq!(unique.matches("- MIT\n").count(), 1);
    assert_eq!(unique.matches("MIT License").count(), 1);
    assert!(!unique.contains("Custom Corp License\n\n"));
    assert!(reporter.contains("License for Custom Corp License not found"));

    let undefined = writer.get(UNDEFINED_LICENSES_FILE).unwrap();
    assert!(undefined.starts_with("UNDEF PACKAGES LIST\n"));
    assert!(undefined.contains("Name: mystery\n"));
    assert_eq!(undefined.matches("Name: ").count(), 1);
}

/// Runs both use cases against real directories and returns the two
/// always-written reports
async fn collect_and_publish(project: &Path, app: &Path, out: &Path) -> (String, String) {
    let generator = MockBomGenerator::new().with_components(
        app.to_path_buf(),
        vec![
            component("chalk", "5.3.0", Some(&["MIT"])),
            component("debug", "4.3.4", Some(&["MIT"])),
        ],
    );
    let collect = CollectComponentsUseCase::new(
        FileSystemWalker::new(),
        generator,
        MockProgressReporter::new(),
    );
    let request = ScanRequest::builder()
        .root(project.to_path_buf())
        .build()
        .unwrap();
    let response = collect.execute(request).await.unwrap();

    PublishReportsUseCase::new(
        FileSystemWriter::new(out.to_path_buf()),
        MockProgressReporter::new(),
    )
    .execute(&response.components, &catalog())
    .unwrap();

    (
        fs::read_to_string(out.join(FULL_LIST_FILE)).unwrap(),
        fs::read_to_string(out.join(UNIQUE_LICENSES_FILE)).unwrap(),
    )
}

#[tokio::test]
async fn test_reports_written_to_output_dir_and_idempotent() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    let app = manifest(&project, "app");

    let first = collect_and_publish(&project, &app, &out).await;
    let second = collect_and_publish(&project, &app, &out).await;

    assert_eq!(first, second);
    assert!(first.0.contains("Name: chalk\n"));
    assert_eq!(first.1.matches("- MIT\n").count(), 1);
    assert!(!out.join(UNDEFINED_LICENSES_FILE).exists());
}
