//! Scanner e2e tests
//!
//! Fixtures: tests/fixtures/projects/

mod fixtures;

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use techrules::manifest::{ManifestDependency, ManifestKind};
use techrules::matcher::RuleIndex;
use techrules::registry::{self, Registry};
use techrules::scanner::{ScanReport, Scanner};
use techrules::types::Ecosystem;

use fixtures::fixture_path;

fn scan(path: &std::path::Path) -> ScanReport {
    let index = RuleIndex::build(registry::bundled()).unwrap();
    Scanner::new(&index).scan(path).unwrap()
}

// =============================================================================
// grid project
// =============================================================================

#[test]
fn test_grid_detected_techs() {
    let report = scan(&fixture_path(&["projects", "grid"]));

    assert_eq!(
        report.detected(),
        vec!["docker", "nodejs", "postgresql", "selenium", "typescript"]
    );
    assert_eq!(report.files_scanned, 3);
}

#[test]
fn test_grid_selenium_reasons() {
    let report = scan(&fixture_path(&["projects", "grid"]));

    assert_eq!(
        report.techs["selenium"],
        vec![
            "matched: selenium-webdriver",
            "matched: selenium/hub",
            "matched: selenium/node-chrome",
        ]
    );
    assert_eq!(report.techs["postgresql"], vec!["matched: pg", "matched: postgres"]);
    assert_eq!(report.techs["docker"], vec!["matched file: docker-compose.yml"]);
}

#[test]
fn test_grid_typescript_from_dependency_not_extension() {
    let report = scan(&fixture_path(&["projects", "grid"]));
    assert_eq!(report.techs["typescript"], vec!["matched: typescript"]);
}

#[test]
fn test_grid_manifests() {
    let report = scan(&fixture_path(&["projects", "grid"]));
    assert_eq!(report.manifests.len(), 2);

    let compose = &report.manifests[0];
    assert_eq!(compose.kind, ManifestKind::DockerCompose);
    assert_eq!(compose.path, "docker-compose.yml");
    assert_eq!(
        compose.dependencies,
        vec![
            ManifestDependency::new(Ecosystem::Docker, "selenium/node-chrome", "4.0"),
            ManifestDependency::new(Ecosystem::Docker, "postgres", "15"),
            ManifestDependency::new(Ecosystem::Docker, "selenium/hub", "4.0"),
        ]
    );

    let package = &report.manifests[1];
    assert_eq!(package.kind, ManifestKind::PackageJson);
    assert_eq!(package.path, "e2e/package.json");
    assert_eq!(package.name.as_deref(), Some("grid-e2e"));
    assert_eq!(package.dependencies.len(), 3);
}

// =============================================================================
// generated projects
// =============================================================================

#[test]
fn test_compose_with_selenium_hub() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("docker-compose.yml"),
        "services:\n  hub:\n    image: selenium/hub:4.0\n",
    )
    .unwrap();

    let report = scan(dir.path());
    assert_eq!(report.detected(), vec!["docker", "selenium"]);
    assert_eq!(report.techs["selenium"], vec!["matched: selenium/hub"]);
}

#[test]
fn test_rust_project_with_thirtyfour() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        r#"
[package]
name = "crawler"
version = "0.1.0"

[dependencies]
thirtyfour = "0.32"
tokio = { version = "1", features = ["full"] }
"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src").join("main.rs"), "fn main() {}").unwrap();

    let report = scan(dir.path());

    assert_eq!(report.detected(), vec!["rust", "selenium"]);
    assert_eq!(report.techs["selenium"], vec!["matched: thirtyfour"]);
    assert_eq!(report.techs["rust"], vec!["matched file: Cargo.toml"]);
    assert_eq!(report.manifests[0].name.as_deref(), Some("crawler"));
}

#[test]
fn test_user_rules_applied_to_scan() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Jenkinsfile"), "pipeline {}").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"devDependencies": {"cypress": "13.0.0"}}"#,
    )
    .unwrap();

    let mut registry = Registry::with_bundled().unwrap();
    registry
        .load_rules_file(fixture_path(&["rules", "extra.yaml"]))
        .unwrap();
    let index = RuleIndex::build(&registry).unwrap();
    let report = Scanner::new(&index).scan(dir.path()).unwrap();

    assert_eq!(report.detected(), vec!["cypress", "jenkins", "nodejs"]);
    assert_eq!(report.techs["jenkins"], vec!["matched file: Jenkinsfile"]);
}

#[test]
fn test_scan_report_json() {
    let report = scan(&fixture_path(&["projects", "grid"]));
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["files_scanned"], 3);
    assert_eq!(value["techs"]["docker"][0], "matched file: docker-compose.yml");
    assert_eq!(value["manifests"][0]["kind"], "docker-compose");
    assert_eq!(value["manifests"][0]["dependencies"][0]["type"], "docker");
}
