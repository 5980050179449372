//! End-to-end tests for the create-shiny-react binary
//!
//! Every test drives the real binary against a seeded templates root inside
//! a temp directory, using flags to answer what the prompts would ask.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BASIC_MANIFEST: &str = r#"{
  "name": "shiny-react-basic",
  "version": "0.1.0",
  "description": "Minimal Shiny-React starter",
  "license": "MIT",
  "scripts": {"build": "echo template-build"},
  "dependencies": {"react": "^19.0.0"}
}"#;

const BACKENDS: &str = r#"{
  "r": {"scripts": {"build": "echo r-build", "clean": "rm -rf r/www"}},
  "py": {"scripts": {"build": "echo py-build", "clean": "rm -rf py/www"}},
  "both": {"scripts": {"build": "echo both-build"}}
}"#;

/// A seeded templates root plus an empty working directory to create into
struct TestEnv {
    _tmp: TempDir,
    templates: PathBuf,
    work: PathBuf,
}

impl TestEnv {
    fn new() -> TestEnv {
        let tmp = TempDir::new().unwrap();
        let templates = tmp.path().join("templates");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).unwrap();

        seed_file(&templates, "1-basic/package.json", BASIC_MANIFEST);
        seed_file(&templates, "1-basic/backends.json", BACKENDS);
        seed_file(&templates, "1-basic/srcts/main.tsx", "export {};\n");
        seed_file(&templates, "1-basic/r/app.R", "library(shiny)\n");
        seed_file(&templates, "1-basic/py/app.py", "from shiny import App\n");
        seed_file(&templates, "1-basic/py/requirements.txt", "shiny\n");
        // artifacts that must never be copied
        seed_file(&templates, "1-basic/node_modules/react/index.js", "x");
        seed_file(&templates, "1-basic/r/www/main.js", "bundled");
        seed_file(&templates, "1-basic/py/www/main.js", "bundled");

        seed_file(
            &templates,
            "2-scaffold/package.json",
            r#"{"name": "shiny-react-scaffold", "description": "Larger starter"}"#,
        );
        seed_file(&templates, "2-scaffold/srcts/main.tsx", "export {};\n");

        seed_file(
            &templates,
            "AGENTS.md",
            "# {{PROJECT_NAME}}\n\nBackend: {{BACKEND}}\nSee {{PROJECT_NAME}}/srcts.\n",
        );

        TestEnv {
            _tmp: tmp,
            templates,
            work,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-shiny-react").unwrap();
        cmd.current_dir(&self.work)
            .env_remove("SHINY_REACT_TEMPLATES_DIR")
            .arg("--template-dir")
            .arg(&self.templates);
        cmd
    }

    fn target(&self, name: &str) -> PathBuf {
        self.work.join(name)
    }
}

fn seed_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

fn manifest_of(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap()
}

#[test]
fn creates_python_project_from_template() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "1-basic", "--backend", "py", "--yes"])
        .assert()
        .success();

    let demo = env.target("demo");
    assert!(demo.join("py/app.py").is_file());
    assert!(demo.join("srcts/main.tsx").is_file());
    assert!(!demo.join("r").exists());
    assert!(!demo.join("node_modules").exists());
    assert!(!demo.join("py/www").exists());

    let manifest = manifest_of(&demo);
    assert_eq!(manifest["name"], "demo");
    // side-file entry applied, then consumed
    assert_eq!(manifest["scripts"]["build"], "echo py-build");
    assert!(!demo.join("backends.json").exists());
}

#[test]
fn both_backends_keep_both_trees() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "1-basic", "--backend", "both", "--yes"])
        .assert()
        .success();

    let demo = env.target("demo");
    assert!(demo.join("r/app.R").is_file());
    assert!(demo.join("py/app.py").is_file());
    assert_eq!(manifest_of(&demo)["scripts"]["build"], "echo both-build");
}

#[test]
fn existing_target_fails_without_touching_it() {
    let env = TestEnv::new();
    let demo = env.target("demo");
    fs::create_dir_all(&demo).unwrap();
    fs::write(demo.join("precious.txt"), "keep me").unwrap();

    env.cmd()
        .args(["demo", "--template", "1-basic", "--backend", "py", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(demo.join("precious.txt")).unwrap(),
        "keep me"
    );
    assert!(!demo.join("package.json").exists());
}

#[test]
fn missing_templates_root_is_fatal() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("create-shiny-react")
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("SHINY_REACT_TEMPLATES_DIR")
        .args(["--template-dir"])
        .arg(tmp.path().join("nope"))
        .args(["demo", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("templates directory not found"));

    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn missing_argument_prints_usage() {
    let env = TestEnv::new();

    env.cmd()
        .arg("--yes")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: create-shiny-react <app-directory>",
        ));
}

#[test]
fn unknown_template_lists_available_ones() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "9-nope", "--backend", "r", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1-basic, 2-scaffold"));
}

#[test]
fn unknown_backend_is_fatal() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "1-basic", "--backend", "node", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown backend"));

    assert!(!env.target("demo").exists());
}

#[test]
fn docs_flag_injects_rendered_docs() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "demo", "--template", "1-basic", "--backend", "r", "--docs", "--yes",
        ])
        .assert()
        .success();

    let agents = fs::read_to_string(env.target("demo").join("AGENTS.md")).unwrap();
    assert!(agents.contains("# demo"));
    assert!(agents.contains("Backend: R"));
    assert!(agents.contains("demo/srcts"));
    assert!(!agents.contains("{{PROJECT_NAME}}"));
}

#[test]
fn without_docs_flag_yes_mode_skips_docs() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "1-basic", "--backend", "r", "--yes"])
        .assert()
        .success();

    assert!(!env.target("demo").join("AGENTS.md").exists());
}

#[test]
fn template_without_side_file_gets_builtin_scripts() {
    let env = TestEnv::new();

    env.cmd()
        .args(["demo", "--template", "2-scaffold", "--backend", "py", "--yes"])
        .assert()
        .success();

    let manifest = manifest_of(&env.target("demo"));
    assert!(manifest["scripts"]["build"]
        .as_str()
        .unwrap()
        .contains("py/www"));
}

#[test]
fn list_prints_discovered_templates() {
    let env = TestEnv::new();

    let mut cmd = Command::cargo_bin("create-shiny-react").unwrap();
    cmd.current_dir(&env.work)
        .env_remove("SHINY_REACT_TEMPLATES_DIR")
        .arg("list")
        .arg("--template-dir")
        .arg(&env.templates)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Basic")
                .and(predicate::str::contains("Scaffold"))
                .and(predicate::str::contains("Minimal Shiny-React starter")),
        );
}

#[test]
fn relative_path_argument_creates_nested_target() {
    let env = TestEnv::new();
    fs::create_dir_all(env.work.join("apps")).unwrap();

    env.cmd()
        .args([
            "apps/demo", "--template", "1-basic", "--backend", "r", "--yes",
        ])
        .assert()
        .success();

    let demo = env.target("apps/demo");
    assert!(demo.join("r/app.R").is_file());
    // the project name is the final path component, not the whole path
    assert_eq!(manifest_of(&demo)["name"], "demo");
}
