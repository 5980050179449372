//! Advisory runtime detection for generated projects
//!
//! The generated app needs Node.js for its build scripts and whichever
//! backend runtime(s) the user selected. Detection is advisory: results are
//! reported after selection, but a missing runtime never fails the run -
//! generation itself only touches the local filesystem.

use crate::backend::Backend;
use std::process::Command;

/// Probe result for one runtime
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let version = stdout.lines().next().unwrap_or("").trim().to_string();
            RuntimeInfo {
                name,
                version: (!version.is_empty()).then_some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if Rscript is available
pub fn check_r() -> RuntimeInfo {
    probe("R", "Rscript")
}

/// Check if Python 3 is available
pub fn check_python() -> RuntimeInfo {
    probe("Python 3", "python3")
}

/// Detect the runtimes the generated project will want. Node.js is always
/// probed since npm drives the build scripts.
pub fn check_runtimes(backend: Backend) -> Vec<RuntimeInfo> {
    let mut results = vec![check_node()];
    if backend.includes_r() {
        results.push(check_r());
    }
    if backend.includes_python() {
        results.push(check_python());
    }
    results
}
