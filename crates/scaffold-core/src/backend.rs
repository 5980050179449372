//! Backend and package-manager selection model
//!
//! The backend set is fixed, not discovered from disk: each variant maps to
//! the backend directories retained in the generated project.

use std::fmt;

/// Server-side runtime target for the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    R,
    Py,
    Both,
}

impl Backend {
    /// Prompt ordering; the first entry is the default
    pub const ALL: [Backend; 3] = [Backend::R, Backend::Py, Backend::Both];

    /// Stable id used in flags and as the key into the backends.json side-file
    pub fn id(&self) -> &'static str {
        match self {
            Backend::R => "r",
            Backend::Py => "py",
            Backend::Both => "both",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::R => "R",
            Backend::Py => "Python",
            Backend::Both => "R + Python",
        }
    }

    /// Hint column shown next to the prompt item
    pub fn hint(&self) -> &'static str {
        match self {
            Backend::R => "Shiny for R server",
            Backend::Py => "Shiny for Python server",
            Backend::Both => "Both backends side by side",
        }
    }

    /// Parse a --backend flag value
    pub fn parse(s: &str) -> Option<Backend> {
        match s.to_ascii_lowercase().as_str() {
            "r" => Some(Backend::R),
            "py" | "python" => Some(Backend::Py),
            "both" => Some(Backend::Both),
            _ => None,
        }
    }

    pub fn includes_r(&self) -> bool {
        matches!(self, Backend::R | Backend::Both)
    }

    pub fn includes_python(&self) -> bool {
        matches!(self, Backend::Py | Backend::Both)
    }

    /// Backend directories left out of the copy. The selected backend's
    /// directory is never in this set.
    pub fn skip_dirs(&self) -> &'static [&'static str] {
        match self {
            Backend::R => &["py"],
            Backend::Py => &["r"],
            Backend::Both => &[],
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Python dependency tooling; only asked about when the backend includes Python
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pip,
    Uv,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [PackageManager::Pip, PackageManager::Uv];

    pub fn id(&self) -> &'static str {
        match self {
            PackageManager::Pip => "pip",
            PackageManager::Uv => "uv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Pip => "pip",
            PackageManager::Uv => "uv",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            PackageManager::Pip => "pip with a venv virtual environment",
            PackageManager::Uv => "uv environment and installer",
        }
    }

    /// Parse a --package-manager flag value
    pub fn parse(s: &str) -> Option<PackageManager> {
        match s.to_ascii_lowercase().as_str() {
            "pip" => Some(PackageManager::Pip),
            "uv" => Some(PackageManager::Uv),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
