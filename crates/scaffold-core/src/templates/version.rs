//! Template / CLI version compatibility

use semver::Version;

/// Warn when a template declares a newer version than the running CLI.
///
/// Returns `None` when the CLI is new enough, and also when either version
/// string fails to parse - an unparseable version disables the check rather
/// than blocking generation.
pub fn upgrade_warning(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_loose(cli_version)?;
    let template = parse_loose(template_version)?;

    if cli < template {
        Some(format!(
            "Template expects CLI {} or newer (you have {}). Update with: {}",
            template_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Accepts a leading `v` (`v1.2.0`) since template authors write both forms
fn parse_loose(version: &str) -> Option<Version> {
    Version::parse(version.strip_prefix('v').unwrap_or(version)).ok()
}
