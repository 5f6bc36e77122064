use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use percent_encoding::percent_decode_str;

/// Leading path segments that mark a home directory (`/Users/<name>`, `/home/<name>`)
const HOME_ROOTS: &[&str] = &["Users", "home"];

const ROOT_PROJECT_NAME: &str = "Root";

/// Decodes a project directory name back into its path text
///
/// Claude stores projects under names like `-Users-alice-demo` (separators
/// replaced by hyphens) or `-Users%2Falice%2Fdemo` (percent-encoded). The
/// leading hyphen is removed and percent escapes are decoded; hyphens are kept.
///
/// # Examples
///
/// ```
/// use ai_activity_digest::utils::paths::decode_dir_name;
///
/// assert_eq!(decode_dir_name("-Users%2Ffoo%2Fbar"), "Users/foo/bar");
/// assert_eq!(decode_dir_name("-Users-foo-bar"), "Users-foo-bar");
/// ```
pub fn decode_dir_name(encoded: &str) -> String {
    let without_prefix = encoded.strip_prefix('-').unwrap_or(encoded);
    percent_decode_str(without_prefix).decode_utf8_lossy().into_owned()
}

/// Builds a human label from a project directory name
///
/// Splits the decoded name on `-` and `/`, drops a leading home directory
/// (`Users/<name>` or `home/<name>`) and title-cases what remains. A project
/// at the home directory itself is labelled `Root`.
///
/// # Examples
///
/// ```
/// use ai_activity_digest::utils::paths::project_display_name;
///
/// assert_eq!(project_display_name("-Users-larry-demo-project"), "Demo Project");
/// assert_eq!(project_display_name("-Users-larry"), "Root");
/// ```
pub fn project_display_name(dir_name: &str) -> String {
    let decoded = decode_dir_name(dir_name);
    let segments: Vec<&str> =
        decoded.split(['-', '/']).map(str::trim).filter(|s| !s.is_empty()).collect();

    let skip = if segments.len() >= 2 && HOME_ROOTS.contains(&segments[0]) { 2 } else { 0 };
    let name = title_case(&segments[skip..].join(" "));
    if name.is_empty() { ROOT_PROJECT_NAME.to_string() } else { name }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}

/// Modification time of a file in local time
pub fn file_modified(path: &Path) -> Result<DateTime<Local>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    let modified = metadata
        .modified()
        .with_context(|| format!("Modification time unavailable: {}", path.display()))?;
    Ok(DateTime::<Local>::from(modified))
}

/// Whole days elapsed between `modified` and `now`, rounded toward zero
pub fn file_age_days(modified: DateTime<Local>, now: DateTime<Local>) -> i64 {
    now.signed_duration_since(modified).num_days()
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.display())
        };
    }
    path.display().to_string()
}
