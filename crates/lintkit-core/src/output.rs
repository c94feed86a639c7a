//! Report output path resolution and validation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::{SyncError, SyncResult};

/// Sentinel path routing a report to standard output.
pub const STDOUT: &str = "stdout";
/// Sentinel path routing a report to standard error.
pub const STDERR: &str = "stderr";

/// Whether the path is the stdout sentinel.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT
}

/// Whether the path is the stderr sentinel.
pub fn is_stderr(path: &Path) -> bool {
    path.as_os_str() == STDERR
}

/// Build the default report path: `lint-results[-<variant>][-fatal].<ext>`.
///
/// The file lands in `reports_dir` when one is configured, otherwise under
/// `<project_root>/reports`, otherwise it stays a bare relative filename.
pub fn create_output_path(
    project_root: Option<&Path>,
    variant: Option<&str>,
    extension: &str,
    reports_dir: Option<&Path>,
    fatal_only: bool,
) -> PathBuf {
    let mut base = String::from("lint-results");
    if let Some(variant) = variant.filter(|v| !v.trim().is_empty()) {
        base.push('-');
        base.push_str(variant);
    }
    if fatal_only {
        base.push_str("-fatal");
    }
    base.push_str(extension);

    match (reports_dir, project_root) {
        (Some(dir), _) => dir.join(base),
        (None, Some(root)) => root.join("reports").join(base),
        (None, None) => PathBuf::from(base),
    }
}

/// Prepare an output path for writing.
///
/// Sentinel paths pass through untouched. For real paths: missing parent
/// directories are created, the path is absolutized, a stale file at the
/// target is deleted, and a read-only parent directory is rejected.
pub fn validate_output_file(path: &Path) -> SyncResult<PathBuf> {
    if is_stdout(path) || is_stderr(path) {
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| SyncError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let output = absolutize(path);

    if output.exists() {
        fs::remove_file(&output).map_err(|source| SyncError::DeleteFile {
            path: output.clone(),
            source,
        })?;
    }

    if let Some(parent) = output.parent() {
        if is_read_only(parent) {
            return Err(SyncError::DirNotWritable {
                path: parent.to_path_buf(),
            });
        }
    }

    Ok(output)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn is_read_only(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| m.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_detection() {
        assert!(is_stdout(Path::new("stdout")));
        assert!(is_stderr(Path::new("stderr")));
        assert!(!is_stdout(Path::new("stdout.html")));
        assert!(!is_stdout(Path::new("reports/stdout")));
        assert!(!is_stderr(Path::new("stdout")));
    }

    #[test]
    fn test_default_output_path_plain() {
        let path = create_output_path(None, None, ".html", None, false);
        assert_eq!(path, PathBuf::from("lint-results.html"));
    }

    #[test]
    fn test_default_output_path_with_variant() {
        let path = create_output_path(None, Some("debug"), ".xml", None, false);
        assert_eq!(path, PathBuf::from("lint-results-debug.xml"));
    }

    #[test]
    fn test_default_output_path_fatal() {
        let path = create_output_path(None, None, ".html", None, true);
        assert_eq!(path, PathBuf::from("lint-results-fatal.html"));
    }

    #[test]
    fn test_default_output_path_variant_and_fatal() {
        let path = create_output_path(None, Some("release"), ".xml", None, true);
        assert_eq!(path, PathBuf::from("lint-results-release-fatal.xml"));
    }

    #[test]
    fn test_blank_variant_is_skipped() {
        let path = create_output_path(None, Some("  "), ".html", None, false);
        assert_eq!(path, PathBuf::from("lint-results.html"));
    }

    #[test]
    fn test_output_path_prefers_reports_dir() {
        let path = create_output_path(
            Some(Path::new("/project")),
            None,
            ".html",
            Some(Path::new("/custom/reports")),
            false,
        );
        assert_eq!(path, PathBuf::from("/custom/reports/lint-results.html"));
    }

    #[test]
    fn test_output_path_falls_back_to_project_reports() {
        let path = create_output_path(Some(Path::new("/project")), None, ".xml", None, false);
        assert_eq!(path, PathBuf::from("/project/reports/lint-results.xml"));
    }

    #[test]
    fn test_validate_sentinels_bypass_filesystem() {
        // Must not touch the filesystem or absolutize
        assert_eq!(
            validate_output_file(Path::new("stdout")).unwrap(),
            PathBuf::from("stdout")
        );
        assert_eq!(
            validate_output_file(Path::new("stderr")).unwrap(),
            PathBuf::from("stderr")
        );
    }

    #[test]
    fn test_validate_creates_missing_parent() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("lint-results.html");

        let validated = validate_output_file(&target).unwrap();

        assert!(target.parent().unwrap().is_dir());
        assert_eq!(validated, target);
    }

    #[test]
    fn test_validate_deletes_stale_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("lint-results.xml");
        fs::write(&target, "old contents").unwrap();

        let validated = validate_output_file(&target).unwrap();

        assert!(!target.exists());
        assert_eq!(validated, target);
    }

    #[test]
    fn test_validate_absolutizes_relative_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp.path()).unwrap();

        let validated = validate_output_file(Path::new("out.html"));

        std::env::set_current_dir(previous).unwrap();
        assert!(validated.unwrap().is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_rejects_read_only_parent() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("ro");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let result = validate_output_file(&dir.join("lint-results.html"));

        // Restore so TempDir can clean up
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(SyncError::DirNotWritable { .. })));
    }
}
