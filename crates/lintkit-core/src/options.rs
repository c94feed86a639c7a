//! Declarative lint options.
//!
//! [`LintOptions`] is what a user writes in a `lintkit.toml`: which issues
//! and categories to enable, disable, or restrict checking to, severity
//! overrides, plain boolean switches, and which report formats to produce
//! where. The sync layer translates it into [`LintFlags`](crate::LintFlags).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::registry::IssueRegistry;
use crate::severity::ConfiguredSeverity;

/// Declarative configuration for the linter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LintOptions {
    /// Issue ids or category names to enable on top of the defaults
    #[schemars(description = "Issue ids or category names to enable on top of the defaults")]
    pub enable: Vec<String>,

    /// Issue ids or category names to disable
    #[schemars(description = "Issue ids or category names to disable")]
    pub disable: Vec<String>,

    /// When non-empty, restrict checking to exactly these ids/categories
    #[schemars(
        description = "When non-empty, restrict checking to exactly these issue ids or category names"
    )]
    pub check: Vec<String>,

    /// Severity overrides keyed by issue id or category name
    #[schemars(
        description = "Severity overrides keyed by issue id or category name (e.g. { HardcodedSecret = \"fatal\" })"
    )]
    pub severity_overrides: BTreeMap<String, ConfiguredSeverity>,

    /// Fail the build when errors are found
    #[schemars(description = "Fail the build when errors are found")]
    pub abort_on_error: bool,

    /// Print absolute paths in reports
    #[schemars(description = "Print absolute paths in reports")]
    pub absolute_paths: bool,

    /// Omit offending source lines from reports
    #[schemars(description = "Omit offending source lines from reports")]
    pub no_lines: bool,

    /// Only print fatal findings to the console
    #[schemars(description = "Only print fatal findings to the console")]
    pub quiet: bool,

    /// Check all warnings, including ones off by default
    #[schemars(description = "Check all warnings, including ones off by default")]
    pub check_all_warnings: bool,

    /// Drop all warnings, reporting only errors
    #[schemars(description = "Drop all warnings, reporting only errors")]
    pub ignore_warnings: bool,

    /// Treat every warning as an error
    #[schemars(description = "Treat every warning as an error")]
    pub warnings_as_errors: bool,

    #[schemars(description = "Also lint test sources")]
    pub check_test_sources: bool,

    #[schemars(description = "Skip test sources entirely")]
    pub ignore_test_sources: bool,

    #[schemars(description = "Also lint generated sources")]
    pub check_generated_sources: bool,

    #[schemars(description = "Also lint dependencies of the target")]
    pub check_dependencies: bool,

    /// Show all findings, including ones suppressed inline
    #[schemars(description = "Show all findings, including ones suppressed inline")]
    pub show_all: bool,

    /// Include issue explanations in report output
    #[schemars(description = "Include issue explanations in report output")]
    pub explain_issues: bool,

    /// Embed fix descriptions in XML reports
    #[schemars(description = "Embed fix descriptions in XML reports")]
    pub include_xml_fixes: bool,

    /// Extra engine configuration file forwarded to the engine
    #[schemars(description = "Extra engine configuration file forwarded to the engine")]
    pub lint_config: Option<PathBuf>,

    /// Baseline file of known findings to subtract from new runs
    #[schemars(description = "Baseline file of known findings to subtract from new runs")]
    pub baseline_file: Option<PathBuf>,

    /// Produce a plain-text report
    #[schemars(description = "Produce a plain-text report")]
    pub text_report: bool,

    /// Text report target: a path, or the sentinels `stdout`/`stderr`
    #[schemars(
        description = "Text report target: a file path, or the sentinels \"stdout\"/\"stderr\""
    )]
    pub text_output: Option<PathBuf>,

    /// Produce an HTML report
    #[schemars(description = "Produce an HTML report")]
    pub html_report: bool,

    /// HTML report path; relative paths resolve against the project root
    #[schemars(description = "HTML report path; relative paths resolve against the project root")]
    pub html_output: Option<PathBuf>,

    /// Produce an XML report
    #[schemars(description = "Produce an XML report")]
    pub xml_report: bool,

    /// XML report path; relative paths resolve against the project root
    #[schemars(description = "XML report path; relative paths resolve against the project root")]
    pub xml_output: Option<PathBuf>,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            enable: Vec::new(),
            disable: Vec::new(),
            check: Vec::new(),
            severity_overrides: BTreeMap::new(),
            abort_on_error: true,
            absolute_paths: true,
            no_lines: false,
            quiet: false,
            check_all_warnings: false,
            ignore_warnings: false,
            warnings_as_errors: false,
            check_test_sources: false,
            ignore_test_sources: false,
            check_generated_sources: false,
            check_dependencies: false,
            show_all: false,
            explain_issues: true,
            include_xml_fixes: false,
            lint_config: None,
            baseline_file: None,
            text_report: false,
            text_output: None,
            html_report: true,
            html_output: None,
            xml_report: true,
            xml_output: None,
        }
    }
}

impl LintOptions {
    /// Load options from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let options = toml::from_str(&content)?;
        Ok(options)
    }

    /// Load options or use defaults, returning any load warning.
    ///
    /// If a path is provided but the file cannot be read or parsed, the
    /// defaults are returned together with a warning message describing the
    /// error. This prevents silent fallback to defaults on config typos.
    pub fn load_or_default(path: Option<&PathBuf>) -> (Self, Option<String>) {
        match path {
            Some(p) => match Self::load(p) {
                Ok(options) => (options, None),
                Err(e) => {
                    let warning = format!(
                        "failed to load options from {}: {}; using defaults",
                        p.display(),
                        e
                    );
                    (Self::default(), Some(warning))
                }
            },
            None => (Self::default(), None),
        }
    }

    /// Validate the options and return any warnings.
    ///
    /// Semantic checks beyond what TOML parsing can do:
    /// - ids in enable/disable/check that are neither known issues nor
    ///   categories
    /// - severity-override targets unknown to the registry (these still
    ///   sync, defaulting to warning)
    /// - an explicit output path whose report toggle is off
    pub fn validate(&self) -> Vec<OptionsWarning> {
        let registry = IssueRegistry::builtin();
        let mut warnings = Vec::new();

        let id_lists: [(&str, &[String]); 3] = [
            ("enable", &self.enable),
            ("disable", &self.disable),
            ("check", &self.check),
        ];
        for (field, ids) in id_lists {
            for id in ids {
                if Category::get(id).is_none() && registry.get(id).is_none() {
                    warnings.push(OptionsWarning {
                        field: field.to_string(),
                        message: format!("'{}' is not a known issue id or category", id),
                        suggestion: Some(
                            "check the spelling against `lintkit schema` or the issue list"
                                .to_string(),
                        ),
                    });
                }
            }
        }

        for id in self.severity_overrides.keys() {
            if Category::get(id).is_none() && registry.get(id).is_none() {
                warnings.push(OptionsWarning {
                    field: "severity_overrides".to_string(),
                    message: format!(
                        "'{}' is not a known issue id or category; the override will sync as a plain warning",
                        id
                    ),
                    suggestion: None,
                });
            }
        }

        if self.text_output.is_some() && !self.text_report {
            warnings.push(OptionsWarning {
                field: "text_output".to_string(),
                message: "text_output is set but text_report is disabled".to_string(),
                suggestion: Some("set text_report = true".to_string()),
            });
        }
        if self.html_output.is_some() && !self.html_report {
            warnings.push(OptionsWarning {
                field: "html_output".to_string(),
                message: "html_output is set but html_report is disabled".to_string(),
                suggestion: Some("set html_report = true".to_string()),
            });
        }
        if self.xml_output.is_some() && !self.xml_report {
            warnings.push(OptionsWarning {
                field: "xml_output".to_string(),
                message: "xml_output is set but xml_report is disabled".to_string(),
                suggestion: Some("set xml_report = true".to_string()),
            });
        }

        warnings
    }
}

/// Warning from options validation.
///
/// These do not prevent syncing but usually indicate a user mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsWarning {
    /// The field that has the issue (e.g. `severity_overrides`)
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

/// Generate a JSON Schema for [`LintOptions`].
///
/// Used to provide editor autocompletion and validation for `lintkit.toml`
/// files.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(LintOptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = LintOptions::default();
        assert!(options.abort_on_error);
        assert!(options.absolute_paths);
        assert!(options.explain_issues);
        assert!(options.html_report);
        assert!(options.xml_report);
        assert!(!options.text_report);
        assert!(options.enable.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let options: LintOptions = toml::from_str(
            r#"
disable = ["DeadCode", "Style"]
warnings_as_errors = true

[severity_overrides]
HardcodedText = "error"
"#,
        )
        .unwrap();

        assert_eq!(options.disable, vec!["DeadCode", "Style"]);
        assert!(options.warnings_as_errors);
        assert_eq!(
            options.severity_overrides.get("HardcodedText"),
            Some(&ConfiguredSeverity::Error)
        );
        // Untouched fields keep their defaults
        assert!(options.abort_on_error);
        assert!(options.html_report);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let (options, warning) = LintOptions::load_or_default(None);
        assert!(warning.is_none());
        assert!(options.abort_on_error);
    }

    #[test]
    fn test_load_or_default_missing_file_warns() {
        let path = PathBuf::from("/nonexistent/lintkit.toml");
        let (options, warning) = LintOptions::load_or_default(Some(&path));
        assert!(warning.unwrap().contains("/nonexistent/lintkit.toml"));
        assert!(options.abort_on_error);
    }

    #[test]
    fn test_load_or_default_bad_toml_warns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"disable = not-a-list").unwrap();
        file.flush().unwrap();

        let path = file.path().to_path_buf();
        let (_, warning) = LintOptions::load_or_default(Some(&path));
        assert!(warning.is_some());
    }

    #[test]
    fn test_load_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
enable = ["MissingDocs"]
text_report = true
text_output = "stdout"
"#,
        )
        .unwrap();
        file.flush().unwrap();

        let options = LintOptions::load(file.path()).unwrap();
        assert_eq!(options.enable, vec!["MissingDocs"]);
        assert!(options.text_report);
        assert_eq!(options.text_output, Some(PathBuf::from("stdout")));
    }

    #[test]
    fn test_validate_clean_options() {
        assert!(LintOptions::default().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_unknown_ids() {
        let mut options = LintOptions::default();
        options.disable = vec!["DeadCode".to_string(), "NotAnIssue".to_string()];
        options.enable = vec!["Security".to_string()];

        let warnings = options.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "disable");
        assert!(warnings[0].message.contains("NotAnIssue"));
    }

    #[test]
    fn test_validate_flags_unknown_override_target() {
        let mut options = LintOptions::default();
        options
            .severity_overrides
            .insert("Bogus".to_string(), ConfiguredSeverity::Fatal);

        let warnings = options.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "severity_overrides");
    }

    #[test]
    fn test_validate_flags_orphan_output_path() {
        let mut options = LintOptions::default();
        options.text_output = Some(PathBuf::from("out.txt"));

        let warnings = options.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "text_output");
    }

    #[test]
    fn test_schema_mentions_fields() {
        let schema = generate_schema();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("severity_overrides"));
        assert!(json.contains("xml_report"));
    }
}
