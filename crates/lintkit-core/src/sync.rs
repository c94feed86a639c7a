//! Synchronization of declarative [`LintOptions`] into engine [`LintFlags`].
//!
//! This is a one-directional, field-by-field translation: id lists are
//! split into issue ids and categories, severity overrides are expanded to
//! per-issue entries, booleans are copied, and report writers are resolved
//! and opened.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::diagnostics::SyncResult;
use crate::flags::LintFlags;
use crate::options::LintOptions;
use crate::output::{STDERR, STDOUT, create_output_path, is_stderr, is_stdout, validate_output_file};
use crate::registry::IssueRegistry;
use crate::report::Reporter;
use crate::severity::{ConfiguredSeverity, Severity};

/// Invocation context for a sync: everything the build tool decides per
/// task rather than per options file.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Variant name appended to default report filenames
    pub variant: Option<String>,
    /// Root against which relative report paths resolve
    pub project_root: Option<PathBuf>,
    /// Directory for default report files; falls back to
    /// `<project_root>/reports`
    pub reports_dir: Option<PathBuf>,
    /// Whether report writers should be built at all
    pub report: bool,
}

impl Default for SyncContext {
    fn default() -> Self {
        Self {
            variant: None,
            project_root: None,
            reports_dir: None,
            report: true,
        }
    }
}

/// Sync the declarative options into the engine flags using the built-in
/// issue registry.
///
/// `flags.fatal_only` is read, not written: the invoker sets it before the
/// sync, and it changes which reporters are built and where they default to.
pub fn sync_options(
    options: &LintOptions,
    flags: &mut LintFlags,
    context: &SyncContext,
) -> SyncResult<()> {
    sync_options_with_registry(options, flags, context, &IssueRegistry::builtin())
}

/// Sync against a caller-supplied registry.
pub fn sync_options_with_registry(
    options: &LintOptions,
    flags: &mut LintFlags,
    context: &SyncContext,
    registry: &IssueRegistry,
) -> SyncResult<()> {
    for id in &options.disable {
        match Category::get(id) {
            // Disabling a whole category
            Some(category) => flags.add_disabled_category(category),
            None => {
                flags.suppressed_ids.insert(id.clone());
            }
        }
    }
    for id in &options.enable {
        match Category::get(id) {
            // Enabling a whole category
            Some(category) => flags.add_enabled_category(category),
            None => {
                flags.enabled_ids.insert(id.clone());
            }
        }
    }
    for id in &options.check {
        match Category::get(id) {
            // Checking a whole category
            Some(category) => flags.add_exact_category(category),
            None => {
                flags.exact_ids.insert(id.clone());
            }
        }
    }

    flags.set_exit_code = options.abort_on_error;
    flags.full_path = options.absolute_paths;
    flags.show_source_lines = !options.no_lines;
    flags.quiet = options.quiet;
    flags.check_all_warnings = options.check_all_warnings;
    flags.ignore_warnings = options.ignore_warnings;
    flags.warnings_as_errors = options.warnings_as_errors;
    flags.check_test_sources = options.check_test_sources;
    flags.ignore_test_sources = options.ignore_test_sources;
    flags.check_generated_sources = options.check_generated_sources;
    flags.check_dependencies = options.check_dependencies;
    flags.show_everything = options.show_all;
    flags.explain_issues = options.explain_issues;
    flags.include_xml_fixes = options.include_xml_fixes;
    flags.default_configuration = options.lint_config.clone();
    flags.baseline_file = options.baseline_file.clone();

    flags.severity_overrides = expand_severity_overrides(&options.severity_overrides, registry);

    if context.report || (flags.fatal_only && options.abort_on_error) {
        if options.text_report || flags.fatal_only {
            let output = match &options.text_output {
                None => PathBuf::from(if flags.fatal_only { STDERR } else { STDOUT }),
                Some(path) if is_stdout(path) || is_stderr(path) => path.clone(),
                Some(path) => resolve_against_root(path, context),
            };
            let output = validate_output_file(&output)?;
            flags.reporters.push(Reporter::text(&output)?);
        }

        if options.html_report {
            let output = match &options.html_output {
                Some(path) if !flags.fatal_only => resolve_against_root(path, context),
                _ => default_output_path(context, ".html", flags.fatal_only),
            };
            let output = validate_output_file(&output)?;
            flags.reporters.push(Reporter::html(&output)?);
        }

        if options.xml_report {
            let output = match &options.xml_output {
                Some(path) if !flags.fatal_only => resolve_against_root(path, context),
                _ => default_output_path(context, ".xml", flags.fatal_only),
            };
            let output = validate_output_file(&output)?;
            flags
                .reporters
                .push(Reporter::xml(&output, flags.include_xml_fixes)?);
        }
    }

    Ok(())
}

/// Expand id- and category-keyed overrides into a per-issue severity map.
///
/// A category key applies to every issue under that category, transitively
/// through subcategories, resolving `default-enabled` against each issue's
/// own default. An id unknown to the registry resolves to warning.
fn expand_severity_overrides(
    overrides: &BTreeMap<String, ConfiguredSeverity>,
    registry: &IssueRegistry,
) -> HashMap<String, Severity> {
    let mut map = HashMap::new();
    for (id, configured) in overrides {
        if let Some(category) = Category::get(id) {
            for issue in registry.issues_under(category) {
                map.insert(issue.id.to_string(), configured.resolve(issue.default_severity));
            }
        } else {
            let severity = registry
                .get(id)
                .map(|issue| configured.resolve(issue.default_severity))
                .unwrap_or(Severity::Warning);
            map.insert(id.clone(), severity);
        }
    }
    map
}

fn resolve_against_root(path: &Path, context: &SyncContext) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match &context.project_root {
        Some(root) => root.join(path),
        None => path.to_path_buf(),
    }
}

fn default_output_path(context: &SyncContext, extension: &str, fatal_only: bool) -> PathBuf {
    create_output_path(
        context.project_root.as_deref(),
        context.variant.as_deref(),
        extension,
        context.reports_dir.as_deref(),
        fatal_only,
    )
}
