//! Engine-facing lint flags.
//!
//! [`LintFlags`] is the internal state the lint execution engine consumes.
//! It is populated from declarative [`LintOptions`](crate::LintOptions) by
//! [`sync_options`](crate::sync_options): enable/disable/check id sets,
//! category sets, fully expanded per-issue severity overrides, plain boolean
//! switches, and the constructed reporters.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::category::Category;
use crate::registry::Issue;
use crate::report::Reporter;
use crate::severity::Severity;

/// Flags and state consumed by the lint execution engine.
#[derive(Debug)]
pub struct LintFlags {
    /// Issue ids explicitly disabled
    pub suppressed_ids: BTreeSet<String>,
    /// Issue ids explicitly enabled on top of the defaults
    pub enabled_ids: BTreeSet<String>,
    /// When non-empty, *only* these ids (plus exact categories) run
    pub exact_ids: BTreeSet<String>,

    disabled_categories: Vec<&'static Category>,
    enabled_categories: Vec<&'static Category>,
    exact_categories: Vec<&'static Category>,

    /// Per-issue severity overrides, already expanded from category keys
    pub severity_overrides: HashMap<String, Severity>,

    /// Fail the build when errors are found
    pub set_exit_code: bool,
    /// Print absolute paths in reports
    pub full_path: bool,
    /// Include offending source lines in reports
    pub show_source_lines: bool,
    pub quiet: bool,
    pub check_all_warnings: bool,
    pub ignore_warnings: bool,
    pub warnings_as_errors: bool,
    pub check_test_sources: bool,
    pub ignore_test_sources: bool,
    pub check_generated_sources: bool,
    pub check_dependencies: bool,
    /// Show all findings, including ones suppressed inline
    pub show_everything: bool,
    pub explain_issues: bool,
    /// Only fatal findings are synced and reported
    pub fatal_only: bool,
    /// Embed fix descriptions in XML reports
    pub include_xml_fixes: bool,

    /// Extra engine configuration file passed through from the options
    pub default_configuration: Option<PathBuf>,
    pub baseline_file: Option<PathBuf>,

    pub reporters: Vec<Reporter>,
}

impl Default for LintFlags {
    fn default() -> Self {
        Self {
            suppressed_ids: BTreeSet::new(),
            enabled_ids: BTreeSet::new(),
            exact_ids: BTreeSet::new(),
            disabled_categories: Vec::new(),
            enabled_categories: Vec::new(),
            exact_categories: Vec::new(),
            severity_overrides: HashMap::new(),
            set_exit_code: false,
            full_path: false,
            show_source_lines: true,
            quiet: false,
            check_all_warnings: false,
            ignore_warnings: false,
            warnings_as_errors: false,
            check_test_sources: false,
            ignore_test_sources: false,
            check_generated_sources: false,
            check_dependencies: false,
            show_everything: false,
            explain_issues: true,
            fatal_only: false,
            include_xml_fixes: false,
            default_configuration: None,
            baseline_file: None,
            reporters: Vec::new(),
        }
    }
}

impl LintFlags {
    /// Disable a whole category (deduplicated).
    pub fn add_disabled_category(&mut self, category: &'static Category) {
        if !self.disabled_categories.contains(&category) {
            self.disabled_categories.push(category);
        }
    }

    /// Enable a whole category (deduplicated).
    pub fn add_enabled_category(&mut self, category: &'static Category) {
        if !self.enabled_categories.contains(&category) {
            self.enabled_categories.push(category);
        }
    }

    /// Restrict checking to a whole category (deduplicated).
    pub fn add_exact_category(&mut self, category: &'static Category) {
        if !self.exact_categories.contains(&category) {
            self.exact_categories.push(category);
        }
    }

    pub fn disabled_categories(&self) -> &[&'static Category] {
        &self.disabled_categories
    }

    pub fn enabled_categories(&self) -> &[&'static Category] {
        &self.enabled_categories
    }

    pub fn exact_categories(&self) -> &[&'static Category] {
        &self.exact_categories
    }

    /// Whether the issue is suppressed, either by id or because its
    /// category sits under any disabled category.
    pub fn is_issue_suppressed(&self, issue: &Issue) -> bool {
        if self.suppressed_ids.contains(issue.id) {
            return true;
        }
        match issue.category() {
            Some(category) => self
                .disabled_categories
                .iter()
                .any(|disabled| category.is_under(disabled)),
            None => false,
        }
    }

    /// Whether the issue is explicitly enabled, either by id or because its
    /// category sits under any enabled category.
    pub fn is_issue_explicitly_enabled(&self, issue: &Issue) -> bool {
        if self.enabled_ids.contains(issue.id) {
            return true;
        }
        match issue.category() {
            Some(category) => self
                .enabled_categories
                .iter()
                .any(|enabled| category.is_under(enabled)),
            None => false,
        }
    }

    /// Severity the engine should use for an issue: the override when one
    /// was synced, the issue default otherwise.
    pub fn severity_for(&self, issue: &Issue) -> Severity {
        self.severity_overrides
            .get(issue.id)
            .copied()
            .unwrap_or(issue.default_severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::IssueRegistry;

    #[test]
    fn test_default_flags() {
        let flags = LintFlags::default();
        assert!(flags.show_source_lines);
        assert!(flags.explain_issues);
        assert!(!flags.set_exit_code);
        assert!(flags.reporters.is_empty());
        assert!(flags.severity_overrides.is_empty());
    }

    #[test]
    fn test_category_dedup() {
        let mut flags = LintFlags::default();
        let security = Category::get("Security").unwrap();
        flags.add_disabled_category(security);
        flags.add_disabled_category(security);
        assert_eq!(flags.disabled_categories().len(), 1);
    }

    #[test]
    fn test_suppressed_by_id() {
        let registry = IssueRegistry::builtin();
        let mut flags = LintFlags::default();
        flags.suppressed_ids.insert("DeadCode".to_string());

        assert!(flags.is_issue_suppressed(registry.get("DeadCode").unwrap()));
        assert!(!flags.is_issue_suppressed(registry.get("DuplicateKey").unwrap()));
    }

    #[test]
    fn test_suppressed_by_category_covers_subcategories() {
        let registry = IssueRegistry::builtin();
        let mut flags = LintFlags::default();
        flags.add_disabled_category(Category::get("Style").unwrap());

        // Naming and Formatting sit under Style
        assert!(flags.is_issue_suppressed(registry.get("InconsistentNaming").unwrap()));
        assert!(flags.is_issue_suppressed(registry.get("TrailingWhitespace").unwrap()));
        assert!(!flags.is_issue_suppressed(registry.get("HardcodedSecret").unwrap()));
    }

    #[test]
    fn test_enabled_by_category_covers_subcategories() {
        let registry = IssueRegistry::builtin();
        let mut flags = LintFlags::default();
        flags.add_enabled_category(Category::get("Internationalization").unwrap());

        assert!(flags.is_issue_explicitly_enabled(registry.get("HardcodedText").unwrap()));
        assert!(flags.is_issue_explicitly_enabled(registry.get("BidiSpoofing").unwrap()));
        assert!(!flags.is_issue_explicitly_enabled(registry.get("LongLine").unwrap()));
    }

    #[test]
    fn test_severity_for_uses_override_then_default() {
        let registry = IssueRegistry::builtin();
        let mut flags = LintFlags::default();
        flags
            .severity_overrides
            .insert("DeadCode".to_string(), Severity::Error);

        assert_eq!(
            flags.severity_for(registry.get("DeadCode").unwrap()),
            Severity::Error
        );
        assert_eq!(
            flags.severity_for(registry.get("LargeAsset").unwrap()),
            Severity::Warning
        );
    }
}
