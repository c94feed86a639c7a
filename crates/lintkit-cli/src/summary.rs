//! Human- and machine-readable summaries of resolved flags.

use std::collections::BTreeMap;

use colored::Colorize;
use lintkit_core::LintFlags;
use serde::Serialize;

/// A reporter entry in the resolved summary.
#[derive(Debug, Serialize)]
pub struct ReporterSummary {
    pub format: String,
    pub output: String,
}

/// Serializable view of resolved [`LintFlags`].
#[derive(Debug, Serialize)]
pub struct ResolvedSummary {
    pub suppressed_ids: Vec<String>,
    pub enabled_ids: Vec<String>,
    pub exact_ids: Vec<String>,
    pub disabled_categories: Vec<String>,
    pub enabled_categories: Vec<String>,
    pub exact_categories: Vec<String>,
    pub severity_overrides: BTreeMap<String, String>,
    pub set_exit_code: bool,
    pub warnings_as_errors: bool,
    pub fatal_only: bool,
    pub reporters: Vec<ReporterSummary>,
}

impl ResolvedSummary {
    pub fn from_flags(flags: &LintFlags) -> Self {
        Self {
            suppressed_ids: flags.suppressed_ids.iter().cloned().collect(),
            enabled_ids: flags.enabled_ids.iter().cloned().collect(),
            exact_ids: flags.exact_ids.iter().cloned().collect(),
            disabled_categories: flags
                .disabled_categories()
                .iter()
                .map(|c| c.full_name())
                .collect(),
            enabled_categories: flags
                .enabled_categories()
                .iter()
                .map(|c| c.full_name())
                .collect(),
            exact_categories: flags
                .exact_categories()
                .iter()
                .map(|c| c.full_name())
                .collect(),
            severity_overrides: flags
                .severity_overrides
                .iter()
                .map(|(id, severity)| (id.clone(), severity.to_string()))
                .collect(),
            set_exit_code: flags.set_exit_code,
            warnings_as_errors: flags.warnings_as_errors,
            fatal_only: flags.fatal_only,
            reporters: flags
                .reporters
                .iter()
                .map(|r| ReporterSummary {
                    format: r.format().label().to_string(),
                    output: r.describe_output(),
                })
                .collect(),
        }
    }

    /// Print the colored text rendering to stdout.
    pub fn print(&self) {
        print_list("Disabled issues:", &self.suppressed_ids);
        print_list("Disabled categories:", &self.disabled_categories);
        print_list("Enabled issues:", &self.enabled_ids);
        print_list("Enabled categories:", &self.enabled_categories);
        print_list("Checked issues:", &self.exact_ids);
        print_list("Checked categories:", &self.exact_categories);

        if !self.severity_overrides.is_empty() {
            println!("{}", "Severity overrides:".bold());
            for (id, severity) in &self.severity_overrides {
                println!("  {} -> {}", id, severity.yellow());
            }
        }

        println!(
            "{} abort_on_error={} warnings_as_errors={} fatal_only={}",
            "Flags:".bold(),
            self.set_exit_code,
            self.warnings_as_errors,
            self.fatal_only
        );

        if self.reporters.is_empty() {
            println!("{} none", "Reporters:".bold());
        } else {
            println!("{}", "Reporters:".bold());
            for reporter in &self.reporters {
                println!("  {} -> {}", reporter.format.green(), reporter.output);
            }
        }
    }
}

fn print_list(label: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!("{} {}", label.bold(), entries.join(", "));
}
