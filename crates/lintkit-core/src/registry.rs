//! Built-in issue registry.
//!
//! The registry is the lookup table the sync layer resolves ids against:
//! severity overrides need an issue's default severity, and category-level
//! settings need to enumerate the issues under a category.

use crate::category::Category;
use crate::severity::Severity;

/// A registered lint issue.
#[derive(Debug, PartialEq, Eq)]
pub struct Issue {
    /// Unique CamelCase identifier (e.g. `HardcodedSecret`)
    pub id: &'static str,
    /// One-line summary shown in explanations
    pub summary: &'static str,
    /// Simple name of the owning category
    pub category: &'static str,
    /// Severity applied when no override is configured
    pub default_severity: Severity,
    /// Whether the engine runs this issue without explicit enablement
    pub enabled_by_default: bool,
}

impl Issue {
    /// Resolve the owning category against the category registry.
    pub fn category(&self) -> Option<&'static Category> {
        Category::get(self.category)
    }
}

/// The built-in issue table.
///
/// Kept sorted by category, then id, for readable diffs when issues are
/// added.
static BUILTIN_ISSUES: &[Issue] = &[
    // Correctness
    Issue {
        id: "DeadCode",
        summary: "Code that can never execute",
        category: "Correctness",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    Issue {
        id: "DuplicateKey",
        summary: "Duplicate key in a configuration map",
        category: "Correctness",
        default_severity: Severity::Error,
        enabled_by_default: true,
    },
    Issue {
        id: "InvalidFormatString",
        summary: "Malformed placeholder in a format string",
        category: "Correctness",
        default_severity: Severity::Error,
        enabled_by_default: true,
    },
    Issue {
        id: "SyntaxError",
        summary: "File could not be parsed",
        category: "Correctness",
        default_severity: Severity::Fatal,
        enabled_by_default: true,
    },
    // Security
    Issue {
        id: "HardcodedSecret",
        summary: "Credential committed to source",
        category: "Security",
        default_severity: Severity::Fatal,
        enabled_by_default: true,
    },
    Issue {
        id: "InsecureProtocol",
        summary: "Plain-text protocol where an encrypted one exists",
        category: "Security",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    Issue {
        id: "WorldWritableFile",
        summary: "File created with world-writable permissions",
        category: "Security",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    // Performance
    Issue {
        id: "LargeAsset",
        summary: "Bundled asset exceeds the size threshold",
        category: "Performance",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    Issue {
        id: "RedundantAllocation",
        summary: "Allocation that could be hoisted or reused",
        category: "Performance",
        default_severity: Severity::Informational,
        enabled_by_default: true,
    },
    // Style / Naming
    Issue {
        id: "InconsistentNaming",
        summary: "Identifier does not follow the project naming scheme",
        category: "Naming",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    // Style / Formatting
    Issue {
        id: "LongLine",
        summary: "Line exceeds the configured width",
        category: "Formatting",
        default_severity: Severity::Informational,
        enabled_by_default: false,
    },
    Issue {
        id: "TrailingWhitespace",
        summary: "Trailing whitespace at end of line",
        category: "Formatting",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    // Documentation
    Issue {
        id: "BrokenLink",
        summary: "Documentation link target does not exist",
        category: "Documentation",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    Issue {
        id: "MissingDocs",
        summary: "Public item without documentation",
        category: "Documentation",
        default_severity: Severity::Informational,
        enabled_by_default: false,
    },
    // Portability
    Issue {
        id: "ByteOrderMark",
        summary: "UTF-8 byte order mark at start of file",
        category: "Portability",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    Issue {
        id: "NonPortablePath",
        summary: "Path separator or casing that breaks on other platforms",
        category: "Portability",
        default_severity: Severity::Warning,
        enabled_by_default: true,
    },
    // Internationalization
    Issue {
        id: "HardcodedText",
        summary: "User-visible string not routed through message catalogs",
        category: "Internationalization",
        default_severity: Severity::Warning,
        enabled_by_default: false,
    },
    Issue {
        id: "BidiSpoofing",
        summary: "Bidirectional control characters that disguise code",
        category: "BidiText",
        default_severity: Severity::Error,
        enabled_by_default: true,
    },
];

/// Lookup over a set of registered issues.
///
/// `IssueRegistry::builtin()` wraps the built-in table; tests may wrap a
/// custom slice.
#[derive(Debug, Clone, Copy)]
pub struct IssueRegistry {
    issues: &'static [Issue],
}

impl IssueRegistry {
    /// Registry over the built-in issue table.
    pub fn builtin() -> Self {
        Self {
            issues: BUILTIN_ISSUES,
        }
    }

    /// Registry over a caller-supplied table.
    pub fn with_issues(issues: &'static [Issue]) -> Self {
        Self { issues }
    }

    /// Look up an issue by id.
    pub fn get(&self, id: &str) -> Option<&'static Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// All issues in this registry.
    pub fn issues(&self) -> &'static [Issue] {
        self.issues
    }

    /// Issues whose category is `category` or sits beneath it.
    pub fn issues_under<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'static Issue> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.category().is_some_and(|c| c.is_under(category)))
    }
}

impl Default for IssueRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
