//! Severity levels for lint findings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a lint finding, ordered from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[schemars(description = "Severity of a lint finding")]
pub enum Severity {
    /// Breaks the build unconditionally
    Fatal,
    /// Breaks the build when the engine is configured to abort on errors
    Error,
    /// Reported but does not break the build
    Warning,
    /// Informational note only
    Informational,
    /// Finding is dropped entirely
    Ignore,
}

impl Severity {
    /// Whether this severity counts as an error for exit-code purposes.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Fatal | Severity::Error)
    }

    /// Lowercase label used in report output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Informational => "informational",
            Severity::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity as written in a declarative options file.
///
/// This is the user-facing vocabulary. `DefaultEnabled` defers to the
/// issue's registered default severity instead of naming a concrete level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[schemars(description = "Severity override value as written in the options file")]
pub enum ConfiguredSeverity {
    Fatal,
    Error,
    Warning,
    Informational,
    Ignore,
    /// Use the issue's default severity
    DefaultEnabled,
}

impl ConfiguredSeverity {
    /// Resolve to a concrete severity given the issue's default.
    pub fn resolve(self, default_severity: Severity) -> Severity {
        match self {
            ConfiguredSeverity::Fatal => Severity::Fatal,
            ConfiguredSeverity::Error => Severity::Error,
            ConfiguredSeverity::Warning => Severity::Warning,
            ConfiguredSeverity::Informational => Severity::Informational,
            ConfiguredSeverity::Ignore => Severity::Ignore,
            ConfiguredSeverity::DefaultEnabled => default_severity,
        }
    }
}
