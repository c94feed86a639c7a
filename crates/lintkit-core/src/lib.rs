//! # lintkit-core
//!
//! Options-to-flags synchronization layer for the lintkit engine.
//!
//! Translates declarative lint options (what a user writes in
//! `lintkit.toml`) into the internal flags state the engine consumes:
//! - enable/disable/check lists split into issue ids and categories
//! - severity overrides expanded to per-issue entries via the built-in
//!   issue registry
//! - report writers (text, HTML, XML) resolved, validated, and opened

pub mod category;
pub mod diagnostics;
pub mod flags;
pub mod options;
pub mod output;
pub mod registry;
pub mod report;
pub mod severity;
pub mod sync;

pub use category::Category;
pub use diagnostics::{Finding, SyncError, SyncResult};
pub use flags::LintFlags;
pub use options::{LintOptions, OptionsWarning, generate_schema};
pub use registry::{Issue, IssueRegistry};
pub use report::{ReportFormat, Reporter};
pub use severity::{ConfiguredSeverity, Severity};
pub use sync::{SyncContext, sync_options, sync_options_with_registry};
