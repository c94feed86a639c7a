//! Reporters: sinks that serialize lint findings in a specific format.
//!
//! A reporter owns its output — stdout, stderr, or an opened buffered file
//! writer — and renders a finding list as plain text, a standalone HTML
//! document, or an `<issues>` XML document.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::diagnostics::{Finding, SyncError, SyncResult};
use crate::output::{is_stderr, is_stdout};

/// Output format of a reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Html,
    Xml,
}

impl ReportFormat {
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Html => "HTML",
            ReportFormat::Xml => "XML",
        }
    }

    /// Default file extension, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => ".txt",
            ReportFormat::Html => ".html",
            ReportFormat::Xml => ".xml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

enum ReportSink {
    Stdout,
    Stderr,
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

/// A sink that serializes lint findings in one output format.
pub struct Reporter {
    format: ReportFormat,
    sink: ReportSink,
    include_fixes: bool,
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("format", &self.format)
            .field("output", &self.describe_output())
            .field("include_fixes", &self.include_fixes)
            .finish()
    }
}

impl Reporter {
    /// Text reporter. `output` may be a sentinel (`stdout`/`stderr`) or a
    /// validated file path.
    pub fn text(output: &Path) -> SyncResult<Self> {
        let sink = if is_stdout(output) {
            ReportSink::Stdout
        } else if is_stderr(output) {
            ReportSink::Stderr
        } else {
            open_sink(ReportFormat::Text, output)?
        };
        Ok(Self {
            format: ReportFormat::Text,
            sink,
            include_fixes: false,
        })
    }

    /// HTML reporter writing to a validated file path.
    pub fn html(path: &Path) -> SyncResult<Self> {
        Ok(Self {
            format: ReportFormat::Html,
            sink: open_sink(ReportFormat::Html, path)?,
            include_fixes: false,
        })
    }

    /// XML reporter writing to a validated file path.
    ///
    /// When `include_fixes` is set, suggestions are embedded as `<fix>`
    /// elements.
    pub fn xml(path: &Path, include_fixes: bool) -> SyncResult<Self> {
        Ok(Self {
            format: ReportFormat::Xml,
            sink: open_sink(ReportFormat::Xml, path)?,
            include_fixes,
        })
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// File path of the output, `None` for stdout/stderr.
    pub fn output_path(&self) -> Option<&Path> {
        match &self.sink {
            ReportSink::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Human-readable description of the output target.
    pub fn describe_output(&self) -> String {
        match &self.sink {
            ReportSink::Stdout => "stdout".to_string(),
            ReportSink::Stderr => "stderr".to_string(),
            ReportSink::File { path, .. } => path.display().to_string(),
        }
    }

    /// Serialize the findings into this reporter's sink.
    pub fn write_report(&mut self, findings: &[Finding]) -> io::Result<()> {
        let format = self.format;
        let include_fixes = self.include_fixes;
        match &mut self.sink {
            ReportSink::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                render(format, include_fixes, &mut lock, findings)?;
                lock.flush()
            }
            ReportSink::Stderr => {
                let stderr = io::stderr();
                let mut lock = stderr.lock();
                render(format, include_fixes, &mut lock, findings)?;
                lock.flush()
            }
            ReportSink::File { writer, .. } => {
                render(format, include_fixes, writer, findings)?;
                writer.flush()
            }
        }
    }
}

fn open_sink(format: ReportFormat, path: &Path) -> SyncResult<ReportSink> {
    let file = File::create(path).map_err(|source| SyncError::OpenReport {
        format: format.label(),
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReportSink::File {
        path: path.to_path_buf(),
        writer: BufWriter::new(file),
    })
}

fn render(
    format: ReportFormat,
    include_fixes: bool,
    writer: &mut dyn Write,
    findings: &[Finding],
) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(writer, findings),
        ReportFormat::Html => render_html(writer, findings),
        ReportFormat::Xml => render_xml(writer, findings, include_fixes),
    }
}

fn count_errors_and_warnings(findings: &[Finding]) -> (usize, usize) {
    let errors = findings.iter().filter(|f| f.severity.is_error()).count();
    let warnings = findings
        .iter()
        .filter(|f| f.severity == crate::severity::Severity::Warning)
        .count();
    (errors, warnings)
}

fn render_text(writer: &mut dyn Write, findings: &[Finding]) -> io::Result<()> {
    for finding in findings {
        writeln!(
            writer,
            "{}:{}:{}: {}: {} [{}]",
            finding.path.display(),
            finding.line,
            finding.column,
            finding.severity,
            finding.message,
            finding.issue_id
        )?;
        if let Some(suggestion) = &finding.suggestion {
            writeln!(writer, "    suggestion: {}", suggestion)?;
        }
    }
    let (errors, warnings) = count_errors_and_warnings(findings);
    writeln!(writer, "{} errors, {} warnings", errors, warnings)
}

fn render_html(writer: &mut dyn Write, findings: &[Finding]) -> io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(
        writer,
        "<head><meta charset=\"utf-8\"><title>Lint Report</title></head>"
    )?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<h1>Lint Report</h1>")?;
    writeln!(writer, "<table>")?;
    writeln!(
        writer,
        "<tr><th>Location</th><th>Severity</th><th>Issue</th><th>Message</th></tr>"
    )?;
    for finding in findings {
        writeln!(
            writer,
            "<tr><td>{}:{}:{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&finding.path.display().to_string()),
            finding.line,
            finding.column,
            finding.severity,
            escape_html(&finding.issue_id),
            escape_html(&finding.message)
        )?;
    }
    writeln!(writer, "</table>")?;
    let (errors, warnings) = count_errors_and_warnings(findings);
    writeln!(writer, "<p>{} errors, {} warnings</p>", errors, warnings)?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")
}

fn render_xml(writer: &mut dyn Write, findings: &[Finding], include_fixes: bool) -> io::Result<()> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(writer, "<issues>")?;
    for finding in findings {
        writeln!(
            writer,
            "    <issue id=\"{}\" severity=\"{}\" message=\"{}\">",
            escape_xml(&finding.issue_id),
            finding.severity,
            escape_xml(&finding.message)
        )?;
        writeln!(
            writer,
            "        <location file=\"{}\" line=\"{}\" column=\"{}\"/>",
            escape_xml(&finding.path.display().to_string()),
            finding.line,
            finding.column
        )?;
        if include_fixes {
            if let Some(suggestion) = &finding.suggestion {
                writeln!(
                    writer,
                    "        <fix description=\"{}\"/>",
                    escape_xml(suggestion)
                )?;
            }
        }
        writeln!(writer, "    </issue>")?;
    }
    writeln!(writer, "</issues>")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
