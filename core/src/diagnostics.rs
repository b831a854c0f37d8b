//! Non-fatal problems found while scanning and parsing.
//!
//! Nothing in the loader aborts on bad input. Each problem becomes a
//! [`Diagnostic`] that is kept in the scan result and mirrored to `tracing`
//! at the matching level when it is recorded.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One recorded problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Label of the source (directory name, `archive.zip:prefix`, file path).
    pub source: String,
    /// 1-based line in the definition file, when the problem is tied to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.source, line, self.message),
            None => write!(f, "{}: {}", self.source, self.message),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a log event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!("{}", diagnostic),
            Severity::Warning => tracing::warn!("{}", diagnostic),
            Severity::Error => tracing::error!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    pub fn info(&mut self, source: &str, line: Option<usize>, message: impl Into<String>) {
        self.record(Severity::Info, source, line, message.into());
    }

    pub fn warning(&mut self, source: &str, line: Option<usize>, message: impl Into<String>) {
        self.record(Severity::Warning, source, line, message.into());
    }

    pub fn error(&mut self, source: &str, line: Option<usize>, message: impl Into<String>) {
        self.record(Severity::Error, source, line, message.into());
    }

    fn record(&mut self, severity: Severity, source: &str, line: Option<usize>, message: String) {
        self.push(Diagnostic {
            severity,
            source: source.to_string(),
            line,
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at [`Severity::Error`].
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// True if any message contains `needle`. Mostly useful in tests.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_line() {
        let with_line = Diagnostic {
            severity: Severity::Error,
            source: "ace".to_string(),
            line: Some(4),
            message: "Invalid armor value".to_string(),
        };
        assert_eq!(with_line.to_string(), "ace:4: Invalid armor value");

        let without_line = Diagnostic {
            line: None,
            ..with_line
        };
        assert_eq!(without_line.to_string(), "ace: Invalid armor value");
    }

    #[test]
    fn test_error_count_ignores_lower_severities() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("src", None, "skipped");
        diagnostics.warning("src", Some(1), "fallback");
        diagnostics.error("src", Some(2), "broken");
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.contains("fallback"));
    }

    #[test]
    fn test_serializes_as_list() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warning("src", None, "careful");
        let json = serde_json::to_value(&diagnostics).unwrap();
        assert_eq!(json[0]["severity"], "warning");
        assert!(json[0].get("line").is_none());
    }
}
