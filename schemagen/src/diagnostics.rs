//! Recoverable findings collected while compiling schemas.
//!
//! Every finding is stored in a [`Diagnostics`] collector and mirrored as a
//! `tracing` event at the moment it is recorded.

use tracing::{error, warn};

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The output is complete but less precise than the ontology.
    Warning,
    /// An axiom was dropped.
    Error,
}

/// Kind of a recoverable finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A datatype outside the mapping table; an untyped schema was emitted.
    UnmappableDatatype,
    /// An expression shape the compiler does not translate; the axiom was
    /// skipped.
    UnrecognizedRestrictionShape,
    /// A property without range axioms; an untyped schema was emitted.
    MissingRange,
    /// A restriction conflicting with one applied earlier; it was discarded.
    ConflictingRestriction,
    /// A class whose schema name is already taken by another class; its
    /// schema was dropped.
    SchemaNameCollision,
}

impl DiagnosticKind {
    /// Returns the identifier used in logs and summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnmappableDatatype => "unmappable-datatype",
            DiagnosticKind::UnrecognizedRestrictionShape => "unrecognized-restriction-shape",
            DiagnosticKind::MissingRange => "missing-range",
            DiagnosticKind::ConflictingRestriction => "conflicting-restriction",
            DiagnosticKind::SchemaNameCollision => "schema-name-collision",
        }
    }

    /// Returns the severity of findings of this kind.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::UnrecognizedRestrictionShape => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// IRI of the class being compiled.
    pub class: String,
    /// IRI of the entity the finding is about (property, datatype, class).
    pub subject: String,
    /// Human-readable message.
    pub message: String,
}

/// Collector of findings across a generation run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// All findings, in the order they were recorded.
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding and emits it as a tracing event.
    pub fn record(
        &mut self,
        kind: DiagnosticKind,
        class: &str,
        subject: &str,
        message: impl Into<String>,
    ) {
        let message = message.into();
        match kind.severity() {
            Severity::Warning => {
                warn!(kind = kind.as_str(), class, subject, "{message}");
            }
            Severity::Error => {
                error!(kind = kind.as_str(), class, subject, "{message}");
            }
        }
        self.entries.push(Diagnostic {
            kind,
            class: class.to_owned(),
            subject: subject.to_owned(),
            message,
        });
    }

    /// Returns the number of findings of a kind.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Returns the number of error-level findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.kind.severity() == Severity::Error)
            .count()
    }

    /// Returns the number of warning-level findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries.len() - self.error_count()
    }

    /// Returns the findings recorded while compiling a class.
    pub fn for_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| d.class == class)
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind_and_severity() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(DiagnosticKind::MissingRange, "urn:A", "urn:p", "no range");
        diagnostics.record(
            DiagnosticKind::UnrecognizedRestrictionShape,
            "urn:A",
            "urn:q",
            "nested hasValue",
        );
        diagnostics.record(DiagnosticKind::MissingRange, "urn:B", "urn:p", "no range");
        assert_eq!(diagnostics.count(DiagnosticKind::MissingRange), 2);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 2);
        assert_eq!(diagnostics.for_class("urn:A").count(), 2);
        assert!(!diagnostics.is_empty());
    }
}
