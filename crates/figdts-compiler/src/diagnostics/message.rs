/// Diagnostic kinds, errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Documentation contradicts itself
    OverloadMismatch,

    // Inheritance
    UnresolvedParent,
    ParentCycle,

    // Naming and typing
    UnknownType,
    ReservedIdentifier,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::OverloadMismatch => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Stable kebab-case name of the kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OverloadMismatch => "overload-mismatch",
            Self::UnresolvedParent => "unresolved-parent",
            Self::ParentCycle => "parent-cycle",
            Self::UnknownType => "unknown-type",
            Self::ReservedIdentifier => "reserved-identifier",
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::OverloadMismatch => Some("only the positionally matched overloads are emitted"),
            Self::UnresolvedParent => Some("the class is emitted without an `extends` clause"),
            Self::ParentCycle => Some("the chain is cut where it repeats"),
            Self::UnknownType => Some("emitted as a plain type reference"),
            Self::ReservedIdentifier => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::OverloadMismatch => "overload count does not match return count",
            Self::UnresolvedParent => "parent class not found",
            Self::ParentCycle => "cyclic parent chain",
            Self::UnknownType => "unknown type",
            Self::ReservedIdentifier => "reserved word used as identifier",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnresolvedParent => "parent `{}` is not a documented class".to_string(),
            Self::ParentCycle => "cyclic parent chain through `{}`".to_string(),
            Self::UnknownType => "unknown type `{}`".to_string(),
            Self::ReservedIdentifier => "`{}` is a reserved word".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Dotted path of the declaration being generated, e.g. `Action.setOnToggle`.
    pub(crate) location: String,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(
        kind: DiagnosticKind,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location: location.into(),
            message: message.into(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, location: impl Into<String>) -> Self {
        Self::new(kind, location, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)?;
        if !self.location.is_empty() {
            write!(f, " at {}", self.location)?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
