//! Configuration for compilation and printing.

use figdts_core::Colors;

use crate::ast::Printer;
use crate::overrides::Overrides;

/// Names referenced by the generated output that are not documented classes.
pub const DEFAULT_EXTRA_KNOWN_TYPES: &[&str] = &["ModelPartAPI", "ModelPartIndex", "T"];

/// Configuration for a compilation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Type names accepted in addition to the documented classes
    pub(crate) extra_known_types: Vec<String>,
    /// Spaces per nesting level in the output
    pub(crate) indent: usize,
    /// Color configuration for output
    pub(crate) colors: Colors,
    /// Type override rules
    pub(crate) overrides: Overrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_known_types: DEFAULT_EXTRA_KNOWN_TYPES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            indent: 4,
            colors: Colors::OFF,
            overrides: Overrides::builtin(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one more type name without an unknown-type warning.
    pub fn known_type(mut self, name: impl Into<String>) -> Self {
        self.extra_known_types.push(name.into());
        self
    }

    /// Replace the extra known type names.
    pub fn extra_known_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_known_types = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the indentation width.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Replace the override rules.
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn printer(&self) -> Printer {
        Printer::new().indent(self.indent).colors(self.colors)
    }
}
