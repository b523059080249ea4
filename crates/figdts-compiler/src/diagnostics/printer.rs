//! Builder-pattern printer for rendering diagnostics.

use figdts_core::Colors;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Each diagnostic as a headline, an arrow to its location and its hints,
    /// separated by blank lines.
    pub fn render(&self) -> String {
        let c = Colors::new(self.colored);
        let mut out = String::new();

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            render_one(&mut out, diag, c);
        }

        out
    }
}

fn render_one(out: &mut String, diag: &DiagnosticMessage, c: Colors) {
    let accent = match diag.severity() {
        Severity::Error => c.red,
        Severity::Warning => c.yellow,
    };

    out.push_str(&format!(
        "{}{}{}: {}\n",
        accent,
        diag.severity(),
        c.reset,
        diag.message()
    ));

    if !diag.location().is_empty() {
        out.push_str(&format!("  {}-->{} {}\n", c.blue, c.reset, diag.location()));
    }

    for hint in diag.hints() {
        out.push_str(&format!("  {}={} hint: {}\n", c.blue, c.reset, hint));
    }
}
