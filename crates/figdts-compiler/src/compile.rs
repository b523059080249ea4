//! Compilation driver.

use figdts_core::{Colors, Docs};

use crate::ast::{Printer, SourceUnit};
use crate::builder::Builder;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::generate::{BulkClassGenerator, Generate, ModuleGenerator};

/// Output of a compilation: the declaration unit and everything reported
/// while building it.
#[derive(Debug)]
pub struct Compilation {
    unit: SourceUnit,
    diagnostics: Diagnostics,
    indent: usize,
    colors: Colors,
}

impl Compilation {
    pub fn unit(&self) -> &SourceUnit {
        &self.unit
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No error-severity diagnostics.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Serialize with the configured printer settings.
    pub fn render(&self) -> String {
        Printer::new()
            .indent(self.indent)
            .colors(self.colors)
            .print_unit(&self.unit)
    }

    pub fn into_parts(self) -> (SourceUnit, Diagnostics) {
        (self.unit, self.diagnostics)
    }
}

/// Classes first, then the global namespace, then the math namespace.
pub fn compile(docs: &Docs, config: &Config) -> Compilation {
    let known = docs
        .classes()
        .map(|class| class.name.clone())
        .chain(config.extra_known_types.iter().cloned());
    let b = Builder::new(known);
    let overrides = &config.overrides;

    let mut statements = BulkClassGenerator::new(docs.classes(), overrides).generate(&b);
    for root in docs.roots() {
        statements.extend(ModuleGenerator::new(root, overrides).generate(&b));
    }

    Compilation {
        unit: SourceUnit::new(statements),
        diagnostics: b.into_diagnostics(),
        indent: config.indent,
        colors: config.colors,
    }
}

/// Parse a documentation export and compile it.
pub fn compile_json(json: &str, config: &Config) -> crate::Result<Compilation> {
    let docs = Docs::from_json(json)?;
    Ok(compile(&docs, config))
}
