use figdts_core::Class;

use crate::ast::Statement;
use crate::builder::Builder;
use crate::diagnostics::DiagnosticKind;
use crate::inherit::{Hierarchy, Stop};
use crate::overrides::Overrides;

use super::{ClassGenerator, Generate};

/// Flattens and generates every class, in input order.
pub struct BulkClassGenerator<'a> {
    classes: Vec<&'a Class>,
    overrides: &'a Overrides,
}

impl<'a> BulkClassGenerator<'a> {
    pub fn new(classes: impl IntoIterator<Item = &'a Class>, overrides: &'a Overrides) -> Self {
        Self {
            classes: classes.into_iter().collect(),
            overrides,
        }
    }

    pub fn generate(&self, b: &Builder) -> Vec<Statement> {
        let hierarchy = Hierarchy::new(self.classes.iter().copied());
        let mut statements = Vec::new();

        for class in &self.classes {
            let flat = hierarchy.flatten(class);

            // Only the class whose own parent link is broken is reported;
            // its descendants inherit the truncated chain silently.
            {
                let _scope = b.scope(&class.name);
                match &flat.stop {
                    Stop::Unresolved(parent) if flat.ancestors.is_empty() => {
                        b.report(DiagnosticKind::UnresolvedParent, parent)
                    }
                    Stop::Cycle(name) if *name == class.name => {
                        b.report(DiagnosticKind::ParentCycle, name)
                    }
                    Stop::Root | Stop::Unresolved(_) | Stop::Cycle(_) => {}
                }
            }

            let generator = ClassGenerator::new(&flat.class, flat.parent(), self.overrides);
            statements.extend(generator.generate(b));
        }

        statements
    }
}
