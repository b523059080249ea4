use figdts_core::Field;

use crate::ast::Statement;
use crate::builder::Builder;
use crate::overrides::{Overrides, Site};

use super::Generate;

/// One `const` per field of a namespace root.
pub struct ModuleFieldGenerator<'a> {
    field: &'a Field,
    owner: &'a str,
    overrides: &'a Overrides,
}

impl<'a> ModuleFieldGenerator<'a> {
    pub fn new(field: &'a Field, owner: &'a str, overrides: &'a Overrides) -> Self {
        Self {
            field,
            owner,
            overrides,
        }
    }
}

impl Generate for ModuleFieldGenerator<'_> {
    type Node = Statement;

    fn name(&self) -> &str {
        &self.field.name
    }

    fn description(&self) -> &str {
        &self.field.description
    }

    fn primary(&self, b: &Builder) -> Vec<Statement> {
        let ty = self
            .overrides
            .resolve(b, &Site::variable(self.owner, self.field));
        vec![b.variable(&self.field.name, ty, Vec::new())]
    }
}
