use figdts_core::Field;

use crate::ast::TypeElement;
use crate::builder::Builder;
use crate::overrides::{Overrides, Site};

use super::Generate;

/// One property signature per documented field.
pub struct ClassFieldGenerator<'a> {
    field: &'a Field,
    owner: &'a str,
    overrides: &'a Overrides,
}

impl<'a> ClassFieldGenerator<'a> {
    pub fn new(field: &'a Field, owner: &'a str, overrides: &'a Overrides) -> Self {
        Self {
            field,
            owner,
            overrides,
        }
    }
}

impl Generate for ClassFieldGenerator<'_> {
    type Node = TypeElement;

    fn name(&self) -> &str {
        &self.field.name
    }

    fn description(&self) -> &str {
        &self.field.description
    }

    fn primary(&self, b: &Builder) -> Vec<TypeElement> {
        let ty = self
            .overrides
            .resolve(b, &Site::field(self.owner, self.field));
        vec![b.property_signature(&self.field.name, ty)]
    }
}
