use figdts_core::Class;

use crate::ast::{Modifier, ModuleKind, Statement};
use crate::builder::{Builder, ModuleOptions};
use crate::overrides::Overrides;

use super::{Generate, ModuleFieldGenerator, ModuleFunctionGenerator};

/// Documentation name of the global namespace root.
const GLOBALS: &str = "globals";

/// One `declare` module per namespace root: variables, then functions.
pub struct ModuleGenerator<'a> {
    root: &'a Class,
    overrides: &'a Overrides,
}

impl<'a> ModuleGenerator<'a> {
    pub fn new(root: &'a Class, overrides: &'a Overrides) -> Self {
        Self { root, overrides }
    }

    fn kind(&self) -> ModuleKind {
        if self.root.name == GLOBALS {
            ModuleKind::Global
        } else {
            ModuleKind::Namespace
        }
    }
}

impl Generate for ModuleGenerator<'_> {
    type Node = Statement;

    fn name(&self) -> &str {
        match self.kind() {
            ModuleKind::Global => "global",
            ModuleKind::Namespace => &self.root.name,
        }
    }

    fn description(&self) -> &str {
        &self.root.description
    }

    fn primary(&self, b: &Builder) -> Vec<Statement> {
        let owner = self.root.name.as_str();

        let variables = self
            .root
            .fields
            .iter()
            .flat_map(|field| ModuleFieldGenerator::new(field, owner, self.overrides).generate(b));
        let functions = self
            .root
            .methods
            .iter()
            .flat_map(|method| {
                ModuleFunctionGenerator::new(method, owner, self.overrides).generate(b)
            });
        let body = variables.chain(functions).collect();

        vec![b.module(
            self.name(),
            body,
            ModuleOptions {
                modifiers: vec![Modifier::Declare],
                kind: self.kind(),
            },
        )]
    }
}
