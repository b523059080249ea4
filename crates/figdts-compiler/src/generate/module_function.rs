use figdts_core::Method;

use crate::ast::Statement;
use crate::builder::{Builder, FunctionOptions};
use crate::overrides::Overrides;

use super::{Generate, overloads};

/// Function declarations for a namespace root's methods.
///
/// A signature override replaces the whole expansion.
pub struct ModuleFunctionGenerator<'a> {
    method: &'a Method,
    owner: &'a str,
    overrides: &'a Overrides,
}

impl<'a> ModuleFunctionGenerator<'a> {
    pub fn new(method: &'a Method, owner: &'a str, overrides: &'a Overrides) -> Self {
        Self {
            method,
            owner,
            overrides,
        }
    }
}

impl Generate for ModuleFunctionGenerator<'_> {
    type Node = Statement;

    fn name(&self) -> &str {
        &self.method.name
    }

    fn description(&self) -> &str {
        &self.method.description
    }

    fn primary(&self, b: &Builder) -> Vec<Statement> {
        if let Some(signature) = self.overrides.signature_for(&self.method.name) {
            return signature(b, &self.method.name);
        }

        let resolved = overloads::resolve(b, self.overrides, self.owner, self.method);
        overloads::expand(self.method, &resolved, |name, overload| {
            b.function(
                name,
                overload.params.clone(),
                overload.ret.clone(),
                FunctionOptions::default(),
            )
        })
    }
}
