use figdts_core::Method;
use indexmap::IndexMap;

use crate::ast::TypeElement;
use crate::builder::Builder;
use crate::overrides::Overrides;

use super::{Generate, overloads};

/// One method signature per name and overload.
pub struct ClassMethodGenerator<'a> {
    method: &'a Method,
    owner: &'a str,
    overrides: &'a Overrides,
}

impl<'a> ClassMethodGenerator<'a> {
    pub fn new(method: &'a Method, owner: &'a str, overrides: &'a Overrides) -> Self {
        Self {
            method,
            owner,
            overrides,
        }
    }
}

impl Generate for ClassMethodGenerator<'_> {
    type Node = TypeElement;

    fn name(&self) -> &str {
        &self.method.name
    }

    fn description(&self) -> &str {
        &self.method.description
    }

    fn tags(&self) -> IndexMap<String, String> {
        let mut tags = IndexMap::new();
        if self.method.is_static {
            tags.insert("static".to_string(), String::new());
        }
        tags
    }

    fn primary(&self, b: &Builder) -> Vec<TypeElement> {
        let resolved = overloads::resolve(b, self.overrides, self.owner, self.method);
        overloads::expand(self.method, &resolved, |name, overload| {
            b.method_signature(name, overload.params.clone(), overload.ret.clone())
        })
    }
}
