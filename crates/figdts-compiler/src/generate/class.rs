use figdts_core::Class;

use crate::ast::{Keyword, Modifier, Statement, TypeElement};
use crate::builder::{Builder, InterfaceOptions};
use crate::overrides::Overrides;

use super::{ClassFieldGenerator, ClassMethodGenerator, Generate};

/// Model parts are indexable by child name. The documented members move to
/// a plain `ModelPartAPI` interface so the index signature can coexist with them.
const MODEL_PART: &str = "ModelPart";
const MODEL_PART_API: &str = "ModelPartAPI";

/// One `declare interface` per class: methods, then fields.
pub struct ClassGenerator<'a> {
    class: &'a Class,
    parent: Option<&'a str>,
    overrides: &'a Overrides,
}

impl<'a> ClassGenerator<'a> {
    /// `parent` is the resolved parent name; `None` omits the `extends` clause.
    pub fn new(class: &'a Class, parent: Option<&'a str>, overrides: &'a Overrides) -> Self {
        Self {
            class,
            parent,
            overrides,
        }
    }

    fn members(&self, b: &Builder) -> Vec<TypeElement> {
        let owner = self.class.name.as_str();

        let methods = self
            .class
            .methods
            .iter()
            .flat_map(|method| ClassMethodGenerator::new(method, owner, self.overrides).generate(b));
        let fields = self
            .class
            .fields
            .iter()
            .flat_map(|field| ClassFieldGenerator::new(field, owner, self.overrides).generate(b));

        methods.chain(fields).collect()
    }

    fn interface(&self, b: &Builder, name: &str, modifiers: Vec<Modifier>) -> Statement {
        let extends = self
            .parent
            .map(|parent| b.heritage(parent, Vec::new()))
            .into_iter()
            .collect();

        b.interface(
            name,
            self.members(b),
            InterfaceOptions {
                modifiers,
                extends,
                implements: Vec::new(),
            },
        )
    }

    fn is_model_part(&self) -> bool {
        self.class.name == MODEL_PART
    }
}

impl Generate for ClassGenerator<'_> {
    type Node = Statement;

    fn name(&self) -> &str {
        &self.class.name
    }

    fn description(&self) -> &str {
        &self.class.description
    }

    fn primary(&self, b: &Builder) -> Vec<Statement> {
        if !self.is_model_part() {
            return vec![self.interface(b, &self.class.name, vec![Modifier::Declare])];
        }

        let key = b.param("key", Keyword::String);
        vec![b.interface(
            MODEL_PART,
            vec![b.index_signature(key, MODEL_PART)],
            InterfaceOptions {
                extends: vec![b.heritage(MODEL_PART_API, Vec::new())],
                ..InterfaceOptions::declare()
            },
        )]
    }

    fn preceding(&self, b: &Builder) -> Vec<Statement> {
        if self.is_model_part() {
            vec![self.interface(b, MODEL_PART_API, Vec::new())]
        } else {
            Vec::new()
        }
    }
}
