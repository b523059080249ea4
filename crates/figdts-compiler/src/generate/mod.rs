//! Generators from documentation entities to declaration nodes.
//!
//! Every generator follows the same lifecycle (see [`Generate::generate`]):
//! build the primary nodes, give each one the entity's doc comment, and
//! surround them with any preceding or following nodes.

mod bulk;
mod class;
mod class_field;
mod class_method;
mod module;
mod module_field;
mod module_function;
mod overloads;


use indexmap::IndexMap;

pub use bulk::BulkClassGenerator;
pub use class::ClassGenerator;
pub use class_field::ClassFieldGenerator;
pub use class_method::ClassMethodGenerator;
pub use module::ModuleGenerator;
pub use module_field::ModuleFieldGenerator;
pub use module_function::ModuleFunctionGenerator;

use crate::ast::{DocComment, Documented};
use crate::builder::Builder;

pub trait Generate {
    type Node: Documented;

    /// Scope name for diagnostics.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// `@name value` lines appended to the comment.
    fn tags(&self) -> IndexMap<String, String> {
        IndexMap::new()
    }

    fn primary(&self, b: &Builder) -> Vec<Self::Node>;

    fn preceding(&self, _b: &Builder) -> Vec<Self::Node> {
        Vec::new()
    }

    fn following(&self, _b: &Builder) -> Vec<Self::Node> {
        Vec::new()
    }

    fn comment(&self) -> Option<DocComment> {
        DocComment::from_parts(self.description(), &self.tags())
    }

    /// `preceding ++ primary ++ following`, with the comment on primary nodes only.
    fn generate(&self, b: &Builder) -> Vec<Self::Node> {
        let _scope = b.scope(self.name());

        let doc = self.comment();
        let primary: Vec<Self::Node> = self
            .primary(b)
            .into_iter()
            .map(|node| b.attach_doc(node, doc.as_ref()))
            .collect();

        let mut nodes = self.preceding(b);
        nodes.extend(primary);
        nodes.extend(self.following(b));
        nodes
    }
}
