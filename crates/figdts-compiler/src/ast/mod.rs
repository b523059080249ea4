//! Declaration tree for the TypeScript `.d.ts` output.
//!
//! Nodes are plain data. Construction goes through [`crate::builder::Builder`],
//! which owns identifier safety and documented-type mapping; serialization goes
//! through [`Printer`].

mod decl;
mod printer;
mod types;

#[cfg(test)]
mod printer_tests;

pub use decl::{
    DocComment, Documented, FunctionDecl, HeritageType, IndexSignature, InterfaceDecl,
    MethodSignature, Modifier, ModuleDecl, ModuleKind, PropertySignature, SourceUnit, Statement,
    TypeElement, VariableDecl,
};
pub use printer::Printer;
pub use types::{Keyword, Param, TupleMember, TypeNode, TypeParam};

/// A name token that has passed the builder's identifier checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
