//! Members, statements and the source unit.

use indexmap::IndexMap;

use super::{Identifier, Param, TypeNode, TypeParam};

/// Leading `/** ... */` comment, stored as already-trimmed lines.
///
/// A `*/` inside the text would close the comment early, so every line is
/// stored with it written as `*\/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(|line| escape(line.into())).collect(),
        }
    }

    /// Description lines, then a blank line and one `@tag value` line per tag.
    /// A blank description leaves only the tag lines.
    ///
    /// Returns `None` when there is nothing to say.
    pub fn from_parts(description: &str, tags: &IndexMap<String, String>) -> Option<Self> {
        let described = !description.trim().is_empty();
        if !described && tags.is_empty() {
            return None;
        }

        let mut lines: Vec<String> = Vec::new();
        if described {
            lines.extend(description.split('\n').map(|line| line.trim().to_string()));
        }

        if !tags.is_empty() {
            if described {
                lines.push(String::new());
            }
            lines.extend(
                tags.iter()
                    .map(|(name, value)| format!("@{name} {value}").trim().to_string()),
            );
        }

        Some(Self::new(lines))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn escape(line: String) -> String {
    line.replace("*/", "*\\/")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Declare,
    Export,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Declare => "declare",
            Modifier::Export => "export",
        }
    }
}

// ============================================================================
// Interface members
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub doc: Option<DocComment>,
    pub name: Identifier,
    pub params: Vec<Param>,
    pub ret: TypeNode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySignature {
    pub doc: Option<DocComment>,
    pub name: Identifier,
    pub ty: TypeNode,
}

/// `[key: K]: T`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSignature {
    pub doc: Option<DocComment>,
    pub key: Param,
    pub ty: TypeNode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeElement {
    Method(MethodSignature),
    Property(PropertySignature),
    Index(IndexSignature),
}

impl TypeElement {
    /// Member name; index signatures have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeElement::Method(m) => Some(m.name.as_str()),
            TypeElement::Property(p) => Some(p.name.as_str()),
            TypeElement::Index(_) => None,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Entry of an `extends` / `implements` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeritageType {
    pub name: Identifier,
    pub args: Vec<TypeNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub doc: Option<DocComment>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub extends: Vec<HeritageType>,
    pub implements: Vec<HeritageType>,
    pub members: Vec<TypeElement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    pub doc: Option<DocComment>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub ret: TypeNode,
}

/// `const name: T;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDecl {
    pub doc: Option<DocComment>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub ty: TypeNode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// `global { ... }`: members merge into the ambient global scope.
    Global,
    /// `namespace Name { ... }`
    Namespace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDecl {
    pub doc: Option<DocComment>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub kind: ModuleKind,
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Interface(InterfaceDecl),
    Function(FunctionDecl),
    Variable(VariableDecl),
    Module(ModuleDecl),
}

impl Statement {
    pub fn name(&self) -> &str {
        match self {
            Statement::Interface(d) => d.name.as_str(),
            Statement::Function(d) => d.name.as_str(),
            Statement::Variable(d) => d.name.as_str(),
            Statement::Module(d) => d.name.as_str(),
        }
    }
}

/// One complete declaration file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceUnit {
    pub statements: Vec<Statement>,
}

impl SourceUnit {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl std::fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&super::Printer::new().print_unit(self))
    }
}

// ============================================================================
// Comment attachment
// ============================================================================

/// Nodes that can carry a leading doc comment.
pub trait Documented {
    fn doc(&self) -> Option<&DocComment>;
    fn doc_mut(&mut self) -> &mut Option<DocComment>;

    fn with_doc(mut self, doc: DocComment) -> Self
    where
        Self: Sized,
    {
        *self.doc_mut() = Some(doc);
        self
    }
}

impl Documented for TypeElement {
    fn doc(&self) -> Option<&DocComment> {
        match self {
            TypeElement::Method(m) => m.doc.as_ref(),
            TypeElement::Property(p) => p.doc.as_ref(),
            TypeElement::Index(i) => i.doc.as_ref(),
        }
    }

    fn doc_mut(&mut self) -> &mut Option<DocComment> {
        match self {
            TypeElement::Method(m) => &mut m.doc,
            TypeElement::Property(p) => &mut p.doc,
            TypeElement::Index(i) => &mut i.doc,
        }
    }
}

impl Documented for Statement {
    fn doc(&self) -> Option<&DocComment> {
        match self {
            Statement::Interface(d) => d.doc.as_ref(),
            Statement::Function(d) => d.doc.as_ref(),
            Statement::Variable(d) => d.doc.as_ref(),
            Statement::Module(d) => d.doc.as_ref(),
        }
    }

    fn doc_mut(&mut self) -> &mut Option<DocComment> {
        match self {
            Statement::Interface(d) => &mut d.doc,
            Statement::Function(d) => &mut d.doc,
            Statement::Variable(d) => &mut d.doc,
            Statement::Module(d) => &mut d.doc,
        }
    }
}
