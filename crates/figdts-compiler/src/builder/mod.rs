//! Constructs declaration fragments.
//!
//! Every name token and every type expression in the output goes through
//! [`Builder`]. It owns the two checks the documentation cannot be trusted
//! with: reserved words used as names, and type names nobody declared.
//! Both are reported to the builder's diagnostics and never stop generation.

mod reserved;

#[cfg(test)]
mod builder_tests;

use std::cell::RefCell;
use std::collections::HashSet;

pub use reserved::{RESERVED_WORDS, is_reserved};

use crate::ast::{
    DocComment, Documented, FunctionDecl, HeritageType, Identifier, IndexSignature,
    InterfaceDecl, Keyword, MethodSignature, Modifier, ModuleDecl, ModuleKind, Param,
    PropertySignature, Statement, TupleMember, TypeElement, TypeNode, TypeParam, VariableDecl,
};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Generic types supplied by the TypeScript-to-Lua toolchain.
pub const LIBRARY_TYPES: &[&str] = &["LuaTable", "LuaMap", "LuaMultiReturn"];

/// A documented type name, or a type that is already built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeInput {
    Name(String),
    Node(TypeNode),
}

impl From<&str> for TypeInput {
    fn from(name: &str) -> Self {
        TypeInput::Name(name.to_string())
    }
}

impl From<String> for TypeInput {
    fn from(name: String) -> Self {
        TypeInput::Name(name)
    }
}

impl From<&String> for TypeInput {
    fn from(name: &String) -> Self {
        TypeInput::Name(name.clone())
    }
}

impl From<TypeNode> for TypeInput {
    fn from(node: TypeNode) -> Self {
        TypeInput::Node(node)
    }
}

impl From<Keyword> for TypeInput {
    fn from(keyword: Keyword) -> Self {
        TypeInput::Node(TypeNode::Keyword(keyword))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentOptions {
    /// Report a reserved word (default on).
    pub warn_reserved: bool,
    /// Rewrite `function` to `func` before checking.
    pub substitute_reserved: bool,
}

impl Default for IdentOptions {
    fn default() -> Self {
        Self {
            warn_reserved: true,
            substitute_reserved: false,
        }
    }
}

impl IdentOptions {
    pub fn quiet() -> Self {
        Self {
            warn_reserved: false,
            substitute_reserved: false,
        }
    }

    pub fn substituting() -> Self {
        Self {
            warn_reserved: true,
            substitute_reserved: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceOptions {
    pub modifiers: Vec<Modifier>,
    pub extends: Vec<HeritageType>,
    pub implements: Vec<HeritageType>,
}

impl InterfaceOptions {
    pub fn declare() -> Self {
        Self {
            modifiers: vec![Modifier::Declare],
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionOptions {
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParam>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleOptions {
    pub modifiers: Vec<Modifier>,
    pub kind: ModuleKind,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            modifiers: Vec::new(),
            kind: ModuleKind::Namespace,
        }
    }
}

pub struct Builder {
    known_types: HashSet<String>,
    diagnostics: RefCell<Diagnostics>,
    scope: RefCell<Vec<String>>,
}

/// Pops the builder scope it was created for when dropped.
#[must_use = "the scope is left as soon as the guard is dropped"]
pub struct ScopeGuard<'a> {
    scope: &'a RefCell<Vec<String>>,
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.scope.borrow_mut().pop();
    }
}

impl Builder {
    pub fn new<I, S>(known_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_types: known_types.into_iter().map(Into::into).collect(),
            diagnostics: RefCell::new(Diagnostics::new()),
            scope: RefCell::new(Vec::new()),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known_types.contains(name) || LIBRARY_TYPES.contains(&name)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Enter a named scope; diagnostics are located by the joined scope path.
    pub fn scope(&self, name: &str) -> ScopeGuard<'_> {
        self.scope.borrow_mut().push(name.to_string());
        ScopeGuard { scope: &self.scope }
    }

    /// Current dotted location, e.g. `Action.setOnToggle`.
    pub fn location(&self) -> String {
        self.scope.borrow().join(".")
    }

    pub fn report(&self, kind: DiagnosticKind, detail: &str) {
        let location = self.location();
        self.diagnostics
            .borrow_mut()
            .report(kind, location)
            .message(detail)
            .emit();
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics.into_inner()
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn identifier(&self, name: &str, options: IdentOptions) -> Identifier {
        let name = if options.substitute_reserved {
            reserved::substitute(name)
        } else {
            name
        };

        if options.warn_reserved && is_reserved(name) {
            self.report(DiagnosticKind::ReservedIdentifier, name);
        }

        Identifier::new(name)
    }

    /// Identifier with default options.
    pub fn name(&self, name: &str) -> Identifier {
        self.identifier(name, IdentOptions::default())
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Map a documented type name, or pass a built node through.
    pub fn type_node(&self, input: impl Into<TypeInput>) -> TypeNode {
        match input.into() {
            TypeInput::Node(node) => node,
            TypeInput::Name(name) => self.documented_type(&name),
        }
    }

    fn documented_type(&self, name: &str) -> TypeNode {
        match name {
            "Boolean" => Keyword::Boolean.into(),
            "Integer" | "Number" => Keyword::Number.into(),
            "String" => Keyword::String.into(),
            "Table" => self.plain_reference("LuaTable", Vec::new()),
            "AnyType" => Keyword::Any.into(),
            "nil" => Keyword::Undefined.into(),
            _ => {
                if !self.is_known(name) {
                    self.report(DiagnosticKind::UnknownType, name);
                }
                self.plain_reference(name, Vec::new())
            }
        }
    }

    fn plain_reference(&self, name: &str, args: Vec<TypeNode>) -> TypeNode {
        TypeNode::Reference {
            name: self.identifier(name, IdentOptions::quiet()),
            args,
        }
    }

    /// `Name<Args>`; reports `name` when it is not a known type.
    pub fn reference<I, T>(&self, name: &str, args: I) -> TypeNode
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeInput>,
    {
        if !self.is_known(name) {
            self.report(DiagnosticKind::UnknownType, name);
        }
        let args = args.into_iter().map(|a| self.type_node(a)).collect();
        self.plain_reference(name, args)
    }

    pub fn lua_map(&self, key: impl Into<TypeInput>, value: impl Into<TypeInput>) -> TypeNode {
        let args = vec![self.type_node(key), self.type_node(value)];
        self.plain_reference("LuaMap", args)
    }

    /// `LuaMultiReturn<[...]>`
    pub fn lua_multi_return(&self, members: impl IntoIterator<Item = TupleMember>) -> TypeNode {
        let tuple = self.tuple(members);
        self.plain_reference("LuaMultiReturn", vec![tuple])
    }

    pub fn union<I, T>(&self, types: I) -> TypeNode
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeInput>,
    {
        TypeNode::Union(types.into_iter().map(|t| self.type_node(t)).collect())
    }

    pub fn intersection<I, T>(&self, types: I) -> TypeNode
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeInput>,
    {
        TypeNode::Intersection(types.into_iter().map(|t| self.type_node(t)).collect())
    }

    pub fn tuple(&self, members: impl IntoIterator<Item = TupleMember>) -> TypeNode {
        TypeNode::Tuple(members.into_iter().collect())
    }

    /// Tuple member types can be given here as documented names.
    pub fn tuple_member(&self, ty: impl Into<TypeInput>) -> TupleMember {
        TupleMember::Type(self.type_node(ty))
    }

    pub fn named_member(&self, name: &str, ty: impl Into<TypeInput>) -> TupleMember {
        TupleMember::Named {
            name: self.identifier(name, IdentOptions::substituting()),
            ty: self.type_node(ty),
        }
    }

    pub fn function_type(&self, params: Vec<Param>, ret: impl Into<TypeInput>) -> TypeNode {
        TypeNode::Function {
            params,
            ret: Box::new(self.type_node(ret)),
        }
    }

    pub fn param(&self, name: &str, ty: impl Into<TypeInput>) -> Param {
        Param {
            name: self.identifier(name, IdentOptions::substituting()),
            ty: self.type_node(ty),
        }
    }

    pub fn heritage(&self, name: &str, args: Vec<TypeNode>) -> HeritageType {
        HeritageType {
            name: self.name(name),
            args,
        }
    }

    pub fn type_param(
        &self,
        name: &str,
        constraint: Option<TypeNode>,
        default: Option<TypeNode>,
    ) -> TypeParam {
        TypeParam {
            name: self.name(name),
            constraint,
            default,
        }
    }

    // ========================================================================
    // Members
    // ========================================================================

    pub fn index_signature(&self, key: Param, ty: impl Into<TypeInput>) -> TypeElement {
        TypeElement::Index(IndexSignature {
            doc: None,
            key,
            ty: self.type_node(ty),
        })
    }

    pub fn method_signature(
        &self,
        name: &str,
        params: Vec<Param>,
        ret: impl Into<TypeInput>,
    ) -> TypeElement {
        TypeElement::Method(MethodSignature {
            doc: None,
            name: self.name(name),
            params,
            ret: self.type_node(ret),
        })
    }

    pub fn property_signature(&self, name: &str, ty: impl Into<TypeInput>) -> TypeElement {
        TypeElement::Property(PropertySignature {
            doc: None,
            name: self.name(name),
            ty: self.type_node(ty),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn interface(
        &self,
        name: &str,
        members: Vec<TypeElement>,
        options: InterfaceOptions,
    ) -> Statement {
        Statement::Interface(InterfaceDecl {
            doc: None,
            modifiers: options.modifiers,
            name: self.name(name),
            extends: options.extends,
            implements: options.implements,
            members,
        })
    }

    /// Always a `const`.
    pub fn variable(
        &self,
        name: &str,
        ty: impl Into<TypeInput>,
        modifiers: Vec<Modifier>,
    ) -> Statement {
        Statement::Variable(VariableDecl {
            doc: None,
            modifiers,
            name: self.name(name),
            ty: self.type_node(ty),
        })
    }

    pub fn function(
        &self,
        name: &str,
        params: Vec<Param>,
        ret: impl Into<TypeInput>,
        options: FunctionOptions,
    ) -> Statement {
        Statement::Function(FunctionDecl {
            doc: None,
            modifiers: options.modifiers,
            name: self.name(name),
            type_params: options.type_params,
            params,
            ret: self.type_node(ret),
        })
    }

    pub fn module(&self, name: &str, body: Vec<Statement>, options: ModuleOptions) -> Statement {
        Statement::Module(ModuleDecl {
            doc: None,
            modifiers: options.modifiers,
            name: self.name(name),
            kind: options.kind,
            body,
        })
    }

    pub fn attach_doc<T: Documented>(&self, node: T, doc: Option<&DocComment>) -> T {
        match doc {
            Some(doc) => node.with_doc(doc.clone()),
            None => node,
        }
    }
}
