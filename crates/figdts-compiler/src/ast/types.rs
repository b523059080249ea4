//! Type expressions.

use super::Identifier;

/// Built-in keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Any,
    Boolean,
    Never,
    Number,
    String,
    Undefined,
    Unknown,
    Void,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Never => "never",
            Self::Number => "number",
            Self::String => "string",
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Void => "void",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeNode {
    Keyword(Keyword),
    /// `Name` or `Name<Args>`.
    Reference {
        name: Identifier,
        args: Vec<TypeNode>,
    },
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Tuple(Vec<TupleMember>),
    /// `(params) => ret`
    Function {
        params: Vec<Param>,
        ret: Box<TypeNode>,
    },
}

impl From<Keyword> for TypeNode {
    fn from(keyword: Keyword) -> Self {
        TypeNode::Keyword(keyword)
    }
}

impl TypeNode {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, TypeNode::Keyword(k) if *k == keyword)
    }

    /// Name of a type reference, `None` for every other shape.
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            TypeNode::Reference { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether this type needs parentheses as a union or intersection constituent.
    pub(crate) fn needs_constituent_parens(&self) -> bool {
        matches!(
            self,
            TypeNode::Union(_) | TypeNode::Intersection(_) | TypeNode::Function { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TupleMember {
    Type(TypeNode),
    Named { name: Identifier, ty: TypeNode },
}

impl From<TypeNode> for TupleMember {
    fn from(ty: TypeNode) -> Self {
        TupleMember::Type(ty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Identifier,
    pub ty: TypeNode,
}

/// Generic parameter: `T`, `T extends C`, `T = D`, `T extends C = D`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParam {
    pub name: Identifier,
    pub constraint: Option<TypeNode>,
    pub default: Option<TypeNode>,
}
