#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Documentation data model for figdts.
//!
//! Mirrors the scripting API documentation export 1:1:
//! - `Docs`: the root, holding the `globals` and `math` namespaces and enum lists
//! - `Class`: a documented type (or namespace root) with methods and fields
//! - `Field`, `Method`, `Parameter`, `List`: the members
//!
//! Everything here is a read-only snapshot. The compiler never mutates it;
//! derived data (flattened classes) is built as fresh copies.

use serde::{Deserialize, Deserializer, Serialize};

pub mod colors;

pub use colors::Colors;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Documentation root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Docs {
    pub globals: Class,
    pub math: Class,
    #[serde(default)]
    pub lists: Vec<List>,
}

/// A documented class, or a class-shaped namespace root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A documented field. On namespace roots, `children` holds the sub-API classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub children: Vec<Class>,
}

/// A documented method. `parameters` and `returns` are parallel: overload `i`
/// takes `parameters[i]` and returns `returns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Vec<Parameter>>,
    #[serde(default)]
    pub returns: Vec<String>,
    #[serde(default)]
    pub children: Vec<serde_json::Value>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Enumerated value list. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Parse a documentation export.
pub fn parse_docs(json: &str) -> Result<Docs, serde_json::Error> {
    serde_json::from_str(json)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// Navigation
// ============================================================================

impl Docs {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        parse_docs(json)
    }

    /// Every class nested under the global namespace's fields, in document order.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.globals
            .fields
            .iter()
            .flat_map(|field| field.children.iter())
    }

    /// The two namespace roots, global first.
    pub fn roots(&self) -> [&Class; 2] {
        [&self.globals, &self.math]
    }
}

impl Class {
    /// Parent reference, with an empty string treated as absent.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

impl Method {
    /// Primary name followed by aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Overloads paired positionally with their return types.
    ///
    /// Stops at the shorter list; use `has_matching_returns` to detect divergence.
    pub fn overloads(&self) -> impl Iterator<Item = (&[Parameter], &str)> {
        self.parameters
            .iter()
            .zip(self.returns.iter())
            .map(|(params, ret)| (params.as_slice(), ret.as_str()))
    }

    pub fn has_matching_returns(&self) -> bool {
        self.parameters.len() == self.returns.len()
    }
}
