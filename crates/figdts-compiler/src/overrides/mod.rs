//! Knowledge base of precise types for loosely documented members.
//!
//! The documentation describes callbacks as `Function` and collections as
//! `Table`. A rule, keyed by owner and member name, may replace such a type
//! with a structural one. Rules are pure: they only build nodes.

mod builtin;

#[cfg(test)]
mod overrides_tests;

use indexmap::IndexMap;

use figdts_core::{Field, Parameter};

use crate::ast::{Statement, TypeNode};
use crate::builder::Builder;

/// Which slot of a member a type is being resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Parameter,
    Return,
    Field,
    Variable,
}

/// Everything a rule may look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site<'a> {
    /// Class or module name.
    pub owner: &'a str,
    /// Primary member name; aliases share their primary's rules.
    pub member: &'a str,
    pub target: Target,
    /// Type string from the documentation.
    pub documented: &'a str,
    /// Parameter index, or overload index for returns. Zero otherwise.
    pub position: usize,
    /// Parameter name, for `Target::Parameter`.
    pub name: Option<&'a str>,
}

impl<'a> Site<'a> {
    pub fn parameter(
        owner: &'a str,
        member: &'a str,
        position: usize,
        param: &'a Parameter,
    ) -> Self {
        Self {
            owner,
            member,
            target: Target::Parameter,
            documented: &param.type_name,
            position,
            name: Some(&param.name),
        }
    }

    pub fn ret(owner: &'a str, member: &'a str, overload: usize, documented: &'a str) -> Self {
        Self {
            owner,
            member,
            target: Target::Return,
            documented,
            position: overload,
            name: None,
        }
    }

    pub fn field(owner: &'a str, field: &'a Field) -> Self {
        Self {
            owner,
            member: &field.name,
            target: Target::Field,
            documented: &field.type_name,
            position: 0,
            name: None,
        }
    }

    pub fn variable(owner: &'a str, field: &'a Field) -> Self {
        Self {
            target: Target::Variable,
            ..Self::field(owner, field)
        }
    }

    /// Documented as an untyped callback.
    pub fn is_function(&self) -> bool {
        self.documented == "Function"
    }

    /// Documented as an untyped table.
    pub fn is_table(&self) -> bool {
        self.documented == "Table"
    }
}

/// `None` passes the builder's mapping of the documented type through.
pub type Rule = fn(&Builder, &Site<'_>) -> Option<TypeNode>;

/// Replaces the whole overload expansion of a module function.
pub type SignatureRule = fn(&Builder, &str) -> Vec<Statement>;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    rules: IndexMap<String, IndexMap<String, Vec<(Target, Rule)>>>,
    signatures: IndexMap<String, SignatureRule>,
}

impl Overrides {
    /// Empty table: every type resolves to its documented mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&mut self, owner: &str, member: &str, target: Target, rule: Rule) -> &mut Self {
        self.rules
            .entry(owner.to_string())
            .or_default()
            .entry(member.to_string())
            .or_default()
            .push((target, rule));
        self
    }

    /// Register `rule` for every owner and member combination.
    pub fn rules(
        &mut self,
        owners: &[&str],
        members: &[&str],
        target: Target,
        rule: Rule,
    ) -> &mut Self {
        for owner in owners {
            for member in members {
                self.rule(owner, member, target, rule);
            }
        }
        self
    }

    pub fn signature(&mut self, member: &str, rule: SignatureRule) -> &mut Self {
        self.signatures.insert(member.to_string(), rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.signatures.is_empty()
    }

    /// First rule registered for the site that produces a type.
    pub fn lookup(&self, b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
        self.rules
            .get(site.owner)?
            .get(site.member)?
            .iter()
            .filter(|(target, _)| *target == site.target)
            .find_map(|(_, rule)| rule(b, site))
    }

    /// The override type, or the documented type mapped by the builder.
    pub fn resolve(&self, b: &Builder, site: &Site<'_>) -> TypeNode {
        self.lookup(b, site)
            .unwrap_or_else(|| b.type_node(site.documented))
    }

    pub fn signature_for(&self, member: &str) -> Option<SignatureRule> {
        self.signatures.get(member).copied()
    }
}
