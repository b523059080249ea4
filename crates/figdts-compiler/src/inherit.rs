//! Inheritance flattening.
//!
//! Parent references are names. A class's ancestors are found by walking
//! those names through the class list, and any method a class shares
//! verbatim with an ancestor is dropped from its own declaration: the
//! `extends` clause already provides it.

use std::collections::{HashMap, HashSet};

use figdts_core::{Class, Method};

/// Content hash of a method, independent of the class it appears on.
///
/// Equal methods have equal fingerprints; the converse does not hold, so a
/// match only selects candidates for a full comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    pub fn of(method: &Method) -> Self {
        let mut bytes = Vec::new();

        push_str(&mut bytes, &method.name);
        push_str(&mut bytes, &method.description);

        push_len(&mut bytes, method.aliases.len());
        for alias in &method.aliases {
            push_str(&mut bytes, alias);
        }

        push_len(&mut bytes, method.parameters.len());
        for overload in &method.parameters {
            push_len(&mut bytes, overload.len());
            for param in overload {
                push_str(&mut bytes, &param.name);
                push_str(&mut bytes, &param.type_name);
            }
        }

        push_len(&mut bytes, method.returns.len());
        for ret in &method.returns {
            push_str(&mut bytes, ret);
        }

        push_len(&mut bytes, method.children.len());
        for child in &method.children {
            push_str(&mut bytes, &child.to_string());
        }

        bytes.push(u8::from(method.is_static));

        Self(crc32fast::hash(&bytes))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

// Length prefixes keep ("ab", "c") and ("a", "bc") apart.
fn push_len(bytes: &mut Vec<u8>, len: usize) {
    bytes.extend_from_slice(&(len as u64).to_le_bytes());
}

fn push_str(bytes: &mut Vec<u8>, s: &str) {
    push_len(bytes, s.len());
    bytes.extend_from_slice(s.as_bytes());
}

/// Why an ancestor walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stop {
    /// The last class in the chain has no parent.
    Root,
    /// A parent name matched no class.
    Unresolved(String),
    /// A parent name was already on the chain.
    Cycle(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ancestry<'d> {
    /// Nearest first.
    pub chain: Vec<&'d Class>,
    pub stop: Stop,
}

/// A class with its inherited duplicates removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Flattened<'d> {
    /// Cleaned copy; the input class is left untouched.
    pub class: Class,
    pub ancestors: Vec<&'d Class>,
    pub stop: Stop,
    /// Names of the dropped methods, in declaration order.
    pub removed: Vec<String>,
}

impl Flattened<'_> {
    /// Name of the direct parent when it resolved.
    pub fn parent(&self) -> Option<&str> {
        self.ancestors.first().map(|c| c.name.as_str())
    }
}

pub struct Hierarchy<'d> {
    classes: Vec<&'d Class>,
}

impl<'d> Hierarchy<'d> {
    pub fn new(classes: impl IntoIterator<Item = &'d Class>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
        }
    }

    pub fn classes(&self) -> &[&'d Class] {
        &self.classes
    }

    /// First class with this name.
    pub fn find(&self, name: &str) -> Option<&'d Class> {
        self.classes.iter().copied().find(|c| c.name == name)
    }

    pub fn ancestors(&self, class: &Class) -> Ancestry<'d> {
        let mut chain: Vec<&'d Class> = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(&class.name);

        let mut parent_name = class.parent().map(str::to_string);
        let stop = loop {
            let Some(name) = parent_name.take() else {
                break Stop::Root;
            };
            if visited.contains(name.as_str()) {
                break Stop::Cycle(name);
            }
            let Some(parent) = self.find(&name) else {
                break Stop::Unresolved(name);
            };

            visited.insert(&parent.name);
            chain.push(parent);
            parent_name = parent.parent().map(str::to_string);
        };

        Ancestry { chain, stop }
    }

    pub fn flatten(&self, class: &Class) -> Flattened<'d> {
        let Ancestry { chain, stop } = self.ancestors(class);

        let mut inherited: HashMap<Fingerprint, Vec<&Method>> = HashMap::new();
        for method in chain.iter().flat_map(|ancestor| ancestor.methods.iter()) {
            inherited.entry(Fingerprint::of(method)).or_default().push(method);
        }
        let is_inherited = |method: &Method| {
            inherited
                .get(&Fingerprint::of(method))
                .is_some_and(|candidates| candidates.iter().any(|c| *c == method))
        };

        let mut cleaned = class.clone();
        let mut removed = Vec::new();
        cleaned.methods.retain(|method| {
            let keep = !is_inherited(method);
            if !keep {
                removed.push(method.name.clone());
            }
            keep
        });

        Flattened {
            class: cleaned,
            ancestors: chain,
            stop,
            removed,
        }
    }
}
