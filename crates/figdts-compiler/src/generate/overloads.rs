//! Overload resolution shared by class methods and module functions.

use figdts_core::Method;

use crate::ast::{Param, TypeNode};
use crate::builder::Builder;
use crate::diagnostics::DiagnosticKind;
use crate::overrides::{Overrides, Site};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Overload {
    pub params: Vec<Param>,
    pub ret: TypeNode,
}

/// Resolve each documented overload once, pairing parameters and returns by position.
///
/// Unpaired entries are reported and skipped.
pub(crate) fn resolve(
    b: &Builder,
    overrides: &Overrides,
    owner: &str,
    method: &Method,
) -> Vec<Overload> {
    if !method.has_matching_returns() {
        b.report(
            DiagnosticKind::OverloadMismatch,
            &format!(
                "{} parameter lists, {} return types",
                method.parameters.len(),
                method.returns.len()
            ),
        );
    }

    method
        .overloads()
        .enumerate()
        .map(|(index, (params, ret))| Overload {
            params: params
                .iter()
                .enumerate()
                .map(|(position, param)| {
                    let site = Site::parameter(owner, &method.name, position, param);
                    b.param(&param.name, overrides.resolve(b, &site))
                })
                .collect(),
            ret: overrides.resolve(b, &Site::ret(owner, &method.name, index, ret)),
        })
        .collect()
}

/// Names outer, overloads inner.
pub(crate) fn expand<T>(
    method: &Method,
    overloads: &[Overload],
    mut build: impl FnMut(&str, &Overload) -> T,
) -> Vec<T> {
    method
        .names()
        .flat_map(|name| overloads.iter().map(move |o| (name, o)))
        .map(|(name, overload)| build(name, overload))
        .collect()
}
