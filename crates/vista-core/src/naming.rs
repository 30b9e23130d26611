use crate::prelude::*;
use convert_case::{Case, Casing};

/// Derived type name: model name with the suffix appended.
///
/// Pure function of `(model, suffix)`; callers must not post-process it.
#[must_use]
pub fn derived_type_ident(model: &Ident, suffix: &str) -> Ident {
    format_ident!("{}{}", model, suffix, span = model.span())
}

/// Conversion method name: `to_` plus the snake-cased suffix.
#[must_use]
pub fn conversion_method_ident(suffix: &str) -> Ident {
    let snake = suffix.to_case(Case::Snake);

    format_ident!("to_{snake}")
}

///
/// TESTS
///
