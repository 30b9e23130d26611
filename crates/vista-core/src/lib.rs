//! ## Crate layout
//! - `config`: labeled-argument parsing and resolution into a total config.
//! - `model`: introspection of the annotated declaration into `ModelInfo`.
//! - `relation`: the closed set of relation kinds and resolved include sets.
//! - `classify`: per-field inclusion decisions.
//! - `naming`: derived type and conversion method naming.
//! - `schema`: construction of the derived type's schema.
//! - `convert`: construction of the conversion assignments.
//! - `render`: the single pass from schema + conversion data to tokens.
//! - `pipeline`: the per-declaration generation entry point.
//!
//! The engine is pure: no I/O, no global state, one declaration per call.

pub mod classify;
pub mod config;
pub mod convert;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod relation;
pub mod render;
pub mod schema;

use proc_macro2::{Span, TokenStream};
use thiserror::Error as ThisError;

pub use crate::{
    config::Defaults,
    pipeline::{ProjectionMode, expand},
};

/// Struct-level configuration attribute; doubles as the field-level `skip`
/// marker namespace.
pub const PROJECTION_ATTR: &str = "projection";

/// Field-level relationship tag attribute.
pub const REL_ATTR: &str = "rel";

///
/// Prelude
///

pub(crate) mod prelude {
    pub(crate) use crate::{
        Error, PROJECTION_ATTR, REL_ATTR, classify,
        config::{AccessLevel, ConformanceSpec, Defaults, GenerationConfig, ProjectionArgs},
        convert,
        convert::{Assignment, AssignmentKind, ConversionSpec},
        model::{FieldDescriptor, ModelInfo},
        naming,
        pipeline::ProjectionMode,
        relation::{IncludeSet, RelationKind},
        render, schema,
        schema::{Conformance, DerivedField, DerivedTypeSchema},
    };
    pub(crate) use darling::{Error as DarlingError, FromMeta};
    pub(crate) use proc_macro2::{Span, TokenStream};
    pub(crate) use quote::{ToTokens, format_ident, quote};
    pub(crate) use syn::{Ident, Type, Visibility};
}

///
/// Error
///
/// Everything here is detected while resolving configuration or
/// introspecting the declaration; later stages are total. An error aborts
/// generation for the offending declaration only.
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// Malformed or unrecognized argument expression.
    #[error(transparent)]
    ConfigParse(#[from] darling::Error),

    /// The annotated declaration is not a struct.
    #[error("projections can only be derived for structs")]
    UnsupportedDeclarationKind(Span),

    /// Defensive guard; `syn` does not produce nameless declarations.
    #[error("model declaration has no resolvable name")]
    EmptyModelName(Span),
}

impl Error {
    /// Span the diagnostic should be attached to.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::ConfigParse(_) => Span::call_site(),
            Self::UnsupportedDeclarationKind(span) | Self::EmptyModelName(span) => *span,
        }
    }

    /// Renders the error as `compile_error!` tokens at the stored span.
    #[must_use]
    pub fn to_compile_error(self) -> TokenStream {
        match self {
            Self::ConfigParse(err) => err.write_errors(),
            other => {
                let message = other.to_string();
                syn::Error::new(other.span(), message).to_compile_error()
            }
        }
    }
}
