//! Derive-macro surface for `vista`.
//!
//! Both derives are thin shims over `vista_core::expand`; the engine is a
//! plain library so it stays unit-testable outside macro expansion.

use proc_macro::TokenStream;
use vista_core::{Defaults, ProjectionMode};

/// Derives a read-only projection type and a conversion method for a model
/// struct whose relations are already materialized.
#[proc_macro_derive(Projection, attributes(projection, rel))]
pub fn derive_projection(input: TokenStream) -> TokenStream {
    expand(input, ProjectionMode::Eager)
}

/// Derives a projection whose relation conversions are guarded by
/// loaded-state checks, for models with lazily fetched associations.
#[proc_macro_derive(LazyProjection, attributes(projection, rel))]
pub fn derive_lazy_projection(input: TokenStream) -> TokenStream {
    expand(input, ProjectionMode::Lazy)
}

fn expand(input: TokenStream, mode: ProjectionMode) -> TokenStream {
    let input = match syn::parse::<syn::DeriveInput>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error().into(),
    };

    match vista_core::expand(&input, mode, &Defaults::default()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
