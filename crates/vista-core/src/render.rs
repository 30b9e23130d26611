use crate::prelude::*;

// Path the generated `#[serde(crate = ...)]` attribute points at. Generated
// code must compile with `vista` as the user's only direct dependency.
const SERDE_PATH: &str = "vista::__reexports::serde";

///
/// Renderer
///
/// Single final pass from schema + conversion data to tokens. Upstream
/// stages never touch formatting, and nothing here makes decisions beyond
/// layout.
///

pub struct Renderer<'a> {
    model: &'a ModelInfo,
    schema: &'a DerivedTypeSchema,
    conversion: &'a ConversionSpec,
    config: &'a GenerationConfig,
}

/// Renders the full expansion for one declaration.
#[must_use]
pub fn render(
    model: &ModelInfo,
    schema: &DerivedTypeSchema,
    conversion: &ConversionSpec,
    config: &GenerationConfig,
) -> TokenStream {
    Renderer {
        model,
        schema,
        conversion,
        config,
    }
    .to_token_stream()
}

impl Renderer<'_> {
    fn struct_tokens(&self) -> TokenStream {
        let ident = &self.schema.ident;
        let vis = &self.schema.vis;
        let derives = self.derive_tokens();
        let serde_path = SERDE_PATH;

        // Immutable projections keep their fields private behind reference
        // accessors; mutable ones expose plain fields at the derived
        // visibility.
        let field_vis = if self.config.immutable {
            Visibility::Inherited
        } else {
            self.schema.vis.clone()
        };

        let fields = self.schema.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = field_type_tokens(field);

            quote!(#field_vis #field_ident: #ty)
        });

        quote! {
            #[derive(#derives)]
            #[serde(crate = #serde_path)]
            #vis struct #ident {
                #(#fields),*
            }
        }
    }

    fn derive_tokens(&self) -> TokenStream {
        let mut paths: Vec<TokenStream> = Vec::new();

        for conformance in &self.schema.conformances {
            match conformance {
                Conformance::Content => paths.extend([
                    quote!(Clone),
                    quote!(Debug),
                    quote!(::vista::__reexports::serde::Serialize),
                    quote!(::vista::__reexports::serde::Deserialize),
                ]),
                Conformance::Equatable => paths.extend([quote!(PartialEq), quote!(Eq)]),
                Conformance::Hashable => paths.push(quote!(Hash)),
                // Send is a compile-time assertion, not a derive
                Conformance::Send => {}
            }
        }

        quote!(#(#paths),*)
    }

    fn accessor_tokens(&self) -> TokenStream {
        if !self.config.immutable || self.schema.fields.is_empty() {
            return TokenStream::new();
        }

        let ident = &self.schema.ident;
        let vis = &self.schema.vis;
        let accessors = self.schema.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = field_type_tokens(field);

            quote! {
                #[must_use]
                #vis fn #field_ident(&self) -> &#ty {
                    &self.#field_ident
                }
            }
        });

        quote! {
            impl #ident {
                #(#accessors)*
            }
        }
    }

    fn marker_tokens(&self) -> TokenStream {
        let ident = &self.schema.ident;

        quote! {
            impl ::vista::Content for #ident {}
        }
    }

    fn send_assert_tokens(&self) -> TokenStream {
        if !self.schema.conformances.contains(&Conformance::Send) {
            return TokenStream::new();
        }

        let ident = &self.schema.ident;

        quote! {
            const _: () = {
                const fn assert_send_sync<T: Send + Sync>() {}
                assert_send_sync::<#ident>();
            };
        }
    }

    fn conversion_tokens(&self) -> TokenStream {
        let model_ident = &self.model.ident;
        let vis = &self.schema.vis;
        let method = &self.conversion.method;
        let result = &self.conversion.result;
        let body = self.body_tokens();

        quote! {
            impl #model_ident {
                /// Builds the read-only projection of this model.
                #[must_use]
                #vis fn #method(&self) -> #result {
                    #body
                }
            }
        }
    }

    fn body_tokens(&self) -> TokenStream {
        let result = &self.conversion.result;
        let assignments = self
            .conversion
            .assignments
            .iter()
            .map(|assignment| assignment_tokens(assignment, &self.conversion.method));

        quote! {
            #result {
                #(#assignments),*
            }
        }
    }

    fn bridge_tokens(&self) -> TokenStream {
        let model_ident = &self.model.ident;
        let method = &self.conversion.method;
        let result = &self.conversion.result;

        quote! {
            impl ::vista::Project for #model_ident {
                type Output = #result;

                fn project(&self) -> Self::Output {
                    self.#method()
                }
            }

            impl From<&#model_ident> for #result {
                fn from(model: &#model_ident) -> Self {
                    model.#method()
                }
            }
        }
    }
}

impl ToTokens for Renderer<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.struct_tokens());
        tokens.extend(self.accessor_tokens());
        tokens.extend(self.marker_tokens());
        tokens.extend(self.send_assert_tokens());
        tokens.extend(self.conversion_tokens());
        tokens.extend(self.bridge_tokens());
    }
}

/// Field type with its wrapping layers restored.
fn field_type_tokens(field: &DerivedField) -> TokenStream {
    let base = &field.base_ty;

    match (field.is_optional, field.is_collection) {
        (true, true) => quote!(Option<Vec<#base>>),
        (true, false) => quote!(Option<#base>),
        (false, true) => quote!(Vec<#base>),
        (false, false) => quote!(#base),
    }
}

fn assignment_tokens(assignment: &Assignment, method: &Ident) -> TokenStream {
    let field = &assignment.field;

    match assignment.kind {
        AssignmentKind::Direct => quote!(#field: self.#field.clone()),

        AssignmentKind::Nested {
            is_optional,
            is_collection,
            guarded: false,
        } => {
            let expr = nested_expr(field, method, is_optional, is_collection, false);

            quote!(#field: #expr)
        }

        AssignmentKind::Nested {
            is_optional,
            is_collection,
            guarded: true,
        } => {
            let name = field.to_string();
            let loaded = nested_expr(field, method, is_optional, is_collection, true);
            let fallback = unloaded_expr(is_optional, is_collection);

            quote! {
                #field: if ::vista::RelationLoaded::relation_loaded(self, #name) {
                    #loaded
                } else {
                    #fallback
                }
            }
        }
    }
}

/// Nested conversion with the optional chain / per-element map threaded in.
fn nested_expr(
    field: &Ident,
    method: &Ident,
    is_optional: bool,
    is_collection: bool,
    guarded: bool,
) -> TokenStream {
    match (is_optional, is_collection) {
        // guarded singular fields are forced optional in the schema
        (false, false) if guarded => quote!(Some(self.#field.#method())),
        (false, false) => quote!(self.#field.#method()),
        (true, false) => quote!(self.#field.as_ref().map(|value| value.#method())),
        (false, true) => quote!(self.#field.iter().map(|value| value.#method()).collect()),
        (true, true) => quote! {
            self.#field
                .as_ref()
                .map(|values| values.iter().map(|value| value.#method()).collect())
        },
    }
}

/// What a guarded assignment yields when the association is unloaded.
/// Optional shapes fall back to `None`, plural shapes to an empty collection.
fn unloaded_expr(is_optional: bool, is_collection: bool) -> TokenStream {
    if is_collection && !is_optional {
        quote!(Vec::new())
    } else {
        quote!(None)
    }
}

///
/// TESTS
///
