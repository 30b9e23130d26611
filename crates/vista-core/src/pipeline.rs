use crate::prelude::*;
use syn::DeriveInput;

///
/// ProjectionMode
///
/// Which conversion contract the expansion targets. The two derive entry
/// points share every stage and differ only in this value.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProjectionMode {
    /// Relations are already materialized; conversions recurse directly.
    #[default]
    Eager,

    /// Relations may be unloaded; every nested conversion is guarded by a
    /// loaded-state check so projection never triggers a fetch.
    Lazy,
}

impl ProjectionMode {
    #[must_use]
    pub const fn is_lazy(self) -> bool {
        matches!(self, Self::Lazy)
    }
}

/// Runs the whole generation pipeline for one annotated declaration:
/// resolve config, introspect, classify, derive, synthesize, render.
///
/// Errors can only arise from the first two stages; the rest are total.
/// A failure aborts this declaration with no partial output and has no
/// effect on any other declaration in the build.
pub fn expand(
    input: &DeriveInput,
    mode: ProjectionMode,
    defaults: &Defaults,
) -> Result<TokenStream, Error> {
    let args = ProjectionArgs::from_attrs(&input.attrs)?;
    let config = args.resolve(defaults)?;
    let model = ModelInfo::from_derive_input(input)?;

    let included = classify::included_fields(&model.fields, &config.include);
    let schema = schema::derived_schema(&model, &included, &config, mode);
    let conversion = convert::conversion_spec(&model, &included, &config, mode);

    Ok(render::render(&model, &schema, &conversion, &config))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand_eager(input: DeriveInput) -> String {
        expand(&input, ProjectionMode::Eager, &Defaults::default())
            .expect("expansion must succeed")
            .to_string()
    }

    // Both sides rendered by proc-macro2, so spacing always agrees.
    fn contains(expansion: &str, needle: TokenStream) -> bool {
        expansion.contains(&needle.to_string())
    }

    fn post_model() -> DeriveInput {
        parse_quote! {
            pub struct Post {
                title: String,
                #[rel(parent)]
                author: User,
                #[rel(children)]
                comments: Vec<Comment>,
            }
        }
    }

    #[test]
    fn parent_policy_projects_parent_relations_only() {
        let mut input = post_model();
        input
            .attrs
            .push(parse_quote!(#[projection(include = "parent")]));

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(author: UserContent)));
        assert!(contains(&expansion, quote!(author: self.author.to_content())));
        assert!(!expansion.contains("comments"));
    }

    #[test]
    fn children_policy_projects_child_relations_only() {
        let mut input = post_model();
        input
            .attrs
            .push(parse_quote!(#[projection(include = "children")]));

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(comments: Vec<CommentContent>)));
        assert!(contains(
            &expansion,
            quote!(comments: self.comments.iter().map(|value| value.to_content()).collect())
        ));
        assert!(!expansion.contains("UserContent"));
    }

    #[test]
    fn none_policy_projects_plain_fields_only() {
        let mut input = post_model();
        input
            .attrs
            .push(parse_quote!(#[projection(include = "none")]));

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(title: String)));
        assert!(contains(&expansion, quote!(title: self.title.clone())));
        assert!(!expansion.contains("author"));
        assert!(!expansion.contains("comments"));
    }

    #[test]
    fn empty_models_expand_to_an_empty_projection() {
        let expansion = expand_eager(parse_quote! {
            pub struct Heartbeat {}
        });

        assert!(contains(&expansion, quote!(pub struct HeartbeatContent {})));
        assert!(contains(&expansion, quote!(HeartbeatContent {})));
    }

    #[test]
    fn lazy_mode_guards_relations_and_forces_them_optional() {
        let input: DeriveInput = parse_quote! {
            #[projection(include = "all")]
            pub struct Post {
                #[rel(parent)]
                author: User,
            }
        };

        let expansion = expand(&input, ProjectionMode::Lazy, &Defaults::default())
            .expect("expansion must succeed")
            .to_string();

        assert!(contains(&expansion, quote!(author: Option<UserContent>)));
        assert!(contains(
            &expansion,
            quote!(::vista::RelationLoaded::relation_loaded(self, "author"))
        ));
        assert!(contains(&expansion, quote!(Some(self.author.to_content()))));
    }

    #[test]
    fn failures_return_no_partial_output() {
        let input: DeriveInput = parse_quote! {
            #[projection(include = "everything")]
            pub struct Post {
                title: String,
            }
        };

        assert!(matches!(
            expand(&input, ProjectionMode::Eager, &Defaults::default()),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn suffix_controls_every_generated_name() {
        let input: DeriveInput = parse_quote! {
            #[projection(suffix = "Summary", include = "parent")]
            pub struct Post {
                #[rel(parent)]
                author: User,
            }
        };

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(pub struct PostSummary)));
        assert!(contains(&expansion, quote!(fn to_summary(&self) -> PostSummary)));
        assert!(contains(&expansion, quote!(author: UserSummary)));
        assert!(contains(&expansion, quote!(self.author.to_summary())));
    }

    #[test]
    fn mutable_projections_expose_public_fields_without_accessors() {
        let input: DeriveInput = parse_quote! {
            #[projection(immutable = false, include = "none")]
            pub struct Post {
                title: String,
            }
        };

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(pub title: String)));
        assert!(!contains(&expansion, quote!(fn title(&self))));
    }

    #[test]
    fn immutable_projections_expose_reference_accessors() {
        let input: DeriveInput = parse_quote! {
            #[projection(include = "none")]
            pub struct Post {
                title: String,
            }
        };

        let expansion = expand_eager(input);

        assert!(contains(&expansion, quote!(pub fn title(&self) -> &String)));
        assert!(!contains(&expansion, quote!(pub title: String)));
    }

    #[test]
    fn send_conformance_emits_a_compile_time_assertion() {
        let with_send: DeriveInput = parse_quote! {
            #[projection(conformances(send))]
            pub struct Post { title: String }
        };
        let without_send: DeriveInput = parse_quote! {
            #[projection(conformances(equatable))]
            pub struct Post { title: String }
        };

        assert!(contains(
            &expand_eager(with_send),
            quote!(assert_send_sync::<PostContent>())
        ));
        assert!(!expand_eager(without_send).contains("assert_send_sync"));
    }

    #[test]
    fn conformance_request_order_never_changes_derive_order() {
        let forward: DeriveInput = parse_quote! {
            #[projection(conformances(equatable, hashable))]
            pub struct Post { title: String }
        };
        let backward: DeriveInput = parse_quote! {
            #[projection(conformances(hashable, equatable))]
            pub struct Post { title: String }
        };

        assert_eq!(expand_eager(forward), expand_eager(backward));
    }

    #[test]
    fn project_and_from_bridges_are_always_emitted() {
        let expansion = expand_eager(parse_quote! {
            pub struct Post { title: String }
        });

        assert!(contains(&expansion, quote!(impl ::vista::Project for Post)));
        assert!(contains(&expansion, quote!(type Output = PostContent)));
        assert!(contains(&expansion, quote!(impl From<&Post> for PostContent)));
    }
}
