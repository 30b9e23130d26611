use crate::prelude::*;
use darling::ast::NestedMeta;
use syn::{
    Attribute, Data, DeriveInput, GenericArgument, Meta, PathArguments, spanned::Spanned,
};

///
/// ModelInfo
///
/// Shape-agnostic view of an annotated model declaration. Built once by the
/// introspector; downstream stages never look at the source syntax again.
///

#[derive(Clone, Debug)]
pub struct ModelInfo {
    pub ident: Ident,
    pub vis: Visibility,
    pub fields: Vec<FieldDescriptor>,
}

///
/// FieldDescriptor
///
/// One stored field, in source declaration order.
///

#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub ident: Ident,
    pub base_ty: Type,
    pub is_optional: bool,
    pub is_collection: bool,
    pub relation: Option<RelationKind>,
    pub ignored: bool,
}

impl ModelInfo {
    /// Extract the ordered field list from the annotated declaration.
    ///
    /// Tuple fields have no name and are silently skipped; enums and unions
    /// are not model shapes and abort introspection for this declaration.
    pub fn from_derive_input(input: &DeriveInput) -> Result<Self, Error> {
        let Data::Struct(data) = &input.data else {
            return Err(Error::UnsupportedDeclarationKind(input.ident.span()));
        };

        if !input.generics.params.is_empty() {
            return Err(Error::UnsupportedDeclarationKind(input.generics.span()));
        }

        let ident = input.ident.clone();
        if ident.to_string().is_empty() {
            return Err(Error::EmptyModelName(ident.span()));
        }

        let mut fields = Vec::new();
        for field in &data.fields {
            let Some(field_ident) = field.ident.clone() else {
                continue;
            };

            let tags = FieldTags::from_attrs(&field.attrs)?;
            let (base_ty, is_optional, is_collection) = unwrap_type_layers(&field.ty);

            // Relation targets get their final path segment renamed later,
            // so anything other than a plain path cannot be projected.
            if tags.relation.is_some() && !matches!(base_ty, Type::Path(_)) {
                return Err(DarlingError::custom(
                    "relation fields must use a plain type path",
                )
                .with_span(&field.ty)
                .into());
            }

            fields.push(FieldDescriptor {
                ident: field_ident,
                base_ty,
                is_optional,
                is_collection,
                relation: tags.relation,
                ignored: tags.ignored,
            });
        }

        Ok(Self {
            ident,
            vis: input.vis.clone(),
            fields,
        })
    }
}

///
/// FieldTags
///

#[derive(Debug, Default)]
struct FieldTags {
    relation: Option<RelationKind>,
    ignored: bool,
}

impl FieldTags {
    fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut tags = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REL_ATTR) {
                let kind = parse_rel_attr(attr)?;

                if let Some(existing) = tags.relation.replace(kind) {
                    return Err(DarlingError::custom(format!(
                        "field already tagged as `{existing}` relation"
                    ))
                    .with_span(attr)
                    .into());
                }
            } else if attr.path().is_ident(PROJECTION_ATTR) && skip_requested(attr)? {
                tags.ignored = true;
            }

            // any other attribute is not ours and stays invisible here
        }

        Ok(tags)
    }
}

fn parse_rel_attr(attr: &Attribute) -> Result<RelationKind, Error> {
    let Meta::List(list) = &attr.meta else {
        return Err(DarlingError::custom("expected #[rel(<kind>)]")
            .with_span(attr)
            .into());
    };

    let nested = NestedMeta::parse_meta_list(list.tokens.clone()).map_err(DarlingError::from)?;
    let [NestedMeta::Meta(Meta::Path(path))] = nested.as_slice() else {
        return Err(DarlingError::custom("expected a single relation kind")
            .with_span(list)
            .into());
    };

    path.get_ident()
        .and_then(|ident| RelationKind::from_tag(&ident.to_string()))
        .ok_or_else(|| {
            DarlingError::custom(
                "expected one of `parent`, `optional_parent`, `children`, \
                 `optional_child`, `siblings`",
            )
            .with_span(path)
            .into()
        })
}

fn skip_requested(attr: &Attribute) -> Result<bool, Error> {
    // bare `#[projection]` on a field marks nothing
    let Meta::List(list) = &attr.meta else {
        return Ok(false);
    };

    let nested = NestedMeta::parse_meta_list(list.tokens.clone()).map_err(DarlingError::from)?;
    let mut skip = false;

    for item in &nested {
        match item {
            NestedMeta::Meta(Meta::Path(path)) if path.is_ident("skip") => skip = true,
            _ => {
                return Err(DarlingError::custom(
                    "unsupported field option, expected `skip`",
                )
                .with_span(list)
                .into());
            }
        }
    }

    Ok(skip)
}

/// Strip at most one outer `Option` layer, then at most one `Vec` layer.
/// Anything nested deeper stays part of the base type untouched.
fn unwrap_type_layers(ty: &Type) -> (Type, bool, bool) {
    let mut current = ty;
    let mut is_optional = false;
    let mut is_collection = false;

    if let Some(inner) = wrapped_type(current, "Option") {
        is_optional = true;
        current = inner;
    }

    if let Some(inner) = wrapped_type(current, "Vec") {
        is_collection = true;
        current = inner;
    }

    (current.clone(), is_optional, is_collection)
}

/// Returns the single generic argument when `ty` is `wrapper<...>`.
fn wrapped_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

///
/// TESTS
///
