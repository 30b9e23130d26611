use crate::prelude::*;
use derive_more::Display;

///
/// Conformance
///
/// Capabilities of the derived type, in emission order. `Content` is the
/// structural marker and always leads; the rest follow in a fixed order no
/// matter how they were requested, so output is stable across argument
/// orderings.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Conformance {
    #[display("content")]
    Content,

    #[display("equatable")]
    Equatable,

    #[display("hashable")]
    Hashable,

    #[display("send")]
    Send,
}

impl Conformance {
    /// Ordered conformance list for a request.
    #[must_use]
    pub fn list(spec: ConformanceSpec) -> Vec<Self> {
        let mut out = vec![Self::Content];

        if spec.equatable {
            out.push(Self::Equatable);
        }
        if spec.hashable {
            out.push(Self::Hashable);
        }
        if spec.send {
            out.push(Self::Send);
        }

        out
    }
}

///
/// DerivedField
///
/// A field of the derived type. `base_ty` is already renamed for relation
/// fields; wrapping flags mirror the source except where lazy mode forces
/// optionality.
///

#[derive(Clone, Debug)]
pub struct DerivedField {
    pub ident: Ident,
    pub base_ty: Type,
    pub is_optional: bool,
    pub is_collection: bool,
}

///
/// DerivedTypeSchema
///

#[derive(Clone, Debug)]
pub struct DerivedTypeSchema {
    pub ident: Ident,
    pub vis: Visibility,
    pub conformances: Vec<Conformance>,
    pub fields: Vec<DerivedField>,
}

/// Builds the derived type's schema from the included fields.
///
/// A model with zero included fields still produces a valid, empty schema.
#[must_use]
pub fn derived_schema(
    model: &ModelInfo,
    included: &[&FieldDescriptor],
    config: &GenerationConfig,
    mode: ProjectionMode,
) -> DerivedTypeSchema {
    DerivedTypeSchema {
        ident: naming::derived_type_ident(&model.ident, &config.suffix),
        vis: config.access.resolve(&model.vis),
        conformances: Conformance::list(config.conformances),
        fields: included
            .iter()
            .map(|field| derived_field(field, &config.suffix, mode))
            .collect(),
    }
}

fn derived_field(field: &FieldDescriptor, suffix: &str, mode: ProjectionMode) -> DerivedField {
    if field.relation.is_none() {
        // plain fields copy base type and wrapping exactly
        return DerivedField {
            ident: field.ident.clone(),
            base_ty: field.base_ty.clone(),
            is_optional: field.is_optional,
            is_collection: field.is_collection,
        };
    }

    // Singular relations are forced optional under lazy conversion: the
    // association may not have been fetched, and `None` is the fallback.
    // Plural relations fall back to an empty collection instead, so their
    // wrapping stays as declared.
    let forced_optional = mode.is_lazy() && !field.is_collection;

    DerivedField {
        ident: field.ident.clone(),
        base_ty: suffixed_type(&field.base_ty, suffix),
        is_optional: field.is_optional || forced_optional,
        is_collection: field.is_collection,
    }
}

/// Rename the final path segment of a relation target:
/// `auth::User` becomes `auth::UserContent`.
///
/// Introspection has already rejected relation fields whose base type is not
/// a plain path; anything else passes through untouched.
fn suffixed_type(ty: &Type, suffix: &str) -> Type {
    let Type::Path(type_path) = ty else {
        return ty.clone();
    };

    let mut type_path = type_path.clone();
    if let Some(segment) = type_path.path.segments.last_mut() {
        segment.ident = format_ident!("{}{}", segment.ident, suffix, span = segment.ident.span());
    }

    Type::Path(type_path)
}

///
/// TESTS
///
