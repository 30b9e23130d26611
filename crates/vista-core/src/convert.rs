use crate::prelude::*;

///
/// AssignmentKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentKind {
    /// Plain field copied through by name.
    Direct,

    /// Nested conversion through the relation target's own projection.
    /// `guarded` assignments test the loaded indicator first and never touch
    /// the nested value when the association is unloaded.
    Nested {
        is_optional: bool,
        is_collection: bool,
        guarded: bool,
    },
}

///
/// Assignment
///

#[derive(Clone, Debug)]
pub struct Assignment {
    pub field: Ident,
    pub kind: AssignmentKind,
}

///
/// ConversionSpec
///
/// Everything the renderer needs to emit the conversion method. With zero
/// assignments the method constructs a default instance with no arguments.
///

#[derive(Clone, Debug)]
pub struct ConversionSpec {
    pub method: Ident,
    pub result: Ident,
    pub assignments: Vec<Assignment>,
}

/// Builds the conversion spec from the included fields.
#[must_use]
pub fn conversion_spec(
    model: &ModelInfo,
    included: &[&FieldDescriptor],
    config: &GenerationConfig,
    mode: ProjectionMode,
) -> ConversionSpec {
    let assignments = included
        .iter()
        .map(|field| Assignment {
            field: field.ident.clone(),
            kind: match field.relation {
                None => AssignmentKind::Direct,
                Some(_) => AssignmentKind::Nested {
                    is_optional: field.is_optional,
                    is_collection: field.is_collection,
                    guarded: mode.is_lazy(),
                },
            },
        })
        .collect();

    ConversionSpec {
        method: naming::conversion_method_ident(&config.suffix),
        result: naming::derived_type_ident(&model.ident, &config.suffix),
        assignments,
    }
}

///
/// TESTS
///
