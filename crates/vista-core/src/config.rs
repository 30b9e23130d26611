use crate::prelude::*;
use darling::ast::NestedMeta;
use derive_more::Display;
use syn::{Attribute, Meta, parse_quote};

/// Suffix used when neither the annotation site nor the injected defaults
/// name one.
pub const DEFAULT_SUFFIX: &str = "Content";

///
/// AccessLevel
///
/// Requested visibility for the derived type and conversion method.
/// `Inherit` copies the model's own visibility; every other level is used
/// literally, ignoring the source.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum AccessLevel {
    #[display("crate")]
    Crate,

    #[display("inherit")]
    Inherit,

    #[display("private")]
    Private,

    #[default]
    #[display("public")]
    Public,

    #[display("super")]
    Super,
}

impl AccessLevel {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "inherit" => Some(Self::Inherit),
            "public" => Some(Self::Public),
            "crate" => Some(Self::Crate),
            "super" => Some(Self::Super),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Resolve to a concrete visibility given the model's own.
    ///
    /// A Rust declaration carries a single visibility, so `Inherit` is a
    /// verbatim copy; an unmodified struct is already module-private.
    #[must_use]
    pub fn resolve(self, model_vis: &Visibility) -> Visibility {
        match self {
            Self::Inherit => model_vis.clone(),
            Self::Public => parse_quote!(pub),
            Self::Crate => parse_quote!(pub(crate)),
            Self::Super => parse_quote!(pub(super)),
            Self::Private => Visibility::Inherited,
        }
    }
}

impl FromMeta for AccessLevel {
    fn from_string(value: &str) -> Result<Self, DarlingError> {
        Self::from_tag(value).ok_or_else(|| DarlingError::unknown_value(value))
    }
}

///
/// IncludeSpec
///
/// Inclusion policy selector, prior to resolution into an `IncludeSet`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum IncludeSpec {
    None,
    Parent,
    #[default]
    Children,
    All,
    Custom(Vec<RelationKind>),
}

impl IncludeSpec {
    #[must_use]
    pub fn resolve(&self) -> IncludeSet {
        match self {
            Self::None => IncludeSet::none(),
            Self::Parent => IncludeSet::parents(),
            Self::Children => IncludeSet::children(),
            Self::All => IncludeSet::all(),
            Self::Custom(kinds) => kinds.iter().copied().collect(),
        }
    }

    fn from_selector(selector: &str) -> Result<Self, DarlingError> {
        match selector {
            "none" => Ok(Self::None),
            "parent" => Ok(Self::Parent),
            "children" => Ok(Self::Children),
            "all" => Ok(Self::All),
            _ => Err(DarlingError::unknown_value(selector)),
        }
    }

    /// Split a comma-separated tag list into relation kinds.
    fn from_tag_list(raw: &str) -> Result<Self, DarlingError> {
        let kinds = raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(|tag| {
                RelationKind::from_tag(tag).ok_or_else(|| DarlingError::unknown_value(tag))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Custom(kinds))
    }
}

impl FromMeta for IncludeSpec {
    fn from_string(value: &str) -> Result<Self, DarlingError> {
        Self::from_selector(value)
    }

    fn from_list(items: &[NestedMeta]) -> Result<Self, DarlingError> {
        match items {
            // include(children)
            [NestedMeta::Meta(Meta::Path(path))] => {
                let Some(word) = path.get_ident() else {
                    return Err(DarlingError::custom("expected a policy selector")
                        .with_span(path));
                };

                Self::from_selector(&word.to_string()).map_err(|err| err.with_span(word))
            }

            // include(custom = "parent, siblings")
            [NestedMeta::Meta(meta @ Meta::NameValue(nv))] if nv.path.is_ident("custom") => {
                let raw = String::from_meta(meta)?;

                Self::from_tag_list(&raw).map_err(|err| err.with_span(&nv.value))
            }

            // include(custom(parent, siblings))
            [NestedMeta::Meta(Meta::List(list))] if list.path.is_ident("custom") => {
                let nested = NestedMeta::parse_meta_list(list.tokens.clone())
                    .map_err(DarlingError::from)?;
                let kinds = nested
                    .iter()
                    .map(|item| match item {
                        NestedMeta::Meta(Meta::Path(path)) => path
                            .get_ident()
                            .and_then(|ident| RelationKind::from_tag(&ident.to_string()))
                            .ok_or_else(|| {
                                DarlingError::custom("expected a relation kind").with_span(path)
                            }),
                        _ => Err(DarlingError::custom("expected a relation kind")
                            .with_span(list)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Self::Custom(kinds))
            }

            _ => Err(DarlingError::custom(
                "expected `none`, `parent`, `children`, `all` or `custom(...)`",
            )),
        }
    }
}

///
/// ConformanceSpec
///
/// Requested capability set for the derived type. Emission order is fixed by
/// the schema builder; this is only the request.
///

#[derive(Clone, Copy, Debug, Eq, FromMeta, PartialEq)]
pub struct ConformanceSpec {
    #[darling(default)]
    pub equatable: bool,

    #[darling(default)]
    pub hashable: bool,

    #[darling(default)]
    pub send: bool,
}

impl ConformanceSpec {
    pub const ALL: Self = Self {
        equatable: true,
        hashable: true,
        send: true,
    };

    pub const MARKER_ONLY: Self = Self {
        equatable: false,
        hashable: false,
        send: false,
    };
}

impl Default for ConformanceSpec {
    fn default() -> Self {
        Self::ALL
    }
}

///
/// ProjectionArgs
///
/// Partial configuration parsed from `#[projection(...)]`. Every option is
/// optional here; resolution against a `Defaults` value makes it total.
///

#[derive(Debug, Default, FromMeta)]
pub struct ProjectionArgs {
    pub immutable: Option<bool>,
    pub include: Option<IncludeSpec>,
    pub access: Option<AccessLevel>,
    pub conformances: Option<ConformanceSpec>,
    pub suffix: Option<String>,
}

impl ProjectionArgs {
    /// Gather every struct-level `#[projection(...)]` attribute.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut items = Vec::new();

        for attr in attrs {
            if !attr.path().is_ident(PROJECTION_ATTR) {
                continue;
            }

            match &attr.meta {
                Meta::List(list) => {
                    let nested = NestedMeta::parse_meta_list(list.tokens.clone())
                        .map_err(DarlingError::from)?;
                    items.extend(nested);
                }

                // bare `#[projection]` configures nothing
                Meta::Path(_) => {}

                Meta::NameValue(nv) => {
                    return Err(DarlingError::custom("expected #[projection(...)]")
                        .with_span(nv)
                        .into());
                }
            }
        }

        Ok(Self::from_list(&items)?)
    }

    /// Apply precedence: explicit argument, then the injected defaults.
    /// `Defaults::default()` is the built-in constant layer underneath.
    pub fn resolve(self, defaults: &Defaults) -> Result<GenerationConfig, Error> {
        let suffix = self.suffix.unwrap_or_else(|| defaults.suffix.clone());
        if !is_valid_suffix(&suffix) {
            return Err(DarlingError::custom(format!(
                "projection suffix '{suffix}' must be a non-empty identifier fragment"
            ))
            .into());
        }

        Ok(GenerationConfig {
            immutable: self.immutable.unwrap_or(defaults.immutable),
            include: self
                .include
                .as_ref()
                .unwrap_or(&defaults.include)
                .resolve(),
            access: self.access.unwrap_or(defaults.access),
            conformances: self.conformances.unwrap_or(defaults.conformances),
            suffix,
        })
    }
}

// The suffix is appended to type idents and lowercased into the method
// ident, so it has to be ident-safe on its own.
fn is_valid_suffix(suffix: &str) -> bool {
    let mut chars = suffix.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

///
/// Defaults
///
/// Injected default configuration consulted when an argument is absent.
/// Passed explicitly to the generation entry point; there is no ambient
/// registry. `Defaults::default()` carries the library's built-in constants.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Defaults {
    pub immutable: bool,
    pub include: IncludeSpec,
    pub access: AccessLevel,
    pub conformances: ConformanceSpec,
    pub suffix: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            immutable: true,
            include: IncludeSpec::Children,
            access: AccessLevel::Public,
            conformances: ConformanceSpec::ALL,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

///
/// GenerationConfig
///
/// Fully resolved configuration; every field always has a value.
///

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub immutable: bool,
    pub include: IncludeSet,
    pub access: AccessLevel,
    pub conformances: ConformanceSpec,
    pub suffix: String,
}

///
/// TESTS
///
