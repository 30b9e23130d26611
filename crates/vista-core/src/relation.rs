use crate::prelude::*;
use derive_more::Display;
use std::collections::BTreeSet;

///
/// RelationKind
///
/// Closed set of relationship tags recognized on model fields. Raw tag text
/// is decoded exactly once, during introspection; downstream stages only see
/// this enum.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum RelationKind {
    #[display("children")]
    Children,

    #[display("optional_child")]
    OptionalChild,

    #[display("optional_parent")]
    OptionalParent,

    #[display("parent")]
    Parent,

    #[display("siblings")]
    Siblings,
}

impl RelationKind {
    pub const ALL: [Self; 5] = [
        Self::Parent,
        Self::OptionalParent,
        Self::Children,
        Self::OptionalChild,
        Self::Siblings,
    ];

    /// Decode a field tag ident into a relation kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "parent" => Some(Self::Parent),
            "optional_parent" => Some(Self::OptionalParent),
            "children" => Some(Self::Children),
            "optional_child" => Some(Self::OptionalChild),
            "siblings" => Some(Self::Siblings),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_parent(self) -> bool {
        matches!(self, Self::Parent | Self::OptionalParent)
    }

    #[must_use]
    pub const fn is_child(self) -> bool {
        matches!(self, Self::Children | Self::OptionalChild | Self::Siblings)
    }
}

impl FromMeta for RelationKind {
    fn from_string(value: &str) -> Result<Self, DarlingError> {
        Self::from_tag(value).ok_or_else(|| DarlingError::unknown_value(value))
    }
}

///
/// IncludeSet
///
/// Resolved set of relation kinds eligible for projection. Plain fields
/// never consult this; relation fields appear iff their kind is a member.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IncludeSet(BTreeSet<RelationKind>);

impl IncludeSet {
    #[must_use]
    pub const fn none() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn parents() -> Self {
        RelationKind::ALL
            .into_iter()
            .filter(|kind| kind.is_parent())
            .collect()
    }

    #[must_use]
    pub fn children() -> Self {
        RelationKind::ALL
            .into_iter()
            .filter(|kind| kind.is_child())
            .collect()
    }

    #[must_use]
    pub fn all() -> Self {
        RelationKind::ALL.into_iter().collect()
    }

    #[must_use]
    pub fn contains(&self, kind: RelationKind) -> bool {
        self.0.contains(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<RelationKind> for IncludeSet {
    fn from_iter<I: IntoIterator<Item = RelationKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///
