//! ## Crate layout
//! - `Projection` / `LazyProjection`: the derive macros.
//! - `Content`: structural marker every derived projection implements.
//! - `Project`: stable, suffix-independent addressing of the projection.
//! - `RelationLoaded`: the unloaded-sentinel indicator lazy conversions test.
//! - `__reexports`: dependencies generated code references.
//!
//! Deriving `Projection` on a model struct emits a `…Content` peer struct
//! (rename it with `suffix = "..."`) plus a `to_content()` conversion:
//!
//! ```
//! use vista::Projection;
//!
//! #[derive(Projection)]
//! #[projection(include = "children")]
//! pub struct Post {
//!     title: String,
//!     #[rel(children)]
//!     comments: Vec<Comment>,
//! }
//!
//! #[derive(Projection)]
//! pub struct Comment {
//!     body: String,
//! }
//!
//! let post = Post { title: "hello".into(), comments: vec![] };
//! let content: PostContent = post.to_content();
//! assert_eq!(content.title(), "hello");
//! ```
//!
//! Relation fields are tagged `#[rel(parent)]`, `#[rel(optional_parent)]`,
//! `#[rel(children)]`, `#[rel(optional_child)]` or `#[rel(siblings)]`; which
//! of them are projected is decided by `include`. Fields tagged
//! `#[projection(skip)]` never appear. `LazyProjection` additionally guards
//! every relation conversion behind [`RelationLoaded`], so projecting a
//! half-fetched model never touches an unloaded association.

use serde::{Serialize, de::DeserializeOwned};

pub use vista_derive::{LazyProjection, Projection};

/// re-exports
///
/// generated code references these, which stops the user having to add the
/// underlying dependencies to their own Cargo.toml
pub mod __reexports {
    pub use serde;
    pub use serde::{Deserialize, Serialize};
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Content
///
/// Structural marker for derived projections: debuggable, serializable in
/// both directions. Implemented by every generated projection type.
///

pub trait Content: core::fmt::Debug + Serialize + DeserializeOwned {}

///
/// Project
///
/// Suffix-independent addressing of a model's projection. The derive
/// implements this next to the suffix-named conversion method, so generic
/// code can write `<Post as Project>::Output` without knowing the suffix.
///

pub trait Project {
    type Output;

    /// Builds the projection; delegates to the suffix-named method.
    fn project(&self) -> Self::Output;
}

///
/// RelationLoaded
///
/// Reports whether a lazily fetched association has been materialized.
/// Conversions generated by `LazyProjection` consult this before touching a
/// relation field and fall back to `None` or an empty collection when the
/// association is still unloaded, so projection never triggers a fetch.
///
/// The ORM integration (or a test fixture) implements this per model; the
/// key is the field name as declared.
///

pub trait RelationLoaded {
    fn relation_loaded(&self, field: &str) -> bool;
}
