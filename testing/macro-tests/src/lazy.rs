use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use vista::{LazyProjection, Projection, RelationLoaded};

///
/// Lazy fixtures
///
/// The loaded-state bookkeeping field is skipped from projection and backs
/// the `RelationLoaded` fixture impl; conversions generated by
/// `LazyProjection` must consult it before touching a relation.
///

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Author {
    pub name: String,
}

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Comment {
    pub body: String,
}

#[derive(LazyProjection)]
#[projection(include = "all", immutable = false)]
pub struct Post {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(children)]
    pub comments: Vec<Comment>,
    #[projection(skip)]
    pub loaded: BTreeSet<&'static str>,
}

impl RelationLoaded for Post {
    fn relation_loaded(&self, field: &str) -> bool {
        self.loaded.contains(field)
    }
}

// Counts how often the nested conversion actually runs: the generated
// `to_content` of `Probed` clones this field.
static PROBE_CLONES: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Probe;

impl Clone for Probe {
    fn clone(&self) -> Self {
        PROBE_CLONES.fetch_add(1, Ordering::SeqCst);
        Self
    }
}

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Probed {
    pub probe: Probe,
}

#[derive(LazyProjection)]
#[projection(include = "all", immutable = false)]
pub struct Probing {
    #[rel(parent)]
    pub target: Probed,
    #[projection(skip)]
    pub loaded: bool,
}

impl RelationLoaded for Probing {
    fn relation_loaded(&self, _field: &str) -> bool {
        self.loaded
    }
}

///
/// TESTS
///
