use vista::Projection;

///
/// Blog fixtures
///
/// The same model shape derived under each inclusion policy. Field absence
/// is structural here: the literal constructions in the tests only compile
/// because excluded fields are really gone from the derived type.
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

#[derive(Projection)]
#[projection(include = "parent", immutable = false)]
pub struct ParentPost {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(children)]
    pub comments: Vec<Comment>,
}

#[derive(Projection)]
#[projection(include = "children", immutable = false)]
pub struct ChildPost {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(children)]
    pub comments: Vec<Comment>,
}

#[derive(Projection)]
#[projection(include = "none", immutable = false)]
pub struct BarePost {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(children)]
    pub comments: Vec<Comment>,
}

#[derive(Projection)]
#[projection(include = "all", immutable = false)]
pub struct FullPost {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(children)]
    pub comments: Vec<Comment>,
}

#[derive(Projection)]
#[projection(include(custom(parent, siblings)), immutable = false)]
pub struct TaggedPost {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
    #[rel(siblings)]
    pub related: Vec<TaggedPost>,
    #[rel(children)]
    pub comments: Vec<Comment>,
}

///
/// TESTS
///
