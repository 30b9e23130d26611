use vista::{LazyProjection, Projection, RelationLoaded};

#[derive(Projection)]
pub struct Author {
    pub name: String,
}

#[derive(LazyProjection)]
#[projection(include = "all")]
pub struct Post {
    pub title: String,
    #[rel(parent)]
    pub author: Author,
}

impl RelationLoaded for Post {
    fn relation_loaded(&self, _field: &str) -> bool {
        false
    }
}

fn main() {
    let post = Post {
        title: "hello".to_string(),
        author: Author {
            name: "ada".to_string(),
        },
    };

    assert!(post.to_content().author().is_none());
}
