use vista::Projection;

#[derive(Projection)]
pub struct User {
    pub name: String,
}

#[derive(Projection)]
#[projection(include = "children", suffix = "Content")]
pub struct Post {
    pub title: String,
    #[rel(children)]
    pub comments: Vec<Comment>,
    #[projection(skip)]
    pub internal: u64,
}

#[derive(Projection)]
pub struct Comment {
    pub body: String,
}

fn main() {
    let post = Post {
        title: "hello".to_string(),
        comments: vec![Comment {
            body: "hi".to_string(),
        }],
        internal: 1,
    };

    let content: PostContent = post.to_content();
    assert_eq!(content.comments().len(), 1);
}
