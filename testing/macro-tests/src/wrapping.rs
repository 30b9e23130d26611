use vista::Projection;

///
/// Wrapping fixtures
///
/// Optional and collection layers must survive projection unchanged for
/// plain fields, and be preserved around the renamed target for relations.
///

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Tag {
    pub label: String,
}

#[derive(Projection)]
#[projection(include = "all", immutable = false)]
pub struct Article {
    pub title: String,
    pub subtitle: Option<String>,
    pub scores: Vec<u64>,
    pub drafts: Option<Vec<String>>,
    // inner wrapping beyond the outermost layers is opaque
    pub revisions: Vec<Option<String>>,
    #[rel(optional_parent)]
    pub editor: Option<Tag>,
    #[rel(children)]
    pub tags: Vec<Tag>,
    #[rel(optional_child)]
    pub extras: Option<Vec<Tag>>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            title: "title".to_string(),
            subtitle: None,
            scores: vec![1, 2, 3],
            drafts: Some(vec!["a".to_string()]),
            revisions: vec![Some("r1".to_string()), None],
            editor: Some(Tag {
                label: "editor".to_string(),
            }),
            tags: vec![Tag {
                label: "tag".to_string(),
            }],
            extras: None,
        }
    }

    #[test]
    fn plain_wrapping_layers_are_preserved_exactly() {
        let content = article().to_content();

        let subtitle: Option<String> = content.subtitle;
        let scores: Vec<u64> = content.scores;
        let drafts: Option<Vec<String>> = content.drafts;
        let revisions: Vec<Option<String>> = content.revisions;

        assert_eq!(subtitle, None);
        assert_eq!(scores, [1, 2, 3]);
        assert_eq!(drafts, Some(vec!["a".to_string()]));
        assert_eq!(revisions, vec![Some("r1".to_string()), None]);
    }

    #[test]
    fn optional_relations_thread_an_optional_chain() {
        let content = article().to_content();

        let editor: Option<TagContent> = content.editor;
        assert_eq!(
            editor,
            Some(TagContent {
                label: "editor".to_string()
            })
        );

        let mut absent = article();
        absent.editor = None;
        assert_eq!(absent.to_content().editor, None);
    }

    #[test]
    fn collection_relations_map_each_element() {
        let content = article().to_content();

        let tags: Vec<TagContent> = content.tags;
        assert_eq!(
            tags,
            vec![TagContent {
                label: "tag".to_string()
            }]
        );
    }

    #[test]
    fn optional_collection_relations_keep_both_layers() {
        let mut loaded = article();
        loaded.extras = Some(vec![Tag {
            label: "extra".to_string(),
        }]);

        let extras: Option<Vec<TagContent>> = loaded.to_content().extras;
        assert_eq!(
            extras,
            Some(vec![TagContent {
                label: "extra".to_string()
            }])
        );

        assert_eq!(article().to_content().extras, None);
    }
}
