use vista::Projection;

///
/// Zero-field fixtures
///
/// A model with nothing to project still gets a structurally valid, empty
/// projection and a conversion that default-constructs it.
///

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Heartbeat {}

#[derive(Projection)]
#[projection(include = "none", immutable = false)]
pub struct Secrets {
    #[projection(skip)]
    pub token: String,
    #[rel(parent)]
    pub owner: Heartbeat,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_field_models_project_to_an_empty_type() {
        let content: HeartbeatContent = Heartbeat {}.to_content();

        assert_eq!(content, HeartbeatContent {});
    }

    #[test]
    fn skipped_and_excluded_fields_can_empty_a_projection() {
        let secrets = Secrets {
            token: "hunter2".to_string(),
            owner: Heartbeat {},
        };

        // skip drops the token, the `none` policy drops the relation
        assert_eq!(secrets.to_content(), SecretsContent {});
    }

    #[test]
    fn empty_projections_still_carry_the_marker_conformances() {
        let json = serde_json::to_string(&Heartbeat {}.to_content()).expect("serializes");

        assert_eq!(json, "{}");
    }
}
