use vista::Projection;

///
/// Access fixtures
///
/// Visibility is proven structurally: these tests compile only if the
/// derived types and conversion methods resolve to the requested levels.
///

#[derive(Projection)]
#[projection(include = "none")]
pub struct PublicRow {
    pub id: u64,
}

#[derive(Projection)]
#[projection(access = "crate", include = "none", immutable = false)]
pub(crate) struct CrateRow {
    pub id: u64,
}

// compiled with the tests so the restrictive fixtures stay exercised
#[cfg(test)]
mod sealed {
    use vista::Projection;

    // restrictive model visibility, projection follows it
    #[derive(Projection)]
    #[projection(access = "inherit", include = "none", immutable = false)]
    struct Hidden {
        id: u64,
    }

    // explicit access wins over the model's own visibility
    #[derive(Projection)]
    #[projection(access = "super", include = "none", immutable = false)]
    struct Leaked {
        id: u64,
    }

    pub(super) fn hidden_projection_is_usable_here() -> u64 {
        // `Hidden` and `HiddenContent` are both module-private
        let content: HiddenContent = Hidden { id: 7 }.to_content();
        content.id
    }

    pub(super) fn leaked_content(id: u64) -> LeakedContent {
        Leaked { id }.to_content()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_access_is_the_default() {
        let content: PublicRowContent = PublicRow { id: 2 }.to_content();

        // default immutability exposes reference accessors, not fields
        assert_eq!(*content.id(), 2);
    }

    #[test]
    fn crate_access_is_visible_across_modules() {
        let content: CrateRowContent = CrateRow { id: 1 }.to_content();

        assert_eq!(content.id, 1);
    }

    #[test]
    fn inherited_access_follows_a_private_model() {
        assert_eq!(sealed::hidden_projection_is_usable_here(), 7);
    }

    #[test]
    fn super_access_escapes_the_defining_module() {
        // `LeakedContent` is pub(super), so it resolves here in the parent
        let content: sealed::LeakedContent = sealed::leaked_content(3);

        assert_eq!(content.id, 3);
    }
}
