use vista::{Project, Projection};

///
/// Naming fixtures
///

#[derive(Projection)]
#[projection(suffix = "Summary", immutable = false)]
pub struct Invoice {
    pub total: u64,
    #[rel(children)]
    pub lines: Vec<Line>,
}

#[derive(Projection)]
#[projection(suffix = "Summary", immutable = false)]
pub struct Line {
    pub amount: u64,
}

#[derive(Projection)]
#[projection(suffix = "ApiResponse", include = "none", immutable = false)]
pub struct Health {
    pub status: String,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Invoice {
        Invoice {
            total: 10,
            lines: vec![Line { amount: 10 }],
        }
    }

    #[test]
    fn suffix_names_the_derived_type_and_the_method() {
        let summary: InvoiceSummary = invoice().to_summary();

        assert_eq!(summary.total, 10);
        assert_eq!(summary.lines, vec![LineSummary { amount: 10 }]);
    }

    #[test]
    fn multi_word_suffixes_snake_case_into_the_method_name() {
        let response: HealthApiResponse = Health {
            status: "ok".to_string(),
        }
        .to_api_response();

        assert_eq!(response.status, "ok");
    }

    #[test]
    fn project_addresses_the_projection_without_the_suffix() {
        let projected: <Invoice as Project>::Output = invoice().project();

        assert_eq!(projected, invoice().to_summary());
    }

    #[test]
    fn borrowed_from_conversion_delegates_to_the_method() {
        let invoice = invoice();
        let summary: InvoiceSummary = (&invoice).into();

        assert_eq!(summary, invoice.to_summary());
    }

    #[test]
    fn facade_version_matches_the_workspace() {
        assert_eq!(vista::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
