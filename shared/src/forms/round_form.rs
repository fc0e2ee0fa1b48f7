use crate::dto::scoring::CreateRoundRequest;
use crate::error::Result;
use validator::Validate;

/// Splits a comma separated category list, trimming and dropping blanks.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect()
}

/// "Add round" form of a sub-event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundForm {
    pub name: String,
    /// Raw comma separated input
    pub categories: String,
}

impl RoundForm {
    pub fn to_request(&self, event_id: &str, sub_event_id: &str) -> Result<CreateRoundRequest> {
        let request = CreateRoundRequest {
            event_id: event_id.to_string(),
            sub_event_id: sub_event_id.to_string(),
            name: self.name.trim().to_string(),
            scoring_categories: parse_categories(&self.categories),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn clear(&mut self) {
        *self = RoundForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Technical, Presentation ,Creativity", vec!["Technical", "Presentation", "Creativity"])]
    #[case(" , ,", vec![])]
    #[case("", vec![])]
    #[case("Speed,,Accuracy,", vec!["Speed", "Accuracy"])]
    fn categories_are_split_and_trimmed(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_categories(raw), expected);
    }

    #[test]
    fn request_carries_ids_and_categories() {
        let form = RoundForm {
            name: "Round 1".into(),
            categories: "Technical, Design".into(),
        };
        let request = form.to_request("e1", "s1").unwrap();
        assert_eq!(request.event_id, "e1");
        assert_eq!(request.sub_event_id, "s1");
        assert_eq!(request.scoring_categories, vec!["Technical", "Design"]);
    }

    #[test]
    fn name_is_required() {
        let form = RoundForm {
            name: "   ".into(),
            categories: "Technical".into(),
        };
        assert!(form.to_request("e1", "s1").is_err());
    }
}
