use crate::dto::scoring::SubmitScoresRequest;
use crate::error::Result;
use std::collections::BTreeMap;
use validator::Validate;

/// Reads the leading integer of a number input the way browsers hand it
/// over ("12.5" is 12); anything unreadable scores 0.
fn parse_score(raw: &str) -> i64 {
    let raw = raw.trim();
    let digits_end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..digits_end].parse().unwrap_or(0)
}

/// Per-round score entry for one participant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSheet {
    pub participant_id: String,
    pub scores: BTreeMap<String, i64>,
}

impl ScoreSheet {
    pub fn select_participant(&mut self, participant_id: impl Into<String>) {
        self.participant_id = participant_id.into();
    }

    pub fn set_score(&mut self, category: &str, raw: &str) {
        self.scores.insert(category.to_string(), parse_score(raw));
    }

    /// Input value for a category; unset and zero scores show empty.
    pub fn display_value(&self, category: &str) -> String {
        match self.scores.get(category) {
            Some(0) | None => String::new(),
            Some(score) => score.to_string(),
        }
    }

    pub fn to_request(
        &self,
        event_id: &str,
        sub_event_id: &str,
        round_id: &str,
    ) -> Result<SubmitScoresRequest> {
        let request = SubmitScoresRequest {
            event_id: event_id.to_string(),
            sub_event_id: sub_event_id.to_string(),
            round_id: round_id.to_string(),
            participant_id: self.participant_id.clone(),
            scores: self.scores.clone(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn clear(&mut self) {
        *self = ScoreSheet::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("8", 8)]
    #[test_case(" 10 ", 10)]
    #[test_case("7.9", 7)]
    #[test_case("-2", -2)]
    #[test_case("", 0)]
    #[test_case("abc", 0)]
    fn score_parsing(raw: &str, expected: i64) {
        assert_eq!(parse_score(raw), expected);
    }

    #[test]
    fn display_hides_unset_and_zero() {
        let mut sheet = ScoreSheet::default();
        sheet.set_score("Technical", "9");
        sheet.set_score("Design", "x");
        assert_eq!(sheet.display_value("Technical"), "9");
        assert_eq!(sheet.display_value("Design"), "");
        assert_eq!(sheet.display_value("Speed"), "");
    }

    #[test]
    fn request_requires_participant() {
        let mut sheet = ScoreSheet::default();
        sheet.set_score("Technical", "9");
        assert!(sheet.to_request("e1", "s1", "r1").is_err());

        sheet.select_participant("u1");
        let request = sheet.to_request("e1", "s1", "r1").unwrap();
        assert_eq!(request.participant_id, "u1");
        assert_eq!(request.scores.get("Technical"), Some(&9));
    }

    #[test]
    fn clear_resets_sheet() {
        let mut sheet = ScoreSheet::default();
        sheet.select_participant("u1");
        sheet.set_score("Technical", "9");
        sheet.clear();
        assert_eq!(sheet, ScoreSheet::default());
    }
}
