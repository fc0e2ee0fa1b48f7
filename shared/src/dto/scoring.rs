use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Body of `POST /api/subevents/rounds`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoundRequest {
    pub event_id: String,
    pub sub_event_id: String,
    #[validate(length(min = 1, message = "Round name is required"))]
    pub name: String,
    pub scoring_categories: Vec<String>,
}

/// Body of `POST /api/subevents/scores`: one participant, one round,
/// an integer per scoring category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoresRequest {
    pub event_id: String,
    pub sub_event_id: String,
    pub round_id: String,
    #[validate(length(min = 1, message = "Select a participant"))]
    pub participant_id: String,
    pub scores: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParticipantRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// One line of `GET /api/subevents/:eventId/:subEventId/results`, already
/// ordered by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubEventResult {
    pub participant: ParticipantRef,
    #[serde(default)]
    pub total: f64,
}

/// A student's scores for one round.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundScores {
    #[serde(default)]
    pub round_id: String,
    #[serde(default)]
    pub round_name: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

/// One entry of `GET /api/registrations/my-scores/:eventId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubEventScores {
    pub sub_event_id: String,
    #[serde(default)]
    pub rounds: Vec<RoundScores>,
    #[serde(default)]
    pub total_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn score_request_serializes_category_map() {
        let mut scores = BTreeMap::new();
        scores.insert("Technical".to_string(), 8);
        scores.insert("Creativity".to_string(), 7);
        let body = serde_json::to_value(SubmitScoresRequest {
            event_id: "e1".into(),
            sub_event_id: "s1".into(),
            round_id: "r1".into(),
            participant_id: "u1".into(),
            scores,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "eventId": "e1",
                "subEventId": "s1",
                "roundId": "r1",
                "participantId": "u1",
                "scores": {"Creativity": 7, "Technical": 8}
            })
        );
    }

    #[test]
    fn my_scores_decode() {
        let scores: Vec<SubEventScores> = serde_json::from_str(
            r#"[{"subEventId":"s1","rounds":[{"roundId":"r1","scores":{"Technical":8.5}}],"totalScore":8.5},
                {"subEventId":"s2"}]"#,
        )
        .unwrap();
        assert_eq!(scores[0].rounds[0].round_name, None);
        assert_eq!(scores[0].rounds[0].scores["Technical"], 8.5);
        assert!(scores[1].rounds.is_empty());
        assert_eq!(scores[1].total_score, None);
    }
}
