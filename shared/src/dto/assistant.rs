use crate::dto::common::LooseNumber;
use serde::{Deserialize, Serialize};

/// Question sent to the event assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub question: String,
    /// Names of the events the asker is registered for
    pub registered_events: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedDates {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedAudience {
    #[serde(default)]
    pub departments: Option<Vec<String>>,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedContact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedPrizePool {
    #[serde(default)]
    pub rank: Option<LooseNumber>,
    #[serde(default)]
    pub amount: Option<LooseNumber>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSubEvent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub prize_pools: Vec<ExtractedPrizePool>,
}

/// Event details recovered from an uploaded PDF. Every field is optional;
/// absent or blank values leave the form untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEventDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub conducted_dates: Option<ExtractedDates>,
    #[serde(default)]
    pub targeted_audience: Option<ExtractedAudience>,
    #[serde(default)]
    pub organizing_institution: Option<String>,
    #[serde(default)]
    pub organizing_college: Option<String>,
    #[serde(default)]
    pub maximum_students: Option<LooseNumber>,
    #[serde(default)]
    pub max_events_per_student: Option<LooseNumber>,
    #[serde(default)]
    pub general_rules: Option<Vec<String>>,
    #[serde(default)]
    pub contact_info: Option<ExtractedContact>,
    #[serde(default)]
    pub sub_events: Option<Vec<ExtractedSubEvent>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chat_request_uses_snake_case_wire_names() {
        let body = serde_json::to_value(ChatRequest {
            question: "When is the hackathon?".into(),
            registered_events: vec!["Tech Fest".into()],
        })
        .unwrap();
        assert_eq!(body["registered_events"][0], "Tech Fest");
    }

    #[test]
    fn partial_extraction_decodes() {
        let details: ExtractedEventDetails = serde_json::from_str(
            r#"{"name":"Tech Fest","maximumStudents":"200","conductedDates":{"start":"2025-04-15"},
                "subEvents":[{"name":"Hackathon","prizePools":[{"rank":1,"amount":"5000"}]}]}"#,
        )
        .unwrap();
        assert_eq!(details.name.as_deref(), Some("Tech Fest"));
        assert_eq!(details.maximum_students, Some(LooseNumber::Text("200".into())));
        assert_eq!(details.conducted_dates.unwrap().end, None);
        let subs = details.sub_events.unwrap();
        assert_eq!(subs[0].prize_pools[0].rank, Some(LooseNumber::Integer(1)));
        assert_eq!(details.description, None);
    }
}
