use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Time and place assigned to one round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSlot {
    pub round_id: String,
    #[serde(default)]
    pub name: String,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub venue: Option<String>,
}

/// Schedule of every round of one sub-event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubEventSchedule {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub sub_event_id: String,
    #[serde(default)]
    pub sub_event_name: String,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub rounds: Vec<RoundSlot>,
}

/// Body of `GET /api/scheduling/schedule`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleListResponse {
    #[serde(default)]
    pub schedules: Vec<SubEventSchedule>,
}

/// Body of `POST /api/scheduling/optimize`; an empty scope asks the
/// optimizer to consider every event the organizer owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptimizeResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub schedules: Vec<SubEventSchedule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schedule_list_decodes() {
        let list: ScheduleListResponse = serde_json::from_str(
            r#"{"schedules":[{"_id":"sc1","subEventId":"s1","subEventName":"Hackathon","priority":2,
                "rounds":[{"roundId":"r1","name":"Round 1",
                           "timeSlot":{"start":"2025-04-15T09:00:00Z","end":"2025-04-15T11:00:00Z"},
                           "venue":"Main Hall"}]}]}"#,
        )
        .unwrap();
        let schedule = &list.schedules[0];
        assert_eq!(schedule.priority, Some(2));
        assert_eq!(schedule.rounds[0].venue.as_deref(), Some("Main Hall"));
    }

    #[test]
    fn optimize_request_without_scope_is_empty_object() {
        assert_eq!(serde_json::to_string(&OptimizeRequest::default()).unwrap(), "{}");
    }
}
