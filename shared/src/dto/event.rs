use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Start and end instants of an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConductedDates {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

/// Departments and courses an event is aimed at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetedAudience {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Award paid to a finishing rank of a sub-event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrizePool {
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub amount: f64,
}

/// A scoring stage within a sub-event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scoring_categories: Vec<String>,
}

/// A competition track within an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubEventDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prize_pools: Vec<PrizePool>,
    #[serde(default)]
    pub rounds: Vec<RoundDto>,
}

/// A student listed on an event. The backend sends either the populated
/// user or its bare id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "StudentShape")]
pub struct StudentRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StudentShape {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        username: String,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl From<StudentShape> for StudentRef {
    fn from(shape: StudentShape) -> Self {
        match shape {
            StudentShape::Populated { id, username, name } => StudentRef { id, username, name },
            StudentShape::Id(id) => StudentRef {
                id,
                ..Default::default()
            },
        }
    }
}

impl StudentRef {
    /// Name, then username, then the bare id of an unpopulated reference.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => &self.id,
        }
    }
}

/// Top-level record organizers create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub conducted_dates: ConductedDates,
    #[serde(default)]
    pub targeted_audience: TargetedAudience,
    #[serde(default)]
    pub organizing_institution: String,
    #[serde(default)]
    pub organizing_college: String,
    #[serde(default)]
    pub maximum_students: Option<u32>,
    #[serde(default)]
    pub max_events_per_student: Option<u32>,
    #[serde(default)]
    pub general_rules: Vec<String>,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub sub_events: Vec<SubEventDto>,
    #[serde(default)]
    pub registered_students: Vec<StudentRef>,
    #[serde(default)]
    pub status: Option<String>,
}

impl EventDto {
    pub fn sub_event(&self, sub_event_id: &str) -> Option<&SubEventDto> {
        self.sub_events.iter().find(|s| s.id == sub_event_id)
    }

    pub fn has_student(&self, user_id: &str) -> bool {
        self.registered_students.iter().any(|s| s.id == user_id)
    }
}

/// Wrapper of `GET /api/events/organizer/my-events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventListResponse {
    #[serde(default)]
    pub events: Vec<EventDto>,
}

/// Dates as sent on create/update; both bounds are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Sub-event as sent on create/update. Ids and rounds are carried through
/// unchanged on edit so the backend keeps existing tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubEventPayload {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub overview: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub prize_pools: Vec<PrizePool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundDto>,
}

/// Body of `POST /api/events` and `PUT /api/events/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub conducted_dates: PayloadDates,
    pub targeted_audience: TargetedAudience,
    pub organizing_institution: String,
    pub organizing_college: String,
    #[validate(range(min = 1, message = "Maximum students must be at least 1"))]
    pub maximum_students: u32,
    #[validate(range(min = 1, message = "Max events per student must be at least 1"))]
    pub max_events_per_student: u32,
    pub general_rules: Vec<String>,
    pub contact_info: ContactInfo,
    pub sub_events: Vec<SubEventPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EVENT_JSON: &str = r#"{
        "_id": "e1",
        "name": "Tech Fest 2025",
        "description": "Annual technology festival",
        "conductedDates": {"start": "2025-04-15T09:00:00.000Z", "end": "2025-04-16T18:00:00.000Z"},
        "targetedAudience": {"departments": ["Computer Science"], "courses": ["B.Tech"]},
        "maximumStudents": 2,
        "subEvents": [
            {"_id": "s1", "name": "Hackathon", "prizePools": [{"rank": 1, "amount": 1000}],
             "rounds": [{"_id": "r1", "name": "Round 1", "scoringCategories": ["Technical"]}]}
        ],
        "registeredStudents": [{"_id": "u1", "username": "asha"}],
        "createdBy": "o1"
    }"#;

    #[test]
    fn event_decodes_with_missing_optional_fields() {
        let event: EventDto = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.name, "Tech Fest 2025");
        assert_eq!(event.maximum_students, Some(2));
        assert_eq!(event.max_events_per_student, None);
        assert!(event.general_rules.is_empty());
        assert_eq!(event.contact_info, ContactInfo::default());
        let sub = event.sub_event("s1").unwrap();
        assert_eq!(sub.prize_pools, vec![PrizePool { rank: 1, amount: 1000.0 }]);
        assert_eq!(sub.rounds[0].scoring_categories, vec!["Technical".to_string()]);
        assert!(event.has_student("u1"));
        assert!(!event.has_student("u2"));
    }

    #[test]
    fn event_without_dates_still_decodes() {
        let event: EventDto =
            serde_json::from_str(r#"{"_id":"e2","name":"Draft","conductedDates":{}}"#).unwrap();
        assert_eq!(event.conducted_dates, ConductedDates::default());
    }

    #[test]
    fn student_display_name_falls_back_to_username() {
        let named = StudentRef {
            id: "u1".into(),
            username: "asha".into(),
            name: Some("Asha Rao".into()),
        };
        let bare = StudentRef {
            id: "u2".into(),
            username: "ravi".into(),
            name: Some(" ".into()),
        };
        assert_eq!(named.display_name(), "Asha Rao");
        assert_eq!(bare.display_name(), "ravi");
    }

    #[test]
    fn registered_students_may_be_bare_ids() {
        let event: EventDto = serde_json::from_str(
            r#"{"_id":"e1","name":"Quiz","maximumStudents":2,
                "registeredStudents":["u1",{"_id":"u2","username":"ravi"}]}"#,
        )
        .unwrap();
        assert_eq!(event.registered_students.len(), 2);
        assert!(event.has_student("u1"));
        assert!(event.has_student("u2"));
        assert_eq!(event.registered_students[0].display_name(), "u1");
        assert_eq!(event.registered_students[1].display_name(), "ravi");
    }

    #[test]
    fn sub_event_payload_omits_unknown_ids() {
        let payload = SubEventPayload {
            name: "Quiz".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("rounds").is_none());
        assert_eq!(json["prizePools"], serde_json::json!([]));
    }
}
