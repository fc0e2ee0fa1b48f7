use crate::dto::event::EventDto;
use serde::{Deserialize, Serialize};

/// Link between a student and an event; `event` is populated by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegistrationDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub event: Option<EventDto>,
}

/// Body of `GET /api/registrations/my-registrations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MyRegistrations {
    #[serde(default)]
    pub upcoming_events: Vec<RegistrationDto>,
    #[serde(default)]
    pub past_events: Vec<RegistrationDto>,
}

impl MyRegistrations {
    /// Every populated event, upcoming first.
    pub fn events(&self) -> impl Iterator<Item = &EventDto> {
        self.upcoming_events
            .iter()
            .chain(self.past_events.iter())
            .filter_map(|r| r.event.as_ref())
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().map(|e| e.name.clone()).collect()
    }
}

/// Body of `POST /api/registrations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub event_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_skip_unpopulated_registrations() {
        let regs: MyRegistrations = serde_json::from_str(
            r#"{
                "upcomingEvents": [
                    {"_id": "r1", "event": {"_id": "e1", "name": "Tech Fest"}},
                    {"_id": "r2", "event": null}
                ],
                "pastEvents": [{"_id": "r3", "event": {"_id": "e0", "name": "Cultural Night"}}]
            }"#,
        )
        .unwrap();
        assert_eq!(regs.event_names(), vec!["Tech Fest", "Cultural Night"]);
    }

    #[test]
    fn empty_body_is_no_registrations() {
        let regs: MyRegistrations = serde_json::from_str("{}").unwrap();
        assert_eq!(regs, MyRegistrations::default());
    }

    #[test]
    fn create_request_uses_camel_case() {
        let body = serde_json::to_string(&CreateRegistrationRequest {
            event_id: "e1".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"eventId":"e1"}"#);
    }
}
