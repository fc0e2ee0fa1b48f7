pub mod dto {
    pub mod analytics;
    pub mod assistant;
    pub mod auth;
    pub mod common;
    pub mod event;
    pub mod registration;
    pub mod scheduling;
    pub mod scoring;
    pub mod user;
}

pub mod forms {
    pub mod event_form;
    pub mod register_form;
    pub mod round_form;
    pub mod score_form;
}

pub mod calendar;
pub mod catalog;
pub mod datetime;
pub mod error;
pub mod navigation;
pub mod registration;
pub mod schedule;
pub mod scores;

// Re-export commonly used items
pub use error::{ApiError, Result, SharedError};

// Re-export DTOs
pub use dto::{
    analytics::{DepartmentParticipation, InsightsResponse, OverallInsights, StatusCount},
    assistant::{ChatRequest, ChatResponse, ExtractedEventDetails},
    auth::{AuthResponse, LoginRequest, RegisterRequest},
    common::{ErrorResponse, LooseNumber},
    event::{
        ContactInfo, ConductedDates, EventDto, EventListResponse, EventPayload, PrizePool,
        RoundDto, StudentRef, SubEventDto, TargetedAudience,
    },
    registration::{CreateRegistrationRequest, MyRegistrations, RegistrationDto},
    scheduling::{
        OptimizeRequest, OptimizeResponse, RoundSlot, ScheduleListResponse, SubEventSchedule,
        TimeSlot,
    },
    scoring::{
        CreateRoundRequest, ParticipantRef, RoundScores, SubEventResult, SubEventScores,
        SubmitScoresRequest,
    },
    user::{UserDto, UserRole},
};

// Re-export page state
pub use forms::{
    event_form::EventForm, register_form::RegisterForm, round_form::RoundForm,
    score_form::ScoreSheet,
};
pub use registration::RegistrationStatus;
pub use schedule::{ScheduleBoard, ScheduleEditor};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::event_form::{DateBound, EventTextField, SubEventField};
    use chrono_tz::Tz;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn organizer_creates_then_edits_an_event() {
        let mut form = EventForm::default();
        form.set_text(EventTextField::Name, "Tech Fest 2025");
        form.set_text(EventTextField::Description, "Annual technology festival");
        form.set_date(DateBound::Start, "2025-04-15T09:00");
        form.set_date(DateBound::End, "2025-04-16T18:00");
        form.add_sub_event();
        form.set_sub_event(0, SubEventField::Name, "Hackathon");

        let payload = form.to_payload(Tz::UTC).unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["conductedDates"]["start"], "2025-04-15T09:00:00Z");
        assert_eq!(body["maximumStudents"], 100);
        assert_eq!(body["subEvents"][0]["name"], "Hackathon");

        // the backend echoes the stored event, which hydrates the edit form
        let mut stored = body.clone();
        stored["_id"] = "e1".into();
        stored["subEvents"][0]["_id"] = "s1".into();
        let event: EventDto = serde_json::from_value(stored).unwrap();
        let edit = EventForm::from_event(&event, Tz::UTC);
        assert_eq!(edit.start, "2025-04-15T09:00");
        assert_eq!(edit.maximum_students, "100");
        assert_eq!(edit.sub_events[0].id.as_deref(), Some("s1"));
    }

    #[test_log::test]
    fn student_registration_flow() {
        let event: EventDto = serde_json::from_str(
            r#"{"_id":"e1","name":"Quiz","maximumStudents":1,"registeredStudents":[]}"#,
        )
        .unwrap();
        let status = RegistrationStatus::for_user(&event, Some("u1"));
        assert!(status.can_register());

        let request = CreateRegistrationRequest {
            event_id: event.id.clone(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"eventId":"e1"}"#
        );
    }
}
