//! Decodes recorded backend responses the way the pages consume them.

use chrono_tz::Tz;
use shared::calendar::CalendarEntry;
use shared::schedule::rounds_for_sub_event;
use shared::scores::{ranked_results, score_rows, total_label};
use shared::{
    EventForm, EventListResponse, MyRegistrations, RegistrationStatus, ScheduleListResponse,
    SubEventResult, SubEventScores, UserRole,
};

const MY_EVENTS: &str = include_str!("fixtures/my_events.json");
const MY_REGISTRATIONS: &str = include_str!("fixtures/my_registrations.json");
const MY_SCORES: &str = include_str!("fixtures/my_scores.json");
const RESULTS: &str = include_str!("fixtures/results.json");
const SCHEDULES: &str = include_str!("fixtures/schedules.json");

fn my_events() -> EventListResponse {
    serde_json::from_str(MY_EVENTS).expect("my-events fixture")
}

#[test]
fn organizer_events_ignore_extra_fields() {
    let events = my_events().events;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].sub_events[0].rounds[0].scoring_categories.len(), 2);
    assert_eq!(events[1].maximum_students, None);
    assert!(events[1].sub_events.is_empty());
}

#[test]
fn full_event_blocks_registration() {
    let event = &my_events().events[0];
    let outsider = RegistrationStatus::for_user(event, Some("u9"));
    assert!(outsider.is_full);
    assert!(!outsider.can_register());

    let member = RegistrationStatus::for_user(event, Some("u1"));
    assert_eq!(member.button_label(), "Already Registered");
}

#[test]
fn participants_fall_back_to_username() {
    let event = &my_events().events[0];
    let names: Vec<_> = event
        .registered_students
        .iter()
        .map(|s| s.display_name())
        .collect();
    assert_eq!(names, vec!["Asha Rao", "ben"]);
}

#[test]
fn stored_event_hydrates_edit_form() {
    let event = &my_events().events[0];
    let form = EventForm::from_event(event, Tz::UTC);
    assert_eq!(form.name, "Tech Fest 2025");
    assert_eq!(form.start, "2025-04-15T09:00");
    assert_eq!(form.maximum_students, "2");
    assert_eq!(form.sub_events[0].prize_pools[1].amount, "500.5");

    // unchanged form sends the same dates back
    let payload = form.to_payload(Tz::UTC).expect("payload");
    let body = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(body["conductedDates"]["end"], "2025-04-16T18:00:00Z");
}

#[test]
fn calendar_places_event_on_local_start_day() {
    let event = &my_events().events[0];
    let tz: Tz = "Asia/Kolkata".parse().expect("tz");
    let now = chrono::Utc::now();
    let entry = CalendarEntry::from_event(event, UserRole::Student, tz, now);
    assert_eq!(entry.date.to_string(), "2025-04-15");
    assert_eq!(entry.color, "blue");
}

#[test]
fn registrations_list_populated_events() {
    let regs: MyRegistrations = serde_json::from_str(MY_REGISTRATIONS).expect("registrations");
    assert_eq!(regs.upcoming_events.len(), 2);
    assert_eq!(regs.event_names(), vec!["Tech Fest 2025", "Freshers Meet"]);
}

#[test]
fn registered_events_list_students_as_ids() {
    let regs: MyRegistrations = serde_json::from_str(MY_REGISTRATIONS).expect("registrations");
    let event = regs.events().next().expect("populated event");
    assert_eq!(event.registered_students.len(), 2);

    let status = RegistrationStatus::for_user(event, Some("u1"));
    assert!(status.registered);
    assert_eq!(status.seats_taken, 2);
    assert!(!status.is_full);
}

#[test]
fn score_tables() {
    let scores: Vec<SubEventScores> = serde_json::from_str(MY_SCORES).expect("scores");
    let rows = score_rows(&scores[0]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].round_label.as_deref(), Some("Prelims"));
    assert_eq!(rows[0].category, "Creativity");
    assert_eq!(rows[0].score, "7.5");
    assert_eq!(rows[1].round_label, None);
    assert_eq!(rows[2].round_label.as_deref(), Some("r2"));
    assert_eq!(total_label(scores[0].total_score), "24.5");
    assert_eq!(total_label(scores[1].total_score), "N/A");
}

#[test]
fn results_keep_backend_order() {
    let results: Vec<SubEventResult> = serde_json::from_str(RESULTS).expect("results");
    let ranked = ranked_results(results);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].total, "24.5");
    assert_eq!(ranked[1].name, "ben");
    assert_eq!(ranked[1].total, "18");
}

#[test]
fn schedules_by_sub_event() {
    let body: ScheduleListResponse = serde_json::from_str(SCHEDULES).expect("schedules");
    let rounds = rounds_for_sub_event(&body.schedules, "s1");
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].venue.as_deref(), Some("Main Hall"));
    assert!(rounds_for_sub_event(&body.schedules, "s2").is_empty());
}
