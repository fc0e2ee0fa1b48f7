//! State of the event create/edit form.
//!
//! Inputs are held exactly as typed; conversion to typed values happens once,
//! in [`EventForm::to_payload`].

use crate::datetime::{parse_datetime_local, parse_loose, to_datetime_local};
use crate::dto::assistant::{ExtractedEventDetails, ExtractedSubEvent};
use crate::dto::event::{
    ContactInfo, EventDto, EventPayload, PayloadDates, PrizePool, RoundDto, SubEventPayload,
    TargetedAudience,
};
use crate::error::{Result, SharedError};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use validator::Validate;

pub const DEFAULT_MAXIMUM_STUDENTS: u32 = 100;
pub const DEFAULT_MAX_EVENTS_PER_STUDENT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTextField {
    Name,
    Description,
    OrganizingInstitution,
    OrganizingCollege,
    MaximumStudents,
    MaxEventsPerStudent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
}

/// The free-form string lists edited through tag inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagList {
    Departments,
    Courses,
    GeneralRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubEventField {
    Name,
    Overview,
    Venue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeField {
    Rank,
    Amount,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrizePoolForm {
    pub rank: String,
    pub amount: String,
}

impl PrizePoolForm {
    fn to_prize_pool(&self) -> PrizePool {
        PrizePool {
            rank: self.rank.trim().parse().unwrap_or(0),
            amount: self
                .amount
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite())
                .unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubEventForm {
    /// Backend id of a sub-event loaded for editing
    pub id: Option<String>,
    pub name: String,
    pub overview: String,
    pub venue: String,
    /// Carried through untouched; the form has no input for it
    pub time: Option<DateTime<Utc>>,
    /// Carried through untouched so edits keep existing rounds
    pub rounds: Vec<RoundDto>,
    pub prize_pools: Vec<PrizePoolForm>,
}

impl SubEventForm {
    fn to_payload(&self) -> SubEventPayload {
        SubEventPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            overview: self.overview.clone(),
            venue: self.venue.clone(),
            time: self.time,
            prize_pools: self.prize_pools.iter().map(PrizePoolForm::to_prize_pool).collect(),
            rounds: self.rounds.clone(),
        }
    }

    fn from_extracted(extracted: ExtractedSubEvent) -> Self {
        SubEventForm {
            name: extracted.name.unwrap_or_default(),
            overview: extracted.overview.unwrap_or_default(),
            venue: extracted.venue.unwrap_or_default(),
            prize_pools: extracted
                .prize_pools
                .into_iter()
                .map(|prize| PrizePoolForm {
                    rank: prize.rank.and_then(|r| r.to_input()).unwrap_or_default(),
                    amount: prize.amount.and_then(|a| a.to_input()).unwrap_or_default(),
                })
                .collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub departments: Vec<String>,
    pub courses: Vec<String>,
    pub organizing_institution: String,
    pub organizing_college: String,
    pub maximum_students: String,
    pub max_events_per_student: String,
    pub general_rules: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub sub_events: Vec<SubEventForm>,
}

/// Blank or unparseable input takes the default; zero is kept so validation reports it.
fn parse_limit(raw: &str, default: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(default)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty<T>(value: Option<Vec<T>>) -> Option<Vec<T>> {
    value.filter(|v| !v.is_empty())
}

impl EventForm {
    pub fn text(&self, field: EventTextField) -> &str {
        match field {
            EventTextField::Name => &self.name,
            EventTextField::Description => &self.description,
            EventTextField::OrganizingInstitution => &self.organizing_institution,
            EventTextField::OrganizingCollege => &self.organizing_college,
            EventTextField::MaximumStudents => &self.maximum_students,
            EventTextField::MaxEventsPerStudent => &self.max_events_per_student,
        }
    }

    pub fn set_text(&mut self, field: EventTextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EventTextField::Name => self.name = value,
            EventTextField::Description => self.description = value,
            EventTextField::OrganizingInstitution => self.organizing_institution = value,
            EventTextField::OrganizingCollege => self.organizing_college = value,
            EventTextField::MaximumStudents => self.maximum_students = value,
            EventTextField::MaxEventsPerStudent => self.max_events_per_student = value,
        }
    }

    pub fn set_date(&mut self, bound: DateBound, value: impl Into<String>) {
        match bound {
            DateBound::Start => self.start = value.into(),
            DateBound::End => self.end = value.into(),
        }
    }

    pub fn set_contact(&mut self, field: ContactField, value: impl Into<String>) {
        match field {
            ContactField::Email => self.contact_email = value.into(),
            ContactField::Phone => self.contact_phone = value.into(),
        }
    }

    pub fn tags(&self, list: TagList) -> &[String] {
        match list {
            TagList::Departments => &self.departments,
            TagList::Courses => &self.courses,
            TagList::GeneralRules => &self.general_rules,
        }
    }

    fn tags_mut(&mut self, list: TagList) -> &mut Vec<String> {
        match list {
            TagList::Departments => &mut self.departments,
            TagList::Courses => &mut self.courses,
            TagList::GeneralRules => &mut self.general_rules,
        }
    }

    /// Appends a trimmed tag; returns false when the value was blank.
    pub fn add_tag(&mut self, list: TagList, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.tags_mut(list).push(value.to_string());
        true
    }

    pub fn remove_tag(&mut self, list: TagList, index: usize) {
        let tags = self.tags_mut(list);
        if index < tags.len() {
            tags.remove(index);
        }
    }

    pub fn add_sub_event(&mut self) {
        self.sub_events.push(SubEventForm::default());
    }

    pub fn remove_sub_event(&mut self, index: usize) {
        if index < self.sub_events.len() {
            self.sub_events.remove(index);
        }
    }

    pub fn set_sub_event(&mut self, index: usize, field: SubEventField, value: impl Into<String>) {
        let Some(sub) = self.sub_events.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            SubEventField::Name => sub.name = value,
            SubEventField::Overview => sub.overview = value,
            SubEventField::Venue => sub.venue = value,
        }
    }

    pub fn add_prize_pool(&mut self, sub_index: usize) {
        if let Some(sub) = self.sub_events.get_mut(sub_index) {
            sub.prize_pools.push(PrizePoolForm::default());
        }
    }

    pub fn remove_prize_pool(&mut self, sub_index: usize, prize_index: usize) {
        if let Some(sub) = self.sub_events.get_mut(sub_index) {
            if prize_index < sub.prize_pools.len() {
                sub.prize_pools.remove(prize_index);
            }
        }
    }

    pub fn set_prize_pool(
        &mut self,
        sub_index: usize,
        prize_index: usize,
        field: PrizeField,
        value: impl Into<String>,
    ) {
        let Some(prize) = self
            .sub_events
            .get_mut(sub_index)
            .and_then(|sub| sub.prize_pools.get_mut(prize_index))
        else {
            return;
        };
        match field {
            PrizeField::Rank => prize.rank = value.into(),
            PrizeField::Amount => prize.amount = value.into(),
        }
    }

    /// Labels of the required inputs that are still empty.
    pub fn missing_required(&self) -> Vec<String> {
        [
            ("Name", &self.name),
            ("Description", &self.description),
            ("Start Date", &self.start),
            ("End Date", &self.end),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label.to_string())
        .collect()
    }

    /// Builds the request body, reading date inputs as wall-clock time in `tz`.
    pub fn to_payload(&self, tz: Tz) -> Result<EventPayload> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SharedError::MissingFields(missing));
        }

        let payload = EventPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            conducted_dates: PayloadDates {
                start: parse_datetime_local(&self.start, tz)?,
                end: parse_datetime_local(&self.end, tz)?,
            },
            targeted_audience: TargetedAudience {
                departments: self.departments.clone(),
                courses: self.courses.clone(),
            },
            organizing_institution: self.organizing_institution.clone(),
            organizing_college: self.organizing_college.clone(),
            maximum_students: parse_limit(&self.maximum_students, DEFAULT_MAXIMUM_STUDENTS),
            max_events_per_student: parse_limit(
                &self.max_events_per_student,
                DEFAULT_MAX_EVENTS_PER_STUDENT,
            ),
            general_rules: self.general_rules.clone(),
            contact_info: ContactInfo {
                email: self.contact_email.clone(),
                phone: self.contact_phone.clone(),
            },
            sub_events: self.sub_events.iter().map(SubEventForm::to_payload).collect(),
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Hydrates the form from a stored event for editing.
    pub fn from_event(event: &EventDto, tz: Tz) -> Self {
        let date_input = |instant: Option<&DateTime<Utc>>| {
            instant
                .map(|i| to_datetime_local(i, tz))
                .unwrap_or_default()
        };

        EventForm {
            name: event.name.clone(),
            description: event.description.clone(),
            start: date_input(event.conducted_dates.start.as_ref()),
            end: date_input(event.conducted_dates.end.as_ref()),
            departments: event.targeted_audience.departments.clone(),
            courses: event.targeted_audience.courses.clone(),
            organizing_institution: event.organizing_institution.clone(),
            organizing_college: event.organizing_college.clone(),
            maximum_students: event
                .maximum_students
                .map(|n| n.to_string())
                .unwrap_or_default(),
            max_events_per_student: event
                .max_events_per_student
                .map(|n| n.to_string())
                .unwrap_or_default(),
            general_rules: event.general_rules.clone(),
            contact_email: event.contact_info.email.clone(),
            contact_phone: event.contact_info.phone.clone(),
            sub_events: event
                .sub_events
                .iter()
                .map(|sub| SubEventForm {
                    id: Some(sub.id.clone()).filter(|id| !id.is_empty()),
                    name: sub.name.clone(),
                    overview: sub.overview.clone(),
                    venue: sub.venue.clone(),
                    time: sub.time,
                    rounds: sub.rounds.clone(),
                    prize_pools: sub
                        .prize_pools
                        .iter()
                        .map(|prize| PrizePoolForm {
                            rank: prize.rank.to_string(),
                            amount: prize.amount.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Overlays details extracted from a PDF. Absent or blank values keep
    /// whatever the organizer already typed.
    pub fn merge_extracted(&mut self, extracted: ExtractedEventDetails, tz: Tz) {
        if let Some(name) = non_blank(extracted.name) {
            self.name = name;
        }
        if let Some(description) = non_blank(extracted.description) {
            self.description = description;
        }
        if let Some(dates) = extracted.conducted_dates {
            let as_input = |raw: Option<String>| {
                non_blank(raw)
                    .and_then(|raw| parse_loose(&raw, tz))
                    .map(|instant| to_datetime_local(&instant, tz))
            };
            if let Some(start) = as_input(dates.start) {
                self.start = start;
            }
            if let Some(end) = as_input(dates.end) {
                self.end = end;
            }
        }
        if let Some(audience) = extracted.targeted_audience {
            if let Some(departments) = non_empty(audience.departments) {
                self.departments = departments;
            }
            if let Some(courses) = non_empty(audience.courses) {
                self.courses = courses;
            }
        }
        if let Some(institution) = non_blank(extracted.organizing_institution) {
            self.organizing_institution = institution;
        }
        if let Some(college) = non_blank(extracted.organizing_college) {
            self.organizing_college = college;
        }
        if let Some(max) = extracted.maximum_students.and_then(|n| n.to_input()) {
            self.maximum_students = max;
        }
        if let Some(max) = extracted.max_events_per_student.and_then(|n| n.to_input()) {
            self.max_events_per_student = max;
        }
        if let Some(rules) = non_empty(extracted.general_rules) {
            self.general_rules = rules;
        }
        if let Some(contact) = extracted.contact_info {
            if let Some(email) = non_blank(contact.email) {
                self.contact_email = email;
            }
            if let Some(phone) = non_blank(contact.phone) {
                self.contact_phone = phone;
            }
        }
        if let Some(sub_events) = non_empty(extracted.sub_events) {
            self.sub_events = sub_events
                .into_iter()
                .map(SubEventForm::from_extracted)
                .collect();
        }
    }

    pub fn reset(&mut self) {
        *self = EventForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::resolve_timezone;
    use crate::dto::common::LooseNumber;
    use crate::dto::assistant::{ExtractedContact, ExtractedDates, ExtractedPrizePool};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use test_case::test_case;

    fn filled_form() -> EventForm {
        let mut form = EventForm::default();
        form.set_text(EventTextField::Name, "Tech Fest 2025");
        form.set_text(EventTextField::Description, "Annual technology festival");
        form.set_date(DateBound::Start, "2025-04-15T09:00");
        form.set_date(DateBound::End, "2025-04-16T18:00");
        form
    }

    #[fixture]
    fn filled() -> EventForm {
        filled_form()
    }

    #[test]
    fn tags_are_trimmed_and_blank_ones_ignored() {
        let mut form = EventForm::default();
        assert!(form.add_tag(TagList::Departments, "  Computer Science "));
        assert!(!form.add_tag(TagList::Departments, "   "));
        assert!(form.add_tag(TagList::GeneralRules, "Bring ID"));
        assert_eq!(form.tags(TagList::Departments), ["Computer Science".to_string()]);
        assert_eq!(form.tags(TagList::GeneralRules).len(), 1);
        assert!(form.tags(TagList::Courses).is_empty());
    }

    #[test]
    fn remove_tag_out_of_range_is_noop() {
        let mut form = EventForm::default();
        form.add_tag(TagList::Courses, "B.Tech");
        form.add_tag(TagList::Courses, "M.Tech");
        form.remove_tag(TagList::Courses, 5);
        assert_eq!(form.courses.len(), 2);
        form.remove_tag(TagList::Courses, 0);
        assert_eq!(form.courses, vec!["M.Tech".to_string()]);
    }

    #[test]
    fn sub_event_and_prize_pool_editing() {
        let mut form = EventForm::default();
        form.add_sub_event();
        form.add_sub_event();
        form.set_sub_event(1, SubEventField::Name, "Hackathon");
        form.set_sub_event(9, SubEventField::Name, "ignored");
        form.add_prize_pool(1);
        form.add_prize_pool(7);
        form.set_prize_pool(1, 0, PrizeField::Rank, "1");
        form.set_prize_pool(1, 0, PrizeField::Amount, "5000");
        form.set_prize_pool(1, 3, PrizeField::Amount, "ignored");
        form.remove_sub_event(0);

        assert_eq!(form.sub_events.len(), 1);
        assert_eq!(form.sub_events[0].name, "Hackathon");
        assert_eq!(
            form.sub_events[0].prize_pools,
            vec![PrizePoolForm {
                rank: "1".into(),
                amount: "5000".into()
            }]
        );

        form.remove_prize_pool(0, 4);
        assert_eq!(form.sub_events[0].prize_pools.len(), 1);
        form.remove_prize_pool(0, 0);
        assert!(form.sub_events[0].prize_pools.is_empty());
    }

    #[test]
    fn missing_required_lists_empty_fields() {
        let mut form = EventForm::default();
        form.set_text(EventTextField::Name, "Quiz Night");
        assert_eq!(
            form.missing_required(),
            vec!["Description", "Start Date", "End Date"]
        );
        let err = form.to_payload(Tz::UTC).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Description, Start Date, End Date"
        );
    }

    #[rstest]
    fn payload_applies_defaults(filled: EventForm) {
        let payload = filled.to_payload(Tz::UTC).unwrap();
        assert_eq!(payload.maximum_students, DEFAULT_MAXIMUM_STUDENTS);
        assert_eq!(payload.max_events_per_student, DEFAULT_MAX_EVENTS_PER_STUDENT);
        assert_eq!(
            payload.conducted_dates.start.to_rfc3339(),
            "2025-04-15T09:00:00+00:00"
        );
    }

    #[rstest]
    fn payload_converts_dates_in_browser_timezone(filled: EventForm) {
        let payload = filled.to_payload(resolve_timezone("Asia/Kolkata")).unwrap();
        assert_eq!(
            payload.conducted_dates.end.to_rfc3339(),
            "2025-04-16T12:30:00+00:00"
        );
    }

    #[test_case("250", 250 ; "number")]
    #[test_case(" 40 ", 40 ; "padded")]
    #[test_case("", 100 ; "blank")]
    #[test_case("lots", 100 ; "garbage")]
    fn maximum_students_parsing(raw: &str, expected: u32) {
        let mut form = filled_form();
        form.set_text(EventTextField::MaximumStudents, raw);
        assert_eq!(form.to_payload(Tz::UTC).unwrap().maximum_students, expected);
    }

    #[test_case(EventTextField::MaximumStudents, "Maximum students must be at least 1" ; "students")]
    #[test_case(EventTextField::MaxEventsPerStudent, "Max events per student must be at least 1" ; "events per student")]
    fn zero_limit_is_rejected(field: EventTextField, message: &str) {
        let mut form = filled_form();
        form.set_text(field, "0");
        match form.to_payload(Tz::UTC) {
            Err(SharedError::Validation(text)) => assert!(text.contains(message), "{}", text),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[rstest]
    fn prize_values_default_to_zero(mut filled: EventForm) {
        filled.add_sub_event();
        filled.add_prize_pool(0);
        filled.add_prize_pool(0);
        filled.set_prize_pool(0, 0, PrizeField::Rank, "2");
        filled.set_prize_pool(0, 0, PrizeField::Amount, "1500.50");
        filled.set_prize_pool(0, 1, PrizeField::Rank, "first");

        let payload = filled.to_payload(Tz::UTC).unwrap();
        assert_eq!(
            payload.sub_events[0].prize_pools,
            vec![
                PrizePool { rank: 2, amount: 1500.5 },
                PrizePool { rank: 0, amount: 0.0 }
            ]
        );
    }

    #[rstest]
    fn bad_date_is_rejected(mut filled: EventForm) {
        filled.set_date(DateBound::Start, "next week");
        assert!(matches!(
            filled.to_payload(Tz::UTC),
            Err(SharedError::InvalidDate(_))
        ));
    }

    #[test]
    fn hydrates_from_stored_event() {
        let event: EventDto = serde_json::from_str(
            r#"{"_id":"e1","name":"Tech Fest","description":"d",
                "conductedDates":{"start":"2025-04-15T09:00:00Z"}}"#,
        )
        .unwrap();
        let form = EventForm::from_event(&event, resolve_timezone("Asia/Kolkata"));
        assert_eq!(form.start, "2025-04-15T14:30");
        assert_eq!(form.end, "");
        assert_eq!(form.maximum_students, "");
    }

    #[test]
    fn hydration_keeps_sub_event_identity() {
        let event: EventDto = serde_json::from_str(
            r#"{"_id":"e1","maximumStudents":80,"subEvents":[{"_id":"s1","name":"Quiz",
                "prizePools":[{"rank":1,"amount":500}],"rounds":[{"_id":"r1","name":"Prelims"}]}]}"#,
        )
        .unwrap();
        let form = EventForm::from_event(&event, Tz::UTC);
        assert_eq!(form.maximum_students, "80");
        let payload_sub = form.sub_events[0].to_payload();
        assert_eq!(payload_sub.id.as_deref(), Some("s1"));
        assert_eq!(payload_sub.rounds[0].name, "Prelims");
        assert_eq!(payload_sub.prize_pools, vec![PrizePool { rank: 1, amount: 500.0 }]);
    }

    #[rstest]
    fn merge_keeps_existing_values_when_extraction_is_blank(mut filled: EventForm) {
        filled.add_tag(TagList::GeneralRules, "Bring ID");
        filled.set_contact(ContactField::Email, "fest@campus.edu");
        filled.merge_extracted(
            ExtractedEventDetails {
                name: Some("  ".into()),
                description: Some("From the brochure".into()),
                general_rules: Some(vec![]),
                maximum_students: Some(LooseNumber::Text("200".into())),
                max_events_per_student: Some(LooseNumber::Integer(0)),
                conducted_dates: Some(ExtractedDates {
                    start: Some("2025-05-01".into()),
                    end: None,
                }),
                contact_info: Some(ExtractedContact {
                    email: None,
                    phone: Some("555-0100".into()),
                }),
                ..Default::default()
            },
            Tz::UTC,
        );

        assert_eq!(filled.name, "Tech Fest 2025");
        assert_eq!(filled.description, "From the brochure");
        assert_eq!(filled.general_rules, vec!["Bring ID".to_string()]);
        assert_eq!(filled.maximum_students, "200");
        assert_eq!(filled.max_events_per_student, "");
        assert_eq!(filled.start, "2025-05-01T00:00");
        assert_eq!(filled.end, "2025-04-16T18:00");
        assert_eq!(filled.contact_email, "fest@campus.edu");
        assert_eq!(filled.contact_phone, "555-0100");
    }

    #[test]
    fn merge_replaces_sub_events() {
        let mut form = EventForm::default();
        form.add_sub_event();
        form.merge_extracted(
            ExtractedEventDetails {
                sub_events: Some(vec![ExtractedSubEvent {
                    name: Some("Robo Race".into()),
                    prize_pools: vec![ExtractedPrizePool {
                        rank: Some(LooseNumber::Integer(1)),
                        amount: Some(LooseNumber::Text("3000".into())),
                    }],
                    ..Default::default()
                }]),
                ..Default::default()
            },
            Tz::UTC,
        );
        assert_eq!(form.sub_events.len(), 1);
        assert_eq!(form.sub_events[0].name, "Robo Race");
        assert_eq!(form.sub_events[0].prize_pools[0].amount, "3000");
        assert_eq!(form.sub_events[0].id, None);
    }

    #[rstest]
    fn reset_clears_everything(mut filled: EventForm) {
        filled.add_sub_event();
        filled.reset();
        assert_eq!(filled, EventForm::default());
    }
}
