use crate::dto::event::EventDto;

/// Whether a user may still sign up for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationStatus {
    pub registered: bool,
    pub seats_taken: usize,
    /// `None` when the event sets no limit
    pub capacity: Option<u32>,
    pub is_full: bool,
}

impl RegistrationStatus {
    pub fn for_user(event: &EventDto, user_id: Option<&str>) -> Self {
        let seats_taken = event.registered_students.len();
        let capacity = event.maximum_students;
        RegistrationStatus {
            registered: user_id.map_or(false, |id| event.has_student(id)),
            seats_taken,
            capacity,
            is_full: capacity.map_or(false, |cap| seats_taken >= cap as usize),
        }
    }

    pub fn can_register(&self) -> bool {
        !self.registered && !self.is_full
    }

    pub fn button_label(&self) -> &'static str {
        if self.registered {
            "Already Registered"
        } else {
            "Register Now"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::event::StudentRef;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn event_with(students: &[&str], capacity: Option<u32>) -> EventDto {
        EventDto {
            id: "e1".into(),
            maximum_students: capacity,
            registered_students: students
                .iter()
                .map(|id| StudentRef {
                    id: id.to_string(),
                    username: id.to_string(),
                    name: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(&["u1"], Some(2), Some("u2"), true)]
    #[case(&["u1", "u3"], Some(2), Some("u2"), false)]
    #[case(&["u1"], Some(2), Some("u1"), false)]
    #[case(&["u1", "u3", "u4"], None, Some("u2"), true)]
    #[case(&[], Some(0), None, false)]
    fn eligibility(
        #[case] students: &[&str],
        #[case] capacity: Option<u32>,
        #[case] user: Option<&str>,
        #[case] allowed: bool,
    ) {
        let status = RegistrationStatus::for_user(&event_with(students, capacity), user);
        assert_eq!(status.can_register(), allowed);
    }

    #[test]
    fn registered_user_sees_label() {
        let status = RegistrationStatus::for_user(&event_with(&["u1"], Some(10)), Some("u1"));
        assert!(status.registered);
        assert_eq!(status.seats_taken, 1);
        assert_eq!(status.button_label(), "Already Registered");
    }

    #[test]
    fn full_event_is_flagged() {
        let status = RegistrationStatus::for_user(&event_with(&["a", "b"], Some(2)), Some("c"));
        assert!(status.is_full);
        assert_eq!(status.button_label(), "Register Now");
    }
}
