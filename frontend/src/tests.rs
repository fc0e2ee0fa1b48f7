#[cfg(test)]
mod tests {
    use crate::api::api_url;
    use crate::api::scheduling::schedules_url;
    use crate::pages::new_event::{NewEventAction, NewEventForm};
    use crate::pages::sub_events::SubEventsQuery;
    use chrono_tz::Tz;
    use shared::forms::event_form::EventTextField;
    use shared::ExtractedEventDetails;
    use std::rc::Rc;
    use yew::Reducible;
    use crate::Route;
    use shared::navigation::nav_items;
    use shared::UserRole;
    use yew_router::Routable;

    #[test]
    fn every_sidebar_link_resolves_to_a_page() {
        for role in [UserRole::Organizer, UserRole::Student] {
            for item in nav_items(role) {
                let route = Route::recognize(item.href);
                assert!(
                    matches!(route, Some(ref r) if *r != Route::NotFound),
                    "{} ({}) has no route",
                    item.name,
                    item.href
                );
            }
        }
    }

    #[test]
    fn literal_segments_win_over_ids() {
        assert_eq!(
            Route::recognize("/dashboard/organizer/events/new"),
            Some(Route::NewEvent)
        );
        assert_eq!(
            Route::recognize("/dashboard/organizer/events/e1/edit"),
            Some(Route::EditEvent { id: "e1".into() })
        );
        assert_eq!(
            Route::recognize("/dashboard/events/e1/scores"),
            Some(Route::EventScores { id: "e1".into() })
        );
    }

    #[test]
    fn sub_event_details_path() {
        let route = Route::SubEventDetails {
            event_id: "e1".into(),
            sub_event_id: "s1".into(),
        };
        assert_eq!(route.to_path(), "/dashboard/organizer/subevents/e1/s1");
        assert_eq!(Route::recognize(&route.to_path()), Some(route));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn sub_events_query_uses_camel_case() {
        let query = SubEventsQuery {
            event_id: Some("e1".into()),
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "eventId": "e1" })
        );
    }

    #[test]
    fn api_urls_append_path() {
        assert!(api_url("/api/events").ends_with("/api/events"));
        assert!(schedules_url("a b").ends_with("/api/scheduling/schedule?eventId=a%20b"));
    }

    #[test]
    fn extraction_keeps_fields_typed_while_it_ran() {
        let state = Rc::new(NewEventForm::default());
        // the user keeps typing after clicking "Extract Details"
        let mut typed = state.form.clone();
        typed.set_text(EventTextField::Name, "Tech Fest 2025");
        typed.set_text(EventTextField::OrganizingCollege, "ABC College");
        let state = state.reduce(NewEventAction::Edit(typed));

        let details: ExtractedEventDetails = serde_json::from_str(
            r#"{"name":"","description":"Annual technology festival","organizingCollege":null}"#,
        )
        .unwrap();
        let state = state.reduce(NewEventAction::Merge(details, Tz::UTC));

        assert_eq!(state.form.name, "Tech Fest 2025");
        assert_eq!(state.form.organizing_college, "ABC College");
        assert_eq!(state.form.description, "Annual technology festival");

        let state = state.reduce(NewEventAction::Reset);
        assert_eq!(state.form, shared::EventForm::default());
    }
}
