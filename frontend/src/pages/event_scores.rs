use crate::api::utils::require_token;
use crate::api::{events, registrations};
use crate::auth::AuthContext;
use crate::browser::browser_timezone;
use log::error;
use shared::datetime::format_optional;
use shared::scores::{score_rows, total_label};
use shared::{EventDto, SubEventScores, UserDto, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct ScoresView {
    event: Option<EventDto>,
    scores: Vec<SubEventScores>,
    error: Option<String>,
}

/// Loads the event, then the student's scores when they are registered.
/// A failed score fetch keeps the event and reports the problem alongside.
async fn load_scores(event_id: &str, user: Option<&UserDto>) -> ScoresView {
    let Some(user) = user else {
        return ScoresView {
            error: Some("Please log in to view your scores.".into()),
            ..Default::default()
        };
    };
    if let Err(e) = require_token() {
        return ScoresView {
            error: Some(e.to_string()),
            ..Default::default()
        };
    }

    let event = match events::get_event(event_id).await {
        Ok(event) => event,
        Err(e) => {
            error!("Event fetch error: {}", e);
            return ScoresView {
                error: Some(e.user_message(
                    "Failed to load event details. Please check the event ID or try again later.",
                )),
                ..Default::default()
            };
        }
    };

    if !event.has_student(&user.id) {
        return ScoresView {
            event: Some(event),
            scores: Vec::new(),
            error: Some("You are not registered for this event.".into()),
        };
    }

    match registrations::my_scores(event_id).await {
        Ok(scores) => ScoresView {
            event: Some(event),
            scores,
            error: None,
        },
        Err(e) => {
            error!("Scores fetch error: {}", e);
            ScoresView {
                event: Some(event),
                scores: Vec::new(),
                error: Some("Failed to load your scores. Event details are still available.".into()),
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EventScoresProps {
    pub id: String,
}

#[function_component(EventScores)]
pub fn event_scores(props: &EventScoresProps) -> Html {
    let auth = use_context::<AuthContext>();
    let user = auth.and_then(|auth| auth.state.user);
    let view = use_state(ScoresView::default);
    let loading = use_state(|| true);
    let attempt = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    {
        let view = view.clone();
        let loading = loading.clone();
        use_effect_with(
            (props.id.clone(), user.clone(), *attempt),
            move |(id, user, _)| {
                let id = id.clone();
                let user = user.clone();
                loading.set(true);
                spawn_local(async move {
                    view.set(load_scores(&id, user.as_ref()).await);
                    loading.set(false);
                });
                || ()
            },
        );
    }

    if *loading {
        return html! {
            <div class="flex justify-center items-center min-h-screen bg-gray-50">
                <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-gray-600"></div>
            </div>
        };
    }

    let Some(event) = view.event.as_ref() else {
        let retry = {
            let attempt = attempt.clone();
            Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
        };
        return html! {
            <div class="p-6 text-center text-gray-800">
                <p class="text-red-600">{view.error.clone().unwrap_or_default()}</p>
                <button onclick={retry} class="mt-4 px-4 py-2 bg-gray-600 text-white rounded-md hover:bg-gray-700">
                    {"Retry"}
                </button>
            </div>
        };
    };

    let is_student = user.as_ref().map(|u| u.role) == Some(UserRole::Student);
    let is_registered = user.as_ref().map_or(false, |u| event.has_student(&u.id));
    let title = if event.name.is_empty() { "Event" } else { event.name.as_str() };

    html! {
        <div class="p-6 bg-gray-100 min-h-screen">
            <h1 class="text-3xl font-semibold text-gray-900 mb-8">{format!("My Scores for {}", title)}</h1>
            if let Some(message) = view.error.clone() {
                <div class="mb-6 p-4 bg-red-50 border-l-4 border-red-500 text-red-700">{message}</div>
            }

            if !is_student || !is_registered {
                <div class="bg-white p-6 rounded-md shadow-md border border-gray-200 text-gray-700">
                    <p>{"You must be a registered student to view scores for this event."}</p>
                </div>
            } else if view.scores.is_empty() {
                <div class="bg-white p-6 rounded-md shadow-md border border-gray-200 text-gray-600">
                    <p>{"No scores available yet. Check back after the event starts."}</p>
                </div>
            } else {
                <div class="space-y-8">
                    {for view.scores.iter().map(|sub_scores| {
                        let sub_event = event.sub_event(&sub_scores.sub_event_id);
                        let name = sub_event.map(|s| s.name.as_str()).filter(|n| !n.is_empty()).unwrap_or("Unknown Sub-Event");
                        let overview = sub_event.map(|s| s.overview.as_str()).filter(|o| !o.is_empty()).unwrap_or("No overview provided");
                        let venue = sub_event.map(|s| s.venue.as_str()).filter(|v| !v.is_empty()).unwrap_or("Not specified");
                        let time = format_optional(sub_event.and_then(|s| s.time.as_ref()), *tz);
                        let rows = score_rows(sub_scores);
                        html! {
                            <section key={sub_scores.sub_event_id.clone()} class="bg-white p-6 rounded-md shadow-md border border-gray-200">
                                <h2 class="text-xl font-medium text-gray-800 mb-4">{name}</h2>
                                <p class="text-gray-700 mb-2"><strong>{"Overview: "}</strong>{overview}</p>
                                <p class="text-gray-700 mb-2"><strong>{"Venue: "}</strong>{venue}</p>
                                <p class="text-gray-700 mb-4"><strong>{"Time: "}</strong>{time}</p>
                                if sub_scores.rounds.is_empty() {
                                    <p class="text-gray-600 mt-2">{"No scores available for this sub-event yet."}</p>
                                } else {
                                    <div class="mt-2">
                                        <h3 class="text-lg font-medium text-gray-800 mb-2">{"Rounds and Scores"}</h3>
                                        <table class="min-w-full divide-y divide-gray-200">
                                            <thead class="bg-gray-50">
                                                <tr>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Round"}</th>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Category"}</th>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Score"}</th>
                                                </tr>
                                            </thead>
                                            <tbody class="bg-white divide-y divide-gray-200">
                                                {for rows.into_iter().map(|row| html! {
                                                    <tr>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{row.round_label.unwrap_or_default()}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{row.category}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{row.score}</td>
                                                    </tr>
                                                })}
                                            </tbody>
                                        </table>
                                        <p class="mt-4 text-gray-700 font-medium">
                                            {format!("Total Score: {}", total_label(sub_scores.total_score))}
                                        </p>
                                    </div>
                                }
                            </section>
                        }
                    })}
                </div>
            }
        </div>
    }
}
