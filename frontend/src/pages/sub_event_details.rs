use crate::api::{events, scheduling};
use crate::browser::browser_timezone;
use crate::components::final_result::FinalResult;
use crate::components::round_management::RoundManagement;
use crate::components::score_submission::ScoreSubmission;
use log::error;
use shared::datetime::format_display;
use shared::schedule::rounds_for_sub_event;
use shared::{RoundSlot, StudentRef, SubEventDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SubEventDetailsProps {
    pub event_id: String,
    pub sub_event_id: String,
}

/// Rounds, schedules, score entry and results of one sub-event.
#[function_component(SubEventDetails)]
pub fn sub_event_details(props: &SubEventDetailsProps) -> Html {
    let sub_event = use_state(|| None::<SubEventDto>);
    let participants = use_state(Vec::<StudentRef>::new);
    let rounds = use_state(Vec::<RoundSlot>::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    // separate counters: scores only refetch the sub-event, new rounds refetch schedules too
    let event_reload = use_state(|| 0u32);
    let schedule_reload = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    {
        let sub_event = sub_event.clone();
        let participants = participants.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        use_effect_with(
            (props.event_id.clone(), props.sub_event_id.clone(), *event_reload),
            move |(event_id, sub_event_id, _)| {
                let event_id = event_id.clone();
                let sub_event_id = sub_event_id.clone();
                loading.set(true);
                error_message.set(None);
                spawn_local(async move {
                    match events::get_event(&event_id).await {
                        Ok(event) => {
                            sub_event.set(event.sub_event(&sub_event_id).cloned());
                            participants.set(event.registered_students);
                        }
                        Err(e) => {
                            error!("Error fetching event {}: {}", event_id, e);
                            error_message
                                .set(Some(e.user_message("Failed to fetch sub-event details.")));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    {
        let rounds = rounds.clone();
        use_effect_with(
            (props.event_id.clone(), props.sub_event_id.clone(), *schedule_reload),
            move |(event_id, sub_event_id, _)| {
                let event_id = event_id.clone();
                let sub_event_id = sub_event_id.clone();
                spawn_local(async move {
                    match scheduling::get_schedules(&event_id).await {
                        Ok(schedules) => {
                            rounds.set(rounds_for_sub_event(&schedules, &sub_event_id).to_vec())
                        }
                        Err(e) => error!("Failed to fetch schedules: {}", e),
                    }
                });
                || ()
            },
        );
    }

    let on_round_added = {
        let event_reload = event_reload.clone();
        let schedule_reload = schedule_reload.clone();
        Callback::from(move |_: ()| {
            event_reload.set(*event_reload + 1);
            schedule_reload.set(*schedule_reload + 1);
        })
    };
    let on_score_submitted = {
        let event_reload = event_reload.clone();
        Callback::from(move |_: ()| event_reload.set(*event_reload + 1))
    };

    let title = sub_event
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Loading...".to_string());
    let event_id = AttrValue::from(props.event_id.clone());
    let sub_event_id = AttrValue::from(props.sub_event_id.clone());

    let content = if *loading {
        html! { <div class="text-center text-gray-700">{"Loading..."}</div> }
    } else if let Some(sub) = sub_event.as_ref() {
        html! {
            <div class="space-y-8">
                <section class="bg-white p-6 rounded-md shadow-md">
                    <h2 class="text-xl font-medium text-gray-800 mb-4">{"Add Rounds"}</h2>
                    <RoundManagement event_id={event_id.clone()} sub_event_id={sub_event_id.clone()} {on_round_added} />
                </section>
                <section class="bg-white p-6 rounded-md shadow-md">
                    <h2 class="text-xl font-medium text-gray-800 mb-4">{"Round Schedules"}</h2>
                    if rounds.is_empty() {
                        <p class="text-gray-700">{"No schedules assigned yet."}</p>
                    } else {
                        <ul class="space-y-2">
                            {for rounds.iter().map(|slot| html! {
                                <li key={slot.round_id.clone()} class="text-gray-700">
                                    {format!(
                                        "{}: {} - {} @ {}",
                                        slot.name,
                                        format_display(&slot.time_slot.start, *tz),
                                        format_display(&slot.time_slot.end, *tz),
                                        slot.venue.clone().unwrap_or_default()
                                    )}
                                </li>
                            })}
                        </ul>
                    }
                </section>
                <section class="bg-white p-6 rounded-md shadow-md">
                    <h2 class="text-xl font-medium text-gray-800 mb-4">{"Submit Scores"}</h2>
                    if sub.rounds.is_empty() {
                        <p class="text-gray-700">{"No rounds created yet."}</p>
                    } else {
                        {for sub.rounds.iter().map(|round| html! {
                            <ScoreSubmission
                                key={round.id.clone()}
                                event_id={event_id.clone()}
                                sub_event_id={sub_event_id.clone()}
                                round={round.clone()}
                                participants={(*participants).clone()}
                                on_score_submitted={on_score_submitted.clone()}
                            />
                        })}
                    }
                </section>
                <section class="bg-white p-6 rounded-md shadow-md">
                    <h2 class="text-xl font-medium text-gray-800 mb-4">{"Final Results"}</h2>
                    <FinalResult event_id={event_id.clone()} sub_event_id={sub_event_id.clone()} refresh={*event_reload} />
                </section>
            </div>
        }
    } else {
        html! { <div class="text-center text-gray-700">{"Sub-event not found."}</div> }
    };

    html! {
        <div class="p-6 bg-gray-100">
            <h1 class="text-2xl font-semibold text-gray-800 mb-6">{format!("Manage Sub-Event: {}", title)}</h1>
            if let Some(message) = (*error_message).clone() {
                <div class="mb-6 p-4 bg-red-50 border-l-4 border-red-500 text-red-700">{message}</div>
            }
            {content}
        </div>
    }
}
