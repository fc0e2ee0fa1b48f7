use crate::api::events;
use crate::Route;
use log::error;
use serde::{Deserialize, Serialize};
use shared::EventDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// `?eventId=` of the sub-event management page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubEventsQuery {
    #[serde(default)]
    pub event_id: Option<String>,
}

#[derive(Properties, Clone, PartialEq)]
struct EventPickerProps {
    events: Vec<EventDto>,
}

#[function_component(EventPicker)]
fn event_picker(props: &EventPickerProps) -> Html {
    if props.events.is_empty() {
        return html! { <div class="text-center text-gray-700">{"No events yet."}</div> };
    }
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {for props.events.iter().map(|event| html! {
                <div key={event.id.clone()} class="bg-white p-4 rounded-md shadow-md">
                    <h2 class="text-lg font-medium text-gray-800">{&event.name}</h2>
                    <p class="text-gray-700">{&event.description}</p>
                    <Link<Route, SubEventsQuery>
                        to={Route::SubEvents}
                        query={Some(SubEventsQuery { event_id: Some(event.id.clone()) })}
                        classes="mt-2 inline-block text-gray-700 hover:text-gray-900 hover:underline"
                    >
                        {"Manage Sub-Events"}
                    </Link<Route, SubEventsQuery>>
                </div>
            })}
        </div>
    }
}

/// Sub-events of the event named in the query, or a picker over the
/// organizer's events when none is given.
#[function_component(SubEvents)]
pub fn sub_events() -> Html {
    let event_id = use_location()
        .and_then(|location| location.query::<SubEventsQuery>().ok())
        .and_then(|query| query.event_id)
        .filter(|id| !id.is_empty());

    let event = use_state(|| None::<EventDto>);
    let owned = use_state(Vec::<EventDto>::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let event = event.clone();
        let owned = owned.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        use_effect_with(event_id.clone(), move |event_id| {
            let event_id = event_id.clone();
            loading.set(true);
            error_message.set(None);
            spawn_local(async move {
                match event_id {
                    Some(id) => match events::get_event(&id).await {
                        Ok(fetched) => event.set(Some(fetched)),
                        Err(e) => {
                            error!("Error fetching event {}: {}", id, e);
                            event.set(None);
                            error_message.set(Some(e.user_message("Failed to fetch event details.")));
                        }
                    },
                    None => match events::my_events().await {
                        Ok(fetched) => owned.set(fetched),
                        Err(e) => {
                            error!("Error fetching events: {}", e);
                            error_message.set(Some(e.user_message("Failed to fetch events.")));
                        }
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let content = if *loading {
        html! { <div class="text-center text-gray-700">{"Loading..."}</div> }
    } else if event_id.is_none() {
        html! { <EventPicker events={(*owned).clone()} /> }
    } else if let Some(event) = event.as_ref() {
        html! {
            <div class="space-y-6">
                <div class="bg-white p-4 rounded-md shadow-md">
                    <h2 class="text-lg font-medium text-gray-800">{&event.name}</h2>
                    <p class="text-gray-700">{&event.description}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for event.sub_events.iter().map(|sub_event| {
                        let overview = if sub_event.overview.is_empty() { "No overview" } else { sub_event.overview.as_str() };
                        html! {
                            <div key={sub_event.id.clone()} class="bg-white p-4 rounded-md shadow-md">
                                <h3 class="text-lg font-medium text-gray-800">{&sub_event.name}</h3>
                                <p class="text-gray-700">{overview}</p>
                                <Link<Route>
                                    to={Route::SubEventDetails { event_id: event.id.clone(), sub_event_id: sub_event.id.clone() }}
                                    classes="mt-2 inline-block text-gray-700 hover:text-gray-900 hover:underline"
                                >
                                    {"Manage Rounds & Scores"}
                                </Link<Route>>
                            </div>
                        }
                    })}
                </div>
            </div>
        }
    } else {
        html! { <div class="text-center text-gray-700">{"Event not found."}</div> }
    };

    html! {
        <div class="p-6 bg-gray-100">
            <h1 class="text-2xl font-semibold text-gray-800 mb-6">{"Sub-Event Management"}</h1>
            if let Some(message) = (*error_message).clone() {
                <div class="mb-6 p-4 bg-red-50 border-l-4 border-red-500 text-red-700">{message}</div>
            }
            {content}
        </div>
    }
}
