use crate::api::events;
use crate::browser::browser_timezone;
use crate::Route;
use log::error;
use shared::datetime::format_optional;
use shared::EventDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct OrganizerEventDetailsProps {
    pub id: String,
}

#[function_component(OrganizerEventDetails)]
pub fn organizer_event_details(props: &OrganizerEventDetailsProps) -> Html {
    let event = use_state(|| None::<EventDto>);
    let loading = use_state(|| true);
    let tz = use_memo((), |_| browser_timezone());

    {
        let event = event.clone();
        let loading = loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match events::get_event(&id).await {
                    Ok(fetched) => event.set(Some(fetched)),
                    Err(e) => {
                        error!("Error fetching event {}: {}", id, e);
                        event.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="p-6 text-center text-gray-800">{"Loading..."}</div> };
    }
    let Some(event) = (*event).clone() else {
        return html! { <div class="p-6 text-center text-gray-800">{"Event not found"}</div> };
    };

    let capacity = event
        .maximum_students
        .map(|cap| cap.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="p-6 bg-gray-50">
            <h1 class="text-2xl font-semibold mb-6 text-gray-900">{&event.name}</h1>
            <div class="bg-white p-6 rounded-md shadow-md border border-gray-200">
                <p class="text-gray-800">{&event.description}</p>
                <p class="mt-2 text-gray-700">
                    <strong>{"Start: "}</strong>{format_optional(event.conducted_dates.start.as_ref(), *tz)}
                </p>
                <p class="text-gray-700">
                    <strong>{"End: "}</strong>{format_optional(event.conducted_dates.end.as_ref(), *tz)}
                </p>
                <p class="text-gray-700"><strong>{"Max Students: "}</strong>{capacity}</p>
                <h3 class="mt-4 font-medium text-gray-900">
                    {format!("Registered Students ({})", event.registered_students.len())}
                </h3>
                <ul class="mt-2 space-y-1">
                    {for event.registered_students.iter().map(|student| html! {
                        <li key={student.id.clone()} class="text-gray-700 bg-gray-50 p-2 rounded">{&student.username}</li>
                    })}
                </ul>
                <div class="mt-6 flex space-x-4">
                    <Link<Route> to={Route::EditEvent { id: event.id.clone() }} classes="text-gray-700 hover:text-gray-900 hover:underline">
                        {"Edit"}
                    </Link<Route>>
                    <Link<Route> to={Route::EventSchedule { id: event.id.clone() }} classes="text-gray-700 hover:text-gray-900 hover:underline">
                        {"Schedule"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
