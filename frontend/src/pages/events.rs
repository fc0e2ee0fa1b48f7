use crate::api::events;
use crate::browser::browser_timezone;
use crate::Route;
use log::error;
use shared::datetime::format_optional;
use shared::EventDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Every event students can discover.
#[function_component(Events)]
pub fn events_page() -> Html {
    let events = use_state(Vec::<EventDto>::new);
    let loading = use_state(|| false);
    let tz = use_memo((), |_| browser_timezone());

    {
        let events = events.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            loading.set(true);
            spawn_local(async move {
                match events::list_events().await {
                    Ok(fetched) => events.set(fetched),
                    Err(e) => error!("Error fetching events: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-semibold mb-6">{"All Events"}</h1>
            if *loading {
                <div class="text-center">{"Loading..."}</div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for events.iter().map(|event| html! {
                        <div key={event.id.clone()} class="bg-white p-4 rounded-md shadow-md">
                            <h2 class="text-lg font-medium">{&event.name}</h2>
                            <p class="text-gray-600">{&event.description}</p>
                            <p class="text-sm mt-2">
                                <strong>{"Start: "}</strong>
                                {format_optional(event.conducted_dates.start.as_ref(), *tz)}
                            </p>
                            <Link<Route>
                                to={Route::EventDetails { id: event.id.clone() }}
                                classes="text-indigo-600 hover:underline mt-2 block"
                            >
                                {"View Details"}
                            </Link<Route>>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
