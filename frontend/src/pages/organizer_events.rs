use crate::api::events;
use crate::browser::confirm;
use crate::components::common_toast::ToastContext;
use crate::Route;
use log::{debug, error};
use shared::EventDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Events owned by the signed-in organizer.
#[function_component(OrganizerEvents)]
pub fn organizer_events() -> Html {
    let toasts = use_context::<ToastContext>();
    let events = use_state(Vec::<EventDto>::new);
    let loading = use_state(|| false);

    {
        let events = events.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            loading.set(true);
            spawn_local(async move {
                match events::my_events().await {
                    Ok(fetched) => events.set(fetched),
                    Err(e) => error!("Error fetching events: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let events = events.clone();
        Callback::from(move |event_id: String| {
            if !confirm("Are you sure you want to delete this event? This action cannot be undone.") {
                return;
            }
            let events = events.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match events::delete_event(&event_id).await {
                    Ok(()) => {
                        debug!("Deleted event {}", event_id);
                        // drop it locally rather than refetch
                        let remaining = events.iter().filter(|e| e.id != event_id).cloned().collect();
                        events.set(remaining);
                        if let Some(toasts) = &toasts {
                            toasts.success("Event deleted successfully!");
                        }
                    }
                    Err(e) => {
                        error!("Error deleting event: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to delete event"));
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="p-6 bg-gray-100">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold text-gray-800">{"My Events"}</h1>
                <div class="flex gap-2">
                    <Link<Route> to={Route::Scheduling} classes="bg-white border border-gray-300 text-gray-700 px-4 py-2 rounded-md hover:bg-gray-50">
                        {"Scheduling"}
                    </Link<Route>>
                    <Link<Route> to={Route::NewEvent} classes="bg-gray-700 text-white px-4 py-2 rounded-md hover:bg-gray-800">
                        {"Create New Event"}
                    </Link<Route>>
                </div>
            </div>
            if *loading {
                <div class="text-center text-gray-700">{"Loading..."}</div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for events.iter().map(|event| {
                        let onclick = {
                            let on_delete = on_delete.clone();
                            let id = event.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };
                        html! {
                            <div key={event.id.clone()} class="bg-white p-4 rounded-md shadow-md hover:shadow-lg transition-shadow">
                                <h2 class="text-lg font-medium text-gray-800">{&event.name}</h2>
                                <p class="text-gray-700">{&event.description}</p>
                                <div class="mt-4 flex space-x-4">
                                    <Link<Route> to={Route::OrganizerEventDetails { id: event.id.clone() }}
                                        classes="text-gray-700 hover:text-gray-900 hover:underline">
                                        {"View"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::EditEvent { id: event.id.clone() }}
                                        classes="text-gray-700 hover:text-gray-900 hover:underline">
                                        {"Edit"}
                                    </Link<Route>>
                                    <button {onclick} class="text-red-600 hover:text-red-800 hover:underline">{"Delete"}</button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
