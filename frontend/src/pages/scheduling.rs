use crate::api::{events, scheduling};
use crate::browser::browser_timezone;
use crate::components::common_toast::ToastContext;
use log::{debug, error};
use shared::datetime::format_optional;
use shared::EventDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Scheduling)]
pub fn scheduling_page() -> Html {
    let toasts = use_context::<ToastContext>();
    let events = use_state(Vec::<EventDto>::new);
    let loading = use_state(|| false);
    let reload = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    {
        let events = events.clone();
        let loading = loading.clone();
        use_effect_with(*reload, move |_| {
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

    let on_optimize = {
        let loading = loading.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            let loading = loading.clone();
            let reload = reload.clone();
            let toasts = toasts.clone();
            loading.set(true);
            spawn_local(async move {
                match scheduling::optimize_schedule().await {
                    Ok(response) => {
                        debug!("Optimized {} schedules", response.schedules.len());
                        if let Some(toasts) = &toasts {
                            toasts.success(
                                response
                                    .message
                                    .unwrap_or_else(|| "Schedule optimized successfully!".to_string()),
                            );
                        }
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        error!("Error optimizing schedule: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to optimize schedule"));
                        }
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="p-6 bg-gray-100">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold text-gray-800">{"Event Scheduling"}</h1>
                <button
                    onclick={on_optimize}
                    disabled={*loading}
                    class="bg-gray-700 text-white px-4 py-2 rounded-md hover:bg-gray-800"
                >
                    {if *loading { "Optimizing..." } else { "Optimize Schedule" }}
                </button>
            </div>
            if *loading {
                <div class="text-center text-gray-700">{"Loading..."}</div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for events.iter().map(|event| html! {
                        <div key={event.id.clone()} class="bg-white p-4 rounded-md shadow-md border border-gray-200">
                            <h2 class="text-lg font-medium text-gray-800">{&event.name}</h2>
                            <p class="text-gray-700">{&event.description}</p>
                            <p class="text-sm mt-2 text-gray-600">
                                <strong class="text-gray-800">{"Start: "}</strong>
                                {format_optional(event.conducted_dates.start.as_ref(), *tz)}
                            </p>
                            <p class="text-sm text-gray-600">
                                <strong class="text-gray-800">{"End: "}</strong>
                                {format_optional(event.conducted_dates.end.as_ref(), *tz)}
                            </p>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
