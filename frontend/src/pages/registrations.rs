use crate::api::registrations;
use crate::browser::{browser_timezone, confirm};
use crate::components::common_toast::ToastContext;
use log::{debug, error};
use shared::datetime::format_optional;
use shared::MyRegistrations;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Registrations)]
pub fn registrations_page() -> Html {
    let toasts = use_context::<ToastContext>();
    let registrations = use_state(MyRegistrations::default);
    let loading = use_state(|| false);
    let reload = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    {
        let registrations = registrations.clone();
        let loading = loading.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            spawn_local(async move {
                match registrations::my_registrations().await {
                    Ok(fetched) => registrations.set(fetched),
                    Err(e) => error!("Error fetching registrations: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_cancel = {
        let reload = reload.clone();
        Callback::from(move |registration_id: String| {
            if !confirm("Are you sure you want to cancel this registration?") {
                return;
            }
            let reload = reload.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match registrations::cancel_registration(&registration_id).await {
                    Ok(()) => {
                        debug!("Cancelled registration {}", registration_id);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        error!("Error cancelling registration: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to cancel registration"));
                        }
                    }
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="p-6 bg-gray-100">
                <h1 class="text-2xl font-semibold mb-6 text-gray-900">{"My Registrations"}</h1>
                <div class="text-center text-gray-800">{"Loading..."}</div>
            </div>
        };
    }

    html! {
        <div class="p-6 bg-gray-100">
            <h1 class="text-2xl font-semibold mb-6 text-gray-900">{"My Registrations"}</h1>

            <h2 class="text-xl font-medium mb-4 text-gray-800">{"Upcoming Events"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-8">
                {for registrations.upcoming_events.iter().filter_map(|reg| {
                    let event = reg.event.as_ref()?;
                    let onclick = {
                        let on_cancel = on_cancel.clone();
                        let id = reg.id.clone();
                        Callback::from(move |_: MouseEvent| on_cancel.emit(id.clone()))
                    };
                    Some(html! {
                        <div key={reg.id.clone()} class="bg-white p-4 rounded-md shadow-md border border-gray-200">
                            <h3 class="text-lg font-medium text-gray-900">{&event.name}</h3>
                            <p class="text-gray-700">{&event.description}</p>
                            <p class="text-sm mt-2 text-gray-800">
                                <strong>{"Start: "}</strong>{format_optional(event.conducted_dates.start.as_ref(), *tz)}
                            </p>
                            <button {onclick} class="text-red-700 hover:underline mt-2">{"Cancel Registration"}</button>
                        </div>
                    })
                })}
            </div>

            <h2 class="text-xl font-medium mb-4 text-gray-800">{"Past Events"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {for registrations.past_events.iter().filter_map(|reg| {
                    let event = reg.event.as_ref()?;
                    Some(html! {
                        <div key={reg.id.clone()} class="bg-white p-4 rounded-md shadow-md border border-gray-200">
                            <h3 class="text-lg font-medium text-gray-900">{&event.name}</h3>
                            <p class="text-gray-700">{&event.description}</p>
                            <p class="text-sm mt-2 text-gray-800">
                                <strong>{"End: "}</strong>{format_optional(event.conducted_dates.end.as_ref(), *tz)}
                            </p>
                        </div>
                    })
                })}
            </div>
        </div>
    }
}
