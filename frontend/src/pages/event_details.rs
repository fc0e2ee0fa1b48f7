use crate::api::{events, registrations};
use crate::auth::AuthContext;
use crate::browser::browser_timezone;
use crate::components::common_toast::ToastContext;
use crate::Route;
use log::{debug, error};
use shared::datetime::format_optional;
use shared::{EventDto, RegistrationStatus, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EventDetailsProps {
    pub id: String,
}

#[function_component(EventDetails)]
pub fn event_details(props: &EventDetailsProps) -> Html {
    let auth = use_context::<AuthContext>();
    let toasts = use_context::<ToastContext>();
    let event = use_state(|| None::<EventDto>);
    let loading = use_state(|| true);
    // bumped after a registration so the seat count refreshes
    let reload = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    {
        let event = event.clone();
        let loading = loading.clone();
        use_effect_with((props.id.clone(), *reload), move |(id, _)| {
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

    let on_register = {
        let id = props.id.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            let id = id.clone();
            let reload = reload.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match registrations::register_for_event(&id).await {
                    Ok(()) => {
                        debug!("Registered for event {}", id);
                        if let Some(toasts) = &toasts {
                            toasts.success("Successfully registered!");
                        }
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        error!("Error registering for event {}: {}", id, e);
                        if let Some(toasts) = &toasts {
                            toasts.error("Registration failed. Please try again.");
                        }
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="p-6 text-center">{"Loading..."}</div> };
    }
    let Some(event) = (*event).clone() else {
        return html! { <div class="p-6 text-center">{"Event not found"}</div> };
    };

    let user = auth.as_ref().and_then(|auth| auth.state.user.clone());
    let is_student = user.as_ref().map(|u| u.role) == Some(UserRole::Student);
    let status = RegistrationStatus::for_user(&event, user.as_ref().map(|u| u.id.as_str()));
    let capacity = status
        .capacity
        .map(|cap| cap.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="p-6 bg-gray-100">
            <h1 class="text-2xl font-semibold mb-6 text-gray-800">{&event.name}</h1>
            <div class="bg-white p-6 rounded-md shadow-md">
                <p class="text-gray-700">{&event.description}</p>
                <p class="mt-2 text-gray-800">
                    <strong>{"Start: "}</strong>{format_optional(event.conducted_dates.start.as_ref(), *tz)}
                </p>
                <p class="text-gray-800">
                    <strong>{"End: "}</strong>{format_optional(event.conducted_dates.end.as_ref(), *tz)}
                </p>
                <p class="text-gray-800"><strong>{"Max Students: "}</strong>{capacity}</p>
                <p class="text-gray-800"><strong>{"Current Registrations: "}</strong>{status.seats_taken}</p>
                if is_student {
                    <div class="flex items-center gap-4 mt-4">
                        <button
                            onclick={on_register}
                            disabled={!status.can_register()}
                            class={classes!(
                                "px-4", "py-2", "rounded-md", "text-white",
                                if status.can_register() { "bg-gray-600 hover:bg-gray-700" } else { "bg-gray-400 cursor-not-allowed" }
                            )}
                        >
                            {status.button_label()}
                        </button>
                        if status.registered {
                            <Link<Route> to={Route::EventScores { id: event.id.clone() }} classes="text-indigo-600 hover:underline">
                                {"View My Scores"}
                            </Link<Route>>
                        }
                    </div>
                }
            </div>
        </div>
    }
}
