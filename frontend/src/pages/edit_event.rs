use crate::api::events;
use crate::browser::browser_timezone;
use crate::components::common_toast::ToastContext;
use crate::components::event_form::EventFormBody;
use crate::Route;
use log::{debug, error};
use shared::EventForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EditEventProps {
    pub id: String,
}

#[function_component(EditEvent)]
pub fn edit_event(props: &EditEventProps) -> Html {
    let toasts = use_context::<ToastContext>();
    let navigator = use_navigator();
    let form = use_state(EventForm::default);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let tz = use_memo((), |_| browser_timezone());

    {
        let form = form.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let tz = *tz;
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match events::get_event(&id).await {
                    Ok(event) => form.set(EventForm::from_event(&event, tz)),
                    Err(e) => {
                        error!("Error fetching event {}: {}", id, e);
                        if let Some(toasts) = &toasts {
                            toasts.error("Failed to load event data");
                        }
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: EventForm| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let id = props.id.clone();
        let tz = *tz;
        Callback::from(move |_: ()| {
            let payload = match form.to_payload(tz) {
                Ok(payload) => payload,
                Err(e) => {
                    if let Some(toasts) = &toasts {
                        toasts.error(e.to_string());
                    }
                    return;
                }
            };
            let id = id.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            spawn_local(async move {
                match events::update_event(&id, &payload).await {
                    Ok(()) => {
                        debug!("Updated event {}", id);
                        if let Some(toasts) = &toasts {
                            toasts.success("Event updated successfully!");
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::OrganizerEvents);
                        }
                    }
                    Err(e) => {
                        error!("Update error: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to update event"));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    if *loading {
        return html! { <div class="text-center py-10">{"Loading event data..."}</div> };
    }

    html! {
        <div class="space-y-8 p-6">
            <h2 class="text-2xl font-bold text-gray-800">{"Edit Event"}</h2>
            <EventFormBody
                form={(*form).clone()}
                {on_change}
                {on_submit}
                submit_label="Update Event"
                submitting={*submitting}
            />
        </div>
    }
}
