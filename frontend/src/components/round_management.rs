use crate::api::subevents;
use log::error;
use shared::RoundForm;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RoundManagementProps {
    pub event_id: AttrValue,
    pub sub_event_id: AttrValue,
    pub on_round_added: Callback<()>,
}

#[function_component(RoundManagement)]
pub fn round_management(props: &RoundManagementProps) -> Html {
    let form = use_state(RoundForm::default);
    let error_message = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.name = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };

    let on_categories = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.categories = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error_message = error_message.clone();
        let props = props.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            let request = match form.to_request(&props.event_id, &props.sub_event_id) {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            let form = form.clone();
            let error_message = error_message.clone();
            let on_round_added = props.on_round_added.clone();
            spawn_local(async move {
                match subevents::add_round(&request).await {
                    Ok(()) => {
                        let mut cleared = (*form).clone();
                        cleared.clear();
                        form.set(cleared);
                        on_round_added.emit(());
                    }
                    Err(e) => {
                        error!("Failed to add round: {}", e);
                        error_message.set(Some(e.user_message("Failed to add round.")));
                    }
                }
            });
        })
    };

    html! {
        <form {onsubmit} class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700">{"Round Name"}</label>
                <input
                    type="text"
                    value={form.name.clone()}
                    oninput={on_name}
                    placeholder="e.g., Round 1"
                    class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black"
                    required=true
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700">{"Scoring Categories (comma-separated)"}</label>
                <input
                    type="text"
                    value={form.categories.clone()}
                    oninput={on_categories}
                    placeholder="e.g., Technical, Presentation, Creativity"
                    class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black"
                />
            </div>
            if let Some(message) = (*error_message).clone() {
                <p class="text-red-600 text-sm">{message}</p>
            }
            <button type="submit" class="bg-gray-700 text-white px-4 py-2 rounded-md hover:bg-gray-800">
                {"Add Round"}
            </button>
        </form>
    }
}
