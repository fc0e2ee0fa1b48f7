use crate::api::{assistant, registrations};
use crate::auth::AuthContext;
use log::error;
use shared::UserRole;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const FAILURE_ANSWER: &str = "Sorry, something went wrong.";

/// Floating assistant that answers questions about events.
#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let auth = use_context::<AuthContext>();
    let question = use_state(String::new);
    let answer = use_state(String::new);
    let loading = use_state(|| false);
    let registered_events = use_state(Vec::<String>::new);

    let role = auth.as_ref().and_then(|a| a.state.role());

    // Students give the assistant their registrations as context
    {
        let registered_events = registered_events.clone();
        use_effect_with(role, move |role| {
            if *role == Some(UserRole::Student) {
                wasm_bindgen_futures::spawn_local(async move {
                    match registrations::my_registrations().await {
                        Ok(list) => registered_events.set(list.event_names()),
                        Err(e) => error!("Failed to load registered events for chatbot: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let on_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let on_submit = {
        let question = question.clone();
        let answer = answer.clone();
        let loading = loading.clone();
        let registered_events = registered_events.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*question).clone();
            let events = (*registered_events).clone();
            let answer = answer.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match assistant::ask(&text, events).await {
                    Ok(reply) => answer.set(reply),
                    Err(e) => {
                        error!("Chatbot error: {}", e);
                        answer.set(FAILURE_ANSWER.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="fixed bottom-4 right-4 w-80 bg-white p-4 rounded-md shadow-lg border border-gray-200">
            <h3 class="text-lg font-medium text-gray-800">{"Chatbot"}</h3>
            <form onsubmit={on_submit} class="mt-2">
                <input
                    type="text"
                    value={(*question).clone()}
                    oninput={on_input}
                    placeholder="Ask about events..."
                    class="w-full p-2 border border-gray-300 rounded-md"
                    disabled={*loading}
                />
                <button
                    type="submit"
                    class="mt-2 w-full bg-gray-700 text-white p-2 rounded-md hover:bg-gray-800 disabled:bg-gray-400"
                    disabled={*loading}
                >
                    {if *loading { "Processing..." } else { "Send" }}
                </button>
            </form>
            if !answer.is_empty() {
                <div class="mt-4 p-2 bg-gray-50 rounded-md text-gray-700">{(*answer).clone()}</div>
            }
        </div>
    }
}
