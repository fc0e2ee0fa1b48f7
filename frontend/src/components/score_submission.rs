use crate::api::subevents;
use log::error;
use shared::{RoundDto, ScoreSheet, StudentRef};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ScoreSubmissionProps {
    pub event_id: AttrValue,
    pub sub_event_id: AttrValue,
    pub round: RoundDto,
    pub participants: Vec<StudentRef>,
    pub on_score_submitted: Callback<()>,
}

/// Score entry for one round: pick a participant, one integer per category.
#[function_component(ScoreSubmission)]
pub fn score_submission(props: &ScoreSubmissionProps) -> Html {
    let sheet = use_state(ScoreSheet::default);
    let error_message = use_state(|| None::<String>);

    let on_participant = {
        let sheet = sheet.clone();
        Callback::from(move |e: Event| {
            let mut next = (*sheet).clone();
            next.select_participant(e.target_unchecked_into::<HtmlSelectElement>().value());
            sheet.set(next);
        })
    };

    let onsubmit = {
        let sheet = sheet.clone();
        let error_message = error_message.clone();
        let props = props.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            let request = match sheet.to_request(&props.event_id, &props.sub_event_id, &props.round.id) {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            let sheet = sheet.clone();
            let error_message = error_message.clone();
            let on_score_submitted = props.on_score_submitted.clone();
            spawn_local(async move {
                match subevents::submit_scores(&request).await {
                    Ok(()) => {
                        sheet.set(ScoreSheet::default());
                        on_score_submitted.emit(());
                    }
                    Err(e) => {
                        error!("Failed to submit scores: {}", e);
                        error_message.set(Some(e.user_message("Failed to submit scores.")));
                    }
                }
            });
        })
    };

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-medium text-gray-800 mb-2">{&props.round.name}</h3>
            <form {onsubmit} class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Participant"}</label>
                    <select
                        onchange={on_participant}
                        class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black"
                        required=true
                    >
                        <option value="" selected={sheet.participant_id.is_empty()}>{"Select Participant"}</option>
                        {for props.participants.iter().map(|participant| html! {
                            <option
                                key={participant.id.clone()}
                                value={participant.id.clone()}
                                selected={sheet.participant_id == participant.id}
                            >
                                {participant.display_name()}
                            </option>
                        })}
                    </select>
                </div>
                {for props.round.scoring_categories.iter().map(|category| {
                    let oninput = {
                        let sheet = sheet.clone();
                        let category = category.clone();
                        Callback::from(move |e: InputEvent| {
                            let mut next = (*sheet).clone();
                            next.set_score(&category, &e.target_unchecked_into::<HtmlInputElement>().value());
                            sheet.set(next);
                        })
                    };
                    html! {
                        <div key={category.clone()}>
                            <label class="block text-sm font-medium text-gray-700">{category}</label>
                            <input
                                type="number"
                                min="0"
                                value={sheet.display_value(category)}
                                {oninput}
                                placeholder={format!("Score for {}", category)}
                                class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black"
                            />
                        </div>
                    }
                })}
                if let Some(message) = (*error_message).clone() {
                    <p class="text-red-600 text-sm">{message}</p>
                }
                <button type="submit" class="bg-gray-700 text-white px-4 py-2 rounded-md hover:bg-gray-800">
                    {"Submit Scores"}
                </button>
            </form>
        </div>
    }
}
