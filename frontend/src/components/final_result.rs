use crate::api::subevents;
use log::error;
use shared::scores::{ranked_results, RankedResult};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FinalResultProps {
    pub event_id: AttrValue,
    pub sub_event_id: AttrValue,
    /// Bumped by the parent to refetch after new scores land
    #[prop_or_default]
    pub refresh: u32,
}

#[function_component(FinalResult)]
pub fn final_result(props: &FinalResultProps) -> Html {
    let results = use_state(Vec::<RankedResult>::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let results = results.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        use_effect_with(
            (props.event_id.clone(), props.sub_event_id.clone(), props.refresh),
            move |(event_id, sub_event_id, _)| {
                let event_id = event_id.clone();
                let sub_event_id = sub_event_id.clone();
                loading.set(true);
                error_message.set(None);
                spawn_local(async move {
                    match subevents::results(&event_id, &sub_event_id).await {
                        Ok(fetched) => results.set(ranked_results(fetched)),
                        Err(e) => {
                            error!("Failed to fetch results: {}", e);
                            error_message.set(Some(e.user_message("Failed to fetch results.")));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    if *loading {
        return html! { <p class="text-gray-700">{"Loading results..."}</p> };
    }
    if let Some(message) = (*error_message).clone() {
        return html! { <p class="text-red-600">{message}</p> };
    }
    if results.is_empty() {
        return html! { <p class="text-gray-700">{"No results available yet."}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Rank"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Participant"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Total Score"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {for results.iter().map(|result| html! {
                        <tr key={result.participant_id.clone()}>
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{result.rank}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{&result.name}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{&result.total}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
