use crate::api::analytics;
use log::error;
use shared::OverallInsights;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Analytics)]
pub fn analytics_page() -> Html {
    let insights = use_state(|| None::<OverallInsights>);
    let loading = use_state(|| false);

    {
        let insights = insights.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            loading.set(true);
            spawn_local(async move {
                match analytics::overall_insights().await {
                    Ok(fetched) => insights.set(fetched),
                    Err(e) => error!("Error fetching insights: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="p-6 text-center">{"Loading..."}</div> };
    }
    let Some(insights) = (*insights).clone() else {
        return html! { <div class="p-6 text-center">{"No data available"}</div> };
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-semibold mb-6">{"Event Analytics"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-white p-4 rounded-md shadow-md">
                    <h2 class="text-lg font-medium">{"Total Events"}</h2>
                    <p class="text-2xl font-bold text-indigo-600">{insights.total_events}</p>
                </div>
                <div class="bg-white p-4 rounded-md shadow-md">
                    <h2 class="text-lg font-medium">{"Total Registrations"}</h2>
                    <p class="text-2xl font-bold text-indigo-600">{insights.total_registrations}</p>
                </div>
                <div class="bg-white p-4 rounded-md shadow-md col-span-1 md:col-span-2">
                    <h2 class="text-lg font-medium">{"Event Status Breakdown"}</h2>
                    <ul class="mt-2">
                        {for insights.event_status_breakdown.iter().map(|status| html! {
                            <li key={status.status.clone()} class="text-gray-700">
                                {format!("{}: {}", status.status, status.count)}
                            </li>
                        })}
                    </ul>
                </div>
                <div class="bg-white p-4 rounded-md shadow-md col-span-1 md:col-span-2">
                    <h2 class="text-lg font-medium">{"Department Participation"}</h2>
                    <ul class="mt-2">
                        {for insights.department_participation.iter().map(|dept| html! {
                            <li key={dept.department.clone()} class="text-gray-700">
                                {format!("{}: {} students", dept.department, dept.student_count)}
                            </li>
                        })}
                    </ul>
                </div>
            </div>
        </div>
    }
}
