use crate::api::scheduling;
use crate::browser::browser_timezone;
use crate::components::common_toast::ToastContext;
use log::{debug, error, warn};
use shared::datetime::{format_display, to_datetime_local};
use shared::{ScheduleBoard, ScheduleEditor};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EventScheduleProps {
    pub id: String,
}

/// Per sub-event round schedule with inline editing of one schedule at a time.
#[function_component(EventSchedule)]
pub fn event_schedule(props: &EventScheduleProps) -> Html {
    let toasts = use_context::<ToastContext>();
    let board = use_state(ScheduleBoard::default);
    let editing = use_state(|| None::<ScheduleEditor>);
    let loading = use_state(|| true);
    let tz = use_memo((), |_| browser_timezone());

    {
        let board = board.clone();
        let loading = loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match scheduling::get_schedules(&id).await {
                    Ok(schedules) => board.set(ScheduleBoard::new(schedules)),
                    Err(e) => error!("Error fetching schedules: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_save = {
        let board = board.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(editor) = (*editing).clone() else {
                return;
            };
            let board = board.clone();
            let editing = editing.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let schedule = editor.finish();
                match scheduling::update_schedule(&schedule).await {
                    Ok(()) => {
                        debug!("Saved schedule {}", schedule.id);
                        let mut next = (*board).clone();
                        next.replace(schedule);
                        board.set(next);
                        editing.set(None);
                    }
                    Err(e) => {
                        error!("Error saving schedule: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to save schedule"));
                        }
                    }
                }
            });
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let tz = *tz;
    html! {
        <div class="p-6 bg-gray-100">
            <h1 class="text-2xl font-semibold mb-6">{"Event Schedule"}</h1>
            if *loading {
                <p>{"Loading..."}</p>
            } else {
                <div class="space-y-4">
                    {for board.schedules.iter().map(|schedule| {
                        let priority = schedule.priority.map(|p| p.to_string()).unwrap_or_default();
                        let editor = editing.as_ref().filter(|e| e.schedule_id() == schedule.id);
                        let body = match editor {
                            Some(editor) => html! {
                                <div>
                                    {for editor.schedule().rounds.iter().enumerate().map(|(index, round)| {
                                        let on_name = {
                                            let editing = editing.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let Some(mut editor) = (*editing).clone() else { return };
                                                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                                if editor.rename_round(index, value).is_ok() {
                                                    editing.set(Some(editor));
                                                }
                                            })
                                        };
                                        let on_start = {
                                            let editing = editing.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let Some(mut editor) = (*editing).clone() else { return };
                                                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                                match editor.set_round_start(index, &value, tz) {
                                                    Ok(()) => editing.set(Some(editor)),
                                                    Err(e) => warn!("Ignoring round start {:?}: {}", value, e),
                                                }
                                            })
                                        };
                                        html! {
                                            <div key={round.round_id.clone()} class="mt-2">
                                                <input type="text" value={round.name.clone()} oninput={on_name} class="border p-2 rounded" />
                                                <input
                                                    type="datetime-local"
                                                    value={to_datetime_local(&round.time_slot.start, tz)}
                                                    oninput={on_start}
                                                    class="border p-2 rounded ml-2"
                                                />
                                            </div>
                                        }
                                    })}
                                    <button onclick={on_save.clone()} class="mt-2 bg-gray-700 text-white px-4 py-2 rounded">{"Save"}</button>
                                    <button onclick={on_cancel.clone()} class="mt-2 ml-2 bg-gray-300 px-4 py-2 rounded">{"Cancel"}</button>
                                </div>
                            },
                            None => {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let schedule = schedule.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(ScheduleEditor::new(&schedule))))
                                };
                                html! {
                                    <div>
                                        {for schedule.rounds.iter().map(|round| html! {
                                            <p key={round.round_id.clone()}>
                                                {format!(
                                                    "{}: {} - {}",
                                                    round.name,
                                                    format_display(&round.time_slot.start, tz),
                                                    format_display(&round.time_slot.end, tz)
                                                )}
                                            </p>
                                        })}
                                        <button onclick={on_edit} class="mt-2 bg-gray-600 text-white px-4 py-2 rounded">{"Edit"}</button>
                                    </div>
                                }
                            }
                        };
                        html! {
                            <div key={schedule.id.clone()} class="bg-white p-4 rounded-md shadow-md">
                                <h2 class="text-lg font-medium">{&schedule.sub_event_name}</h2>
                                <p>{format!("Priority: {}", priority)}</p>
                                {body}
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
