use crate::api::{events, registrations};
use crate::auth::AuthContext;
use crate::browser::browser_timezone;
use chrono::{NaiveDate, Utc};
use log::{debug, error};
use shared::calendar::{
    entries_on, month_grid, upcoming, CalendarEntry, DayCell, MonthCursor, WEEKDAY_LABELS,
};
use shared::datetime::local_date;
use shared::{ApiError, EventDto, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

async fn fetch_calendar_events(role: UserRole) -> Result<Vec<EventDto>, ApiError> {
    match role {
        UserRole::Organizer => events::my_events().await,
        UserRole::Student => Ok(registrations::my_registrations()
            .await?
            .events()
            .cloned()
            .collect()),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CalendarDayProps {
    cell: DayCell,
    entries: Vec<CalendarEntry>,
    today: NaiveDate,
}

#[function_component(CalendarDay)]
fn calendar_day(props: &CalendarDayProps) -> Html {
    let current = props.cell.is_current_month();
    let is_today = current && props.cell.date == props.today;

    html! {
        <div class={classes!(
            "p-2", "h-24", "flex", "flex-col", "justify-between", "border", "border-gray-200", "rounded-md",
            if current { "bg-white" } else { "bg-gray-100" }
        )}>
            <div class="text-sm text-center">
                if is_today {
                    <span class="inline-block w-6 h-6 text-center rounded-full border-2 border-purple-600 text-purple-600 font-semibold">
                        {props.cell.day()}
                    </span>
                } else {
                    <span class={if current { "text-gray-800" } else { "text-gray-400" }}>
                        {props.cell.day()}
                    </span>
                }
            </div>
            <div class="space-y-1">
                {for props.entries.iter().map(|entry| html! {
                    <div class={format!("p-1 text-xs text-white rounded bg-{}-500 flex flex-col", entry.color)}>
                        <span>{&entry.title}</span>
                        <span>{&entry.time_start}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CalendarProps {
    entries: Vec<CalendarEntry>,
    today: NaiveDate,
}

#[function_component(Calendar)]
fn calendar(props: &CalendarProps) -> Html {
    let cursor = use_state(|| MonthCursor::containing(props.today));

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.prev()))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };

    html! {
        <div class="max-w-4xl mx-auto bg-white rounded-xl shadow-lg p-3">
            <div class="flex justify-between items-center mb-4">
                <button onclick={on_prev} class="text-gray-600 hover:text-gray-800">{"‹"}</button>
                <h2 class="text-2xl font-bold text-gray-800">{cursor.title()}</h2>
                <button onclick={on_next} class="text-gray-600 hover:text-gray-800">{"›"}</button>
            </div>
            <div class="grid grid-cols-7 gap-1">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="text-center font-medium text-gray-600 py-2">{*label}</div>
                })}
                {for month_grid(*cursor).into_iter().map(|cell| {
                    // only days of the shown month carry events
                    let entries = if cell.is_current_month() {
                        entries_on(&props.entries, cell.date).into_iter().cloned().collect()
                    } else {
                        Vec::new()
                    };
                    html! { <CalendarDay {cell} {entries} today={props.today} /> }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct EventSidebarProps {
    entries: Vec<CalendarEntry>,
    today: NaiveDate,
}

#[function_component(EventSidebar)]
fn event_sidebar(props: &EventSidebarProps) -> Html {
    let today_entries = entries_on(&props.entries, props.today);
    let upcoming_entries = upcoming(&props.entries, props.today);

    html! {
        <div class="w-64 p-4 bg-white rounded-xl shadow-lg mr-4">
            <h3 class="text-lg font-semibold text-gray-800 mb-4">{"Today's Events"}</h3>
            if today_entries.is_empty() {
                <p class="text-sm text-gray-500">{"No events today"}</p>
            } else {
                {for today_entries.iter().map(|entry| html! {
                    <div class="mb-2">
                        <p class="text-sm font-medium text-gray-700">{&entry.title}</p>
                        <p class="text-xs text-gray-500">{&entry.time_start}</p>
                    </div>
                })}
            }

            <h3 class="text-lg font-semibold text-gray-800 mt-6 mb-4">{"Upcoming Events"}</h3>
            if upcoming_entries.is_empty() {
                <p class="text-sm text-gray-500">{"No upcoming events"}</p>
            } else {
                {for upcoming_entries.iter().map(|entry| html! {
                    <div class="mb-2">
                        <p class="text-sm font-medium text-gray-700">{&entry.title}</p>
                        <p class="text-xs text-gray-500">{format!("{} {}", entry.date.format("%Y-%m-%d"), entry.time_start)}</p>
                    </div>
                })}
            }
        </div>
    }
}

/// Month calendar of the organizer's own events or the student's registrations.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>();
    let tz = use_memo((), |_| browser_timezone());
    let today = local_date(&Utc::now(), *tz);

    let entries = use_state(Vec::<CalendarEntry>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    let role = auth.as_ref().and_then(|auth| auth.state.role());
    {
        let entries = entries.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let tz = *tz;
        use_effect_with(role, move |role| {
            if let Some(role) = *role {
                loading.set(true);
                error_message.set(None);
                spawn_local(async move {
                    match fetch_calendar_events(role).await {
                        Ok(fetched) => {
                            debug!("Placing {} events on the calendar", fetched.len());
                            let now = Utc::now();
                            entries.set(
                                fetched
                                    .iter()
                                    .map(|event| CalendarEntry::from_event(event, role, tz, now))
                                    .collect(),
                            );
                        }
                        Err(e) => {
                            error!("Failed to fetch calendar events: {}", e);
                            error_message.set(Some(e.user_message("Failed to fetch events")));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    if !auth.map_or(false, |auth| auth.state.is_authenticated()) {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-gray-600">{"Please log in to view your events."}</p>
            </div>
        };
    }
    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-gray-600">{"Loading events..."}</p>
            </div>
        };
    }
    if let Some(message) = (*error_message).clone() {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-red-600">{message}</p>
            </div>
        };
    }

    html! {
        <div class="min-h-screen bg-gradient-to-b from-purple-50 to-white flex p-6">
            <EventSidebar entries={(*entries).clone()} {today} />
            <div class="flex-1">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">{"Event Calendar"}</h1>
                <p class="text-center text-gray-600 mb-4">
                    {format!("View your events for {}.", MonthCursor::containing(today).title())}
                </p>
                <Calendar entries={(*entries).clone()} {today} />
            </div>
        </div>
    }
}
