use crate::components::tag_input::TagInput;
use shared::forms::event_form::{
    ContactField, DateBound, EventForm, EventTextField, PrizeField, SubEventField, TagList,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black";

#[derive(Properties, Clone, PartialEq)]
pub struct EventFormBodyProps {
    pub form: EventForm,
    pub on_change: Callback<EventForm>,
    pub on_submit: Callback<()>,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub submitting: bool,
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

/// Callback that applies `apply` to a copy of the form and emits the result.
fn edit<E, F>(form: &EventForm, on_change: &Callback<EventForm>, apply: F) -> Callback<E>
where
    E: 'static,
    F: Fn(&mut EventForm, E) + 'static,
{
    let form = form.clone();
    let on_change = on_change.clone();
    Callback::from(move |event: E| {
        let mut next = form.clone();
        apply(&mut next, event);
        on_change.emit(next);
    })
}

fn text_input(
    props: &EventFormBodyProps,
    field: EventTextField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = edit(&props.form, &props.on_change, move |f, e: InputEvent| {
        f.set_text(field, input_value(&e))
    });
    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type={input_type}
                value={props.form.text(field).to_string()}
                {oninput}
                class={INPUT_CLASS}
                placeholder={placeholder}
            />
        </div>
    }
}

fn tag_list(props: &EventFormBodyProps, list: TagList, label: &'static str, placeholder: &'static str) -> Html {
    let on_add = edit(&props.form, &props.on_change, move |f, value: String| {
        f.add_tag(list, &value);
    });
    let on_remove = edit(&props.form, &props.on_change, move |f, index: usize| {
        f.remove_tag(list, index)
    });
    html! {
        <TagInput
            {label}
            {placeholder}
            tags={props.form.tags(list).to_vec()}
            {on_add}
            {on_remove}
        />
    }
}

fn sub_event_card(props: &EventFormBodyProps, index: usize) -> Html {
    let Some(sub) = props.form.sub_events.get(index) else {
        return html! {};
    };
    let set = |field: SubEventField| {
        edit(&props.form, &props.on_change, move |f, e: InputEvent| {
            f.set_sub_event(index, field, input_value(&e))
        })
    };
    let on_overview = edit(&props.form, &props.on_change, move |f, e: InputEvent| {
        f.set_sub_event(index, SubEventField::Overview, textarea_value(&e))
    });
    let add_prize = edit(&props.form, &props.on_change, move |f, _: MouseEvent| {
        f.add_prize_pool(index)
    });
    let remove_sub = edit(&props.form, &props.on_change, move |f, _: MouseEvent| {
        f.remove_sub_event(index)
    });

    html! {
        <div class="mb-6 p-6 border border-gray-200 rounded-md">
            <h4 class="text-lg font-medium text-black mb-4">{format!("Sub-Event {}", index + 1)}</h4>
            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Name"}</label>
                    <input type="text" value={sub.name.clone()} oninput={set(SubEventField::Name)}
                        class={INPUT_CLASS} placeholder="e.g., Hackathon" />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Overview"}</label>
                    <textarea value={sub.overview.clone()} oninput={on_overview} rows="2"
                        class={INPUT_CLASS} placeholder="e.g., 24-hour coding challenge" />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Venue"}</label>
                    <input type="text" value={sub.venue.clone()} oninput={set(SubEventField::Venue)}
                        class={INPUT_CLASS} placeholder="e.g., Main Hall" />
                </div>
                <div>
                    <h5 class="text-md font-medium text-black mb-2">{"Prize Pools"}</h5>
                    {for sub.prize_pools.iter().enumerate().map(|(prize_index, prize)| {
                        let set_prize = |field: PrizeField| {
                            edit(&props.form, &props.on_change, move |f, e: InputEvent| {
                                f.set_prize_pool(index, prize_index, field, input_value(&e))
                            })
                        };
                        let remove_prize = edit(&props.form, &props.on_change, move |f, _: MouseEvent| {
                            f.remove_prize_pool(index, prize_index)
                        });
                        html! {
                            <div class="flex items-end gap-4 mb-2">
                                <div class="flex-1">
                                    <label class="block text-sm font-medium text-gray-700">{"Rank"}</label>
                                    <input type="number" min="1" value={prize.rank.clone()}
                                        oninput={set_prize(PrizeField::Rank)} class={INPUT_CLASS} placeholder="e.g., 1" />
                                </div>
                                <div class="flex-1">
                                    <label class="block text-sm font-medium text-gray-700">{"Amount"}</label>
                                    <input type="number" min="0" step="0.01" value={prize.amount.clone()}
                                        oninput={set_prize(PrizeField::Amount)} class={INPUT_CLASS} placeholder="e.g., 1000" />
                                </div>
                                <button type="button" onclick={remove_prize} class="text-red-600 hover:text-red-800">
                                    {"Remove"}
                                </button>
                            </div>
                        }
                    })}
                    <button
                        type="button"
                        onclick={add_prize}
                        class="mt-2 inline-flex items-center px-3 py-1 border border-transparent text-sm font-medium rounded-md text-gray-700 bg-gray-200 hover:bg-gray-300"
                    >
                        {"Add Prize Pool"}
                    </button>
                </div>
            </div>
            <button type="button" onclick={remove_sub} class="mt-4 text-red-600 hover:text-red-800">
                {"Remove Sub-Event"}
            </button>
        </div>
    }
}

/// Every input of the event create/edit form.
#[function_component(EventFormBody)]
pub fn event_form_body(props: &EventFormBodyProps) -> Html {
    let form = &props.form;

    let on_description = edit(form, &props.on_change, |f, e: InputEvent| {
        f.set_text(EventTextField::Description, textarea_value(&e))
    });
    let on_date = |bound: DateBound| {
        edit(form, &props.on_change, move |f, e: InputEvent| f.set_date(bound, input_value(&e)))
    };
    let on_contact = |field: ContactField| {
        edit(form, &props.on_change, move |f, e: InputEvent| {
            f.set_contact(field, input_value(&e))
        })
    };
    let add_sub_event = edit(form, &props.on_change, |f, _: MouseEvent| f.add_sub_event());
    let on_submit = props.on_submit.reform(|_: MouseEvent| ());

    html! {
        <>
            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Event Details"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {text_input(props, EventTextField::Name, "Name", "text", "e.g., Tech Fest 2025")}
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Description"}</label>
                        <textarea
                            value={form.description.clone()}
                            oninput={on_description}
                            class={INPUT_CLASS}
                            rows="3"
                            placeholder="e.g., Annual technology festival..."
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Start Date"}</label>
                        <input type="datetime-local" value={form.start.clone()}
                            oninput={on_date(DateBound::Start)} class={INPUT_CLASS} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"End Date"}</label>
                        <input type="datetime-local" value={form.end.clone()}
                            oninput={on_date(DateBound::End)} class={INPUT_CLASS} />
                    </div>
                </div>
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Targeted Audience"}</h3>
                <div class="space-y-6">
                    {tag_list(props, TagList::Departments, "Departments", "Type and press Enter (e.g., Computer Science)")}
                    {tag_list(props, TagList::Courses, "Courses", "Type and press Enter (e.g., B.Tech)")}
                </div>
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Organizing Details"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {text_input(props, EventTextField::OrganizingInstitution, "Organizing Institution", "text", "e.g., XYZ University")}
                    {text_input(props, EventTextField::OrganizingCollege, "Organizing College", "text", "e.g., ABC College of Engineering")}
                </div>
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Student Limits"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {text_input(props, EventTextField::MaximumStudents, "Maximum Students", "number", "e.g., 200")}
                    {text_input(props, EventTextField::MaxEventsPerStudent, "Max Events Per Student", "number", "e.g., 3")}
                </div>
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Rules and Contact"}</h3>
                <div class="space-y-6">
                    {tag_list(props, TagList::GeneralRules, "General Rules", "Type and press Enter (e.g., No outside food)")}
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                            <input type="email" value={form.contact_email.clone()}
                                oninput={on_contact(ContactField::Email)} class={INPUT_CLASS} placeholder="e.g., events@xyz.edu" />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Phone"}</label>
                            <input type="tel" value={form.contact_phone.clone()}
                                oninput={on_contact(ContactField::Phone)} class={INPUT_CLASS} placeholder="e.g., +1234567890" />
                        </div>
                    </div>
                </div>
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Sub Events"}</h3>
                {for (0..form.sub_events.len()).map(|index| sub_event_card(props, index))}
                <button
                    type="button"
                    onclick={add_sub_event}
                    class="inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md text-white bg-gray-600 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500"
                >
                    {"Add Sub-Event"}
                </button>
            </section>

            <div>
                <button
                    type="button"
                    onclick={on_submit}
                    disabled={props.submitting}
                    class="w-full inline-flex justify-center py-3 px-4 border border-transparent shadow-sm text-sm font-medium rounded-md text-white bg-gray-800 hover:bg-gray-900 disabled:opacity-50 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500"
                >
                    {props.submit_label.clone()}
                </button>
            </div>
        </>
    }
}
