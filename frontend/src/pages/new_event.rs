use crate::api::{assistant, events};
use crate::browser::browser_timezone;
use crate::components::common_toast::ToastContext;
use crate::components::event_form::EventFormBody;
use chrono_tz::Tz;
use log::{debug, error};
use shared::{EventForm, ExtractedEventDetails};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

/// Create-form state; every action applies to the form as it is when dispatched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewEventForm {
    pub form: EventForm,
}

pub enum NewEventAction {
    Edit(EventForm),
    Merge(ExtractedEventDetails, Tz),
    Reset,
}

impl Reducible for NewEventForm {
    type Action = NewEventAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let form = match action {
            NewEventAction::Edit(form) => form,
            NewEventAction::Merge(details, tz) => {
                let mut form = self.form.clone();
                form.merge_extracted(details, tz);
                form
            }
            NewEventAction::Reset => EventForm::default(),
        };
        Rc::new(NewEventForm { form })
    }
}

/// Create-event form with optional PDF pre-fill.
#[function_component(NewEvent)]
pub fn new_event() -> Html {
    let toasts = use_context::<ToastContext>();
    let form = use_reducer(NewEventForm::default);
    let pdf_file = use_state(|| None::<File>);
    let uploading = use_state(|| false);
    let submitting = use_state(|| false);
    // remounts the file input so a reset clears its selection
    let file_input_key = use_state(|| 0u32);
    let tz = use_memo((), |_| browser_timezone());

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: EventForm| form.dispatch(NewEventAction::Edit(next)))
    };

    let on_file = {
        let pdf_file = pdf_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pdf_file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_extract = {
        let form = form.clone();
        let pdf_file = pdf_file.clone();
        let uploading = uploading.clone();
        let toasts = toasts.clone();
        let tz = *tz;
        Callback::from(move |_: MouseEvent| {
            let Some(file) = (*pdf_file).clone() else {
                if let Some(toasts) = &toasts {
                    toasts.info("Please select a PDF file to upload.");
                }
                return;
            };
            let form = form.clone();
            let uploading = uploading.clone();
            let toasts = toasts.clone();
            uploading.set(true);
            spawn_local(async move {
                match assistant::extract_event_details(&file).await {
                    Ok(details) => {
                        form.dispatch(NewEventAction::Merge(details, tz));
                        if let Some(toasts) = &toasts {
                            toasts.success("PDF details extracted and populated successfully!");
                        }
                    }
                    Err(e) => {
                        error!("PDF extraction error: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error("Failed to extract details from PDF. Please try again.");
                        }
                    }
                }
                uploading.set(false);
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let pdf_file = pdf_file.clone();
        let submitting = submitting.clone();
        let file_input_key = file_input_key.clone();
        let tz = *tz;
        Callback::from(move |_: ()| {
            let payload = match form.form.to_payload(tz) {
                Ok(payload) => payload,
                Err(e) => {
                    if let Some(toasts) = &toasts {
                        toasts.error(e.to_string());
                    }
                    return;
                }
            };
            let form = form.clone();
            let pdf_file = pdf_file.clone();
            let submitting = submitting.clone();
            let file_input_key = file_input_key.clone();
            let toasts = toasts.clone();
            submitting.set(true);
            spawn_local(async move {
                match events::create_event(&payload).await {
                    Ok(created) => {
                        debug!("Created event {}", created.id);
                        if let Some(toasts) = &toasts {
                            toasts.success("Event created successfully!");
                        }
                        form.dispatch(NewEventAction::Reset);
                        pdf_file.set(None);
                        file_input_key.set(*file_input_key + 1);
                    }
                    Err(e) => {
                        error!("Submission error: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(e.alert_message("Failed to create event"));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="space-y-8">
            <section>
                <h3 class="text-xl font-semibold mb-4 text-black">{"Event PDF (Optional)"}</h3>
                <div class="flex items-center gap-4">
                    <input
                        key={file_input_key.to_string()}
                        type="file"
                        accept="application/pdf"
                        onchange={on_file}
                        class="block w-full text-sm text-gray-500 file:mr-4 file:py-2 file:px-4 file:rounded-md file:border-0 file:text-sm file:font-semibold file:bg-gray-50 file:text-gray-700 hover:file:bg-gray-100"
                    />
                    <button
                        type="button"
                        onclick={on_extract}
                        disabled={*uploading || pdf_file.is_none()}
                        class={classes!(
                            "py-2", "px-4", "rounded-md", "text-white",
                            if *uploading { "bg-gray-400 cursor-not-allowed" } else { "bg-gray-600 hover:bg-gray-700" }
                        )}
                    >
                        {if *uploading { "Extracting..." } else { "Extract Details" }}
                    </button>
                </div>
            </section>
            <EventFormBody
                form={form.form.clone()}
                {on_change}
                {on_submit}
                submit_label="Create Event"
                submitting={*submitting}
            />
        </div>
    }
}
