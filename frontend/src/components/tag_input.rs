use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TagInputProps {
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub tags: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
}

/// Chips plus a text box that adds its value on Enter.
#[function_component(TagInput)]
pub fn tag_input(props: &TagInputProps) -> Html {
    let on_keydown = {
        let on_add = props.on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                let input: HtmlInputElement = e.target_unchecked_into();
                on_add.emit(input.value());
                input.set_value("");
            }
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{props.label.clone()}</label>
            <div class="mt-1 flex flex-wrap gap-2">
                {for props.tags.iter().enumerate().map(|(index, tag)| {
                    let on_remove = props.on_remove.reform(move |_: MouseEvent| index);
                    html! {
                        <span class="inline-flex items-center px-2 py-1 rounded-full text-sm font-medium bg-gray-200 text-gray-800">
                            {tag}
                            <button type="button" onclick={on_remove} class="ml-2 text-gray-500 hover:text-gray-700">
                                {"×"}
                            </button>
                        </span>
                    }
                })}
            </div>
            <input
                type="text"
                onkeydown={on_keydown}
                class="mt-2 block w-full rounded-md border-gray-300 shadow-sm focus:border-gray-500 focus:ring-gray-500 text-black"
                placeholder={props.placeholder.clone()}
            />
        </div>
    }
}
