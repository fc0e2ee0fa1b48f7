use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog closed by the overlay or the × button.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-gray-50 bg-opacity-50"
            onclick={on_overlay_click}
        >
            <div
                class="bg-white rounded-lg shadow-lg p-6 w-full max-w-md mx-4"
                onclick={on_modal_click}
            >
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-bold text-gray-900">{props.title.clone()}</h2>
                    <button
                        onclick={on_close_click}
                        class="text-gray-500 hover:text-gray-700 text-2xl font-bold"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
